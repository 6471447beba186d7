// SPDX-License-Identifier: MIT

//! EVRange: backend API for an electric-vehicle companion app.
//!
//! Users register and log in, record battery status and trip history,
//! and request route/range predictions relayed from an external ML
//! routing service.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::PredictionClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub prediction: PredictionClient,
}
