// SPDX-License-Identifier: MIT

//! EVRange API Server
//!
//! Backend for an electric-vehicle companion app: accounts, battery
//! status, trip history, and range prediction via an external ML
//! routing service.

use evrange::{config::Config, db::FirestoreDb, services::PredictionClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting EVRange API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Initialize the prediction/routing gateway
    let prediction = PredictionClient::new(
        config.prediction_service_url.clone(),
        config.routing_api_key.clone(),
    )
    .expect("Failed to initialize prediction gateway");
    tracing::info!(
        url = %config.prediction_service_url,
        "Prediction gateway initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        prediction,
    });

    // Build router
    let app = evrange::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("evrange=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
