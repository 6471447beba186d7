// SPDX-License-Identifier: MIT

//! Route prediction and directions routes.
//!
//! These handlers relay to the external prediction/routing services and
//! never touch battery or trip state.

use crate::error::{AppError, Result};
use crate::services::prediction::RangeInput;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/maps/route", post(predict_route))
        .route("/maps/directions", post(get_directions))
}

// ─── Range Prediction ────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRequest {
    #[serde(default)]
    source: String,
    #[serde(default)]
    destination: String,
    trip_distance: Option<f64>,
    elevation_change: Option<f64>,
    traffic_delay: Option<f64>,
    battery_consumption: Option<f64>,
}

#[derive(Serialize)]
pub struct RouteResponse {
    pub success: bool,
    pub source: String,
    pub destination: String,
    pub predicted_range: f64,
}

/// Validate the prediction inputs out of a route request.
fn validate_route(body: &RouteRequest) -> Result<RangeInput> {
    match (
        body.trip_distance,
        body.elevation_change,
        body.traffic_delay,
        body.battery_consumption,
    ) {
        (Some(trip_distance), Some(elevation_change), Some(traffic_delay), Some(battery_consumption)) => {
            Ok(RangeInput {
                trip_distance,
                elevation_change,
                traffic_delay,
                battery_consumption,
            })
        }
        _ => Err(AppError::BadRequest(
            "trip_distance, elevation_change, traffic_delay and battery_consumption are required"
                .to_string(),
        )),
    }
}

/// Predict the achievable range for a planned trip.
async fn predict_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RouteRequest>,
) -> Result<Json<RouteResponse>> {
    let input = validate_route(&body)?;

    let predicted_range = state.prediction.predict_range(&input).await?;

    Ok(Json(RouteResponse {
        success: true,
        source: body.source,
        destination: body.destination,
        predicted_range,
    }))
}

// ─── Directions ──────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectionsRequest {
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

#[derive(Serialize)]
pub struct DirectionsResponse {
    pub route: serde_json::Value,
    pub message: String,
}

/// A coordinate pair is "lon,lat", both parseable as floats.
fn is_coordinate_pair(s: &str) -> bool {
    let parts: Vec<&str> = s.split(',').collect();
    parts.len() == 2 && parts.iter().all(|p| p.trim().parse::<f64>().is_ok())
}

/// Fetch a driving route between two coordinates.
async fn get_directions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DirectionsRequest>,
) -> Result<Json<DirectionsResponse>> {
    if !is_coordinate_pair(&body.start) || !is_coordinate_pair(&body.end) {
        return Err(AppError::BadRequest(
            "start and end must be lon,lat coordinate pairs".to_string(),
        ));
    }

    let route = state.prediction.get_route(&body.start, &body.end).await?;

    Ok(Json(DirectionsResponse {
        route,
        message: "Route fetched".to_string(),
    }))
}
