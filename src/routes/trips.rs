// SPDX-License-Identifier: MIT

//! Trip history routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Trip;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trips/add", post(add_trip))
        .route("/trips/history", get(get_history))
        .route("/trips/{id}", delete(delete_trip))
}

// ─── Add ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AddTripRequest {
    #[serde(default)]
    start_location: String,
    #[serde(default)]
    end_location: String,
    distance: Option<f64>,
    duration: Option<f64>,
    energy_used: Option<f64>,
}

/// Validate an add-trip request into the distance it carries.
fn validate_add(body: &AddTripRequest) -> Result<f64> {
    if body.start_location.trim().is_empty() || body.end_location.trim().is_empty() {
        return Err(AppError::BadRequest(
            "start_location and end_location are required".to_string(),
        ));
    }

    let distance = body
        .distance
        .ok_or_else(|| AppError::BadRequest("distance is required".to_string()))?;

    // Zero-length trips are valid (e.g. charging stop); negative is not.
    if distance < 0.0 {
        return Err(AppError::BadRequest(
            "distance must not be negative".to_string(),
        ));
    }

    if body.duration.is_some_and(|d| d < 0.0) {
        return Err(AppError::BadRequest(
            "duration must not be negative".to_string(),
        ));
    }

    Ok(distance)
}

/// Record a new trip for the authenticated user.
async fn add_trip(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<AddTripRequest>,
) -> Result<(StatusCode, Json<Trip>)> {
    let distance_km = validate_add(&body)?;

    let trip = Trip {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user.user_id.clone(),
        start_location: body.start_location.trim().to_string(),
        end_location: body.end_location.trim().to_string(),
        distance_km,
        duration_minutes: body.duration,
        energy_used_kwh: body.energy_used,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.db.insert_trip(&trip).await?;

    tracing::debug!(user_id = %user.user_id, trip_id = %trip.id, "Trip recorded");

    Ok((StatusCode::CREATED, Json(trip)))
}

// ─── History ─────────────────────────────────────────────────

/// Get the authenticated user's trips, newest first.
///
/// An empty history is a 200 with an empty array, not an error.
async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Trip>>> {
    let trips = state.db.get_trips_for_user(&user.user_id).await?;
    Ok(Json(trips))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DeleteTripResponse {
    pub message: String,
}

/// Delete one of the authenticated user's trips.
///
/// A trip that does not exist and a trip owned by someone else get the
/// same 404; the ownership check happens before any mutation.
async fn delete_trip(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(trip_id): Path<String>,
) -> Result<Json<DeleteTripResponse>> {
    let trip = state
        .db
        .get_trip(&trip_id)
        .await?
        .filter(|t| t.user_id == user.user_id)
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

    state.db.delete_trip(&trip.id).await?;

    tracing::debug!(user_id = %user.user_id, trip_id = %trip.id, "Trip deleted");

    Ok(Json(DeleteTripResponse {
        message: "Trip removed".to_string(),
    }))
}
