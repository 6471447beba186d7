// SPDX-License-Identifier: MIT

//! Battery status routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::BatteryStatus;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/battery/status", get(get_status))
        .route("/battery/update", post(update_status))
}

/// Get the authenticated user's battery status.
async fn get_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<BatteryStatus>> {
    let status = state
        .db
        .get_battery(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Battery data not found".to_string()))?;

    Ok(Json(status))
}

#[derive(Deserialize)]
struct UpdateBatteryRequest {
    level: Option<f64>,
    #[serde(default)]
    last_charged: String,
    #[serde(default)]
    health: String,
}

/// Validate an update request into the charge level it carries.
fn validate_update(body: &UpdateBatteryRequest) -> Result<f64> {
    let level = body
        .level
        .ok_or_else(|| AppError::BadRequest("level is required".to_string()))?;

    if !(0.0..=100.0).contains(&level) {
        return Err(AppError::BadRequest(
            "level must be between 0 and 100".to_string(),
        ));
    }

    if body.last_charged.trim().is_empty() || body.health.trim().is_empty() {
        return Err(AppError::BadRequest(
            "last_charged and health are required".to_string(),
        ));
    }

    Ok(level)
}

/// Create or replace the authenticated user's battery status.
///
/// Every call supplies all fields, so the write is a full replace; the
/// first call creates the document.
async fn update_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateBatteryRequest>,
) -> Result<Json<BatteryStatus>> {
    let level = validate_update(&body)?;

    let status = BatteryStatus {
        user_id: user.user_id.clone(),
        level,
        last_charged: body.last_charged.trim().to_string(),
        health: body.health.trim().to_string(),
        updated_at: chrono::Utc::now().to_rfc3339(),
    };

    state.db.set_battery(&status).await?;

    tracing::debug!(user_id = %user.user_id, level, "Battery status updated");

    Ok(Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(level: Option<f64>, last_charged: &str, health: &str) -> UpdateBatteryRequest {
        UpdateBatteryRequest {
            level,
            last_charged: last_charged.to_string(),
            health: health.to_string(),
        }
    }

    #[test]
    fn test_level_bounds() {
        // 0 and 100 are inclusive bounds
        assert!(validate_update(&request(Some(0.0), "2024-01-01T00:00:00Z", "Good")).is_ok());
        assert!(validate_update(&request(Some(100.0), "2024-01-01T00:00:00Z", "Good")).is_ok());

        assert!(validate_update(&request(Some(-0.1), "2024-01-01T00:00:00Z", "Good")).is_err());
        assert!(validate_update(&request(Some(100.5), "2024-01-01T00:00:00Z", "Good")).is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(validate_update(&request(None, "2024-01-01T00:00:00Z", "Good")).is_err());
        assert!(validate_update(&request(Some(50.0), "", "Good")).is_err());
        assert!(validate_update(&request(Some(50.0), "2024-01-01T00:00:00Z", "  ")).is_err());
    }
}
