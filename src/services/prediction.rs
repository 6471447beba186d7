// SPDX-License-Identifier: MIT

//! Gateway to the external range-prediction and routing services.
//!
//! Handles:
//! - Range prediction (POST to the ML service's /predict/ endpoint)
//! - Route fetching (openrouteservice-style directions API)
//!
//! One best-effort call per invocation, bounded by a client timeout.
//! No retries, no caching.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outbound request timeout. Without this, a hung prediction service
/// would hang the caller's request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const ROUTING_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions/driving-car";

/// Client for the external prediction and routing services.
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    prediction_base_url: String,
    routing_base_url: String,
    routing_api_key: String,
}

/// Parameters forwarded verbatim to the range-prediction model.
#[derive(Debug, Clone, Serialize)]
pub struct RangeInput {
    pub trip_distance: f64,
    pub elevation_change: f64,
    pub traffic_delay: f64,
    pub battery_consumption: f64,
}

/// Prediction service response body.
#[derive(Debug, Deserialize)]
struct RangeOutput {
    predicted_range_km: f64,
}

impl PredictionClient {
    /// Create a new gateway client.
    pub fn new(prediction_base_url: String, routing_api_key: String) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init: {}", e)))?;

        Ok(Self {
            http,
            prediction_base_url,
            routing_base_url: ROUTING_BASE_URL.to_string(),
            routing_api_key,
        })
    }

    /// Forward trip parameters to the ML service and return the
    /// predicted range in kilometers.
    pub async fn predict_range(&self, input: &RangeInput) -> Result<f64, AppError> {
        let url = format!("{}/predict/", self.prediction_base_url);

        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Prediction request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Prediction service returned error");
            return Err(AppError::Upstream(format!(
                "Prediction service returned {}: {}",
                status,
                truncate(&body, 200)
            )));
        }

        let output: RangeOutput = response
            .json()
            .await
            .map_err(|_| AppError::Upstream("No usable prediction in response".to_string()))?;

        Ok(output.predicted_range_km)
    }

    /// Fetch a driving route between two coordinates ("lon,lat" pairs).
    ///
    /// The API key goes only in the outbound query string; errors relay
    /// the upstream status but never the key.
    pub async fn get_route(
        &self,
        start: &str,
        end: &str,
    ) -> Result<serde_json::Value, AppError> {
        let response = self
            .http
            .get(&self.routing_base_url)
            .query(&[
                ("api_key", self.routing_api_key.as_str()),
                ("start", start),
                ("end", end),
            ])
            .send()
            .await
            .map_err(|e| {
                // reqwest errors can embed the full URL; keep the key out of the message
                AppError::Upstream(format!("Routing request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, "Routing service returned error");
            return Err(AppError::Upstream(format!(
                "Routing service returned {}",
                status
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AppError::Upstream("Invalid routing response".to_string()))?;

        // A directions response without features carries no usable route.
        if payload.get("features").map_or(true, |f| {
            f.as_array().map_or(true, |arr| arr.is_empty())
        }) {
            return Err(AppError::Upstream("No route found".to_string()));
        }

        Ok(payload)
    }
}

/// Truncate upstream error bodies before relaying them.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
