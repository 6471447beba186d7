//! Trip model.

use serde::{Deserialize, Serialize};

/// A recorded trip, stored in Firestore (document ID = `id`).
///
/// Trips are immutable once created; history queries order by
/// `created_at` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Server-assigned identifier (UUID v4)
    pub id: String,
    /// Owning user ID
    pub user_id: String,
    /// Start location (free-form name or "lon,lat")
    pub start_location: String,
    /// End location
    pub end_location: String,
    /// Distance in kilometers, >= 0
    pub distance_km: f64,
    /// Duration in minutes, when recorded
    pub duration_minutes: Option<f64>,
    /// Energy used in kWh, when recorded
    pub energy_used_kwh: Option<f64>,
    /// Creation timestamp (server-assigned, RFC 3339; sorts lexicographically)
    pub created_at: String,
}
