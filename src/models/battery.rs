//! Battery status model.

use serde::{Deserialize, Serialize};

/// Battery status stored in Firestore.
///
/// The document ID is the owning user's ID, which guarantees at most one
/// status record per user; updates replace the document in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// Owning user ID (also the document ID)
    pub user_id: String,
    /// Charge level, 0-100 inclusive
    pub level: f64,
    /// When the battery was last charged (client-supplied timestamp)
    pub last_charged: String,
    /// Free-form health descriptor ("Good", "Degraded", ...)
    pub health: String,
    /// When this record was last written (RFC 3339)
    pub updated_at: String,
}
