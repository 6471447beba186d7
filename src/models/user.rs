//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account stored in Firestore (document ID = `id`).
///
/// The password is stored only as a bcrypt hash; API responses are built
/// from the public fields and never include `password_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address, unique across users, stored case-sensitively
    pub email: String,
    /// Bcrypt hash of the password
    pub password_hash: String,
    /// When the account was created (RFC 3339)
    pub created_at: String,
}
