//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Battery status documents, keyed by user ID (one per user)
    pub const BATTERIES: &str = "batteries";
    pub const TRIPS: &str = "trips";
}
