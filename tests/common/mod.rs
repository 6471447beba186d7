// SPDX-License-Identifier: MIT

use evrange::config::Config;
use evrange::db::FirestoreDb;
use evrange::routes::create_router;
use evrange::services::PredictionClient;
use evrange::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    let prediction = PredictionClient::new(
        config.prediction_service_url.clone(),
        config.routing_api_key.clone(),
    )
    .expect("Failed to build prediction client");

    let state = Arc::new(AppState {
        config,
        db,
        prediction,
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by the Firestore emulator.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db().await;
    let prediction = PredictionClient::new(
        config.prediction_service_url.clone(),
        config.routing_api_key.clone(),
    )
    .expect("Failed to build prediction client");

    let state = Arc::new(AppState {
        config,
        db,
        prediction,
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT token for a user.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    evrange::middleware::auth::create_jwt(user_id, signing_key).expect("Failed to create JWT")
}
