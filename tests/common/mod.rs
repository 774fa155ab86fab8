// SPDX-License-Identifier: MIT

use std::sync::Arc;

use tutoro_api::config::Config;
use tutoro_api::db::FirestoreDb;
use tutoro_api::middleware::auth::create_session_jwt;
use tutoro_api::routes::create_router;
use tutoro_api::services::{InMemoryDirectory, ProfileService};
use tutoro_api::AppState;

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

/// Create a test app with offline mock dependencies and a seeded
/// in-memory user directory. Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    let profiles = ProfileService::new(db.clone());
    let directory = Arc::new(InMemoryDirectory::seeded());

    let state = Arc::new(AppState {
        config,
        db,
        profiles,
        directory,
    });

    (create_router(state.clone()), state)
}

/// Mint a session JWT for tests.
#[allow(dead_code)]
pub fn test_jwt(uid: &str, signing_key: &[u8]) -> String {
    create_session_jwt(uid, "test@example.com", Some("Test User"), signing_key)
        .expect("JWT creation should succeed")
}
