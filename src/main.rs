// SPDX-License-Identifier: MIT

//! Tutoro API Server
//!
//! Serves the subscription plan catalog, user profile storage backed by
//! Firestore, and the Stripe checkout/portal/webhook endpoints.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tutoro_api::{
    config::Config,
    db::FirestoreDb,
    services::{FirestoreDirectory, ProfileService},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tutoro API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let profiles = ProfileService::new(db.clone());
    let directory = Arc::new(FirestoreDirectory::new(db.clone()));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        profiles,
        directory,
    });

    // Build router
    let app = tutoro_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tutoro_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
