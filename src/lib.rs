// SPDX-License-Identifier: MIT

//! Tutoro API: subscription entitlements, user profiles and billing glue
//! for the Tutoro tutoring platform.
//!
//! This crate provides the backend API serving the plan catalog, the
//! Firestore-backed user profile store and the Stripe billing endpoints.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use db::FirestoreDb;
use services::{ProfileService, UserDirectory};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub profiles: ProfileService,
    pub directory: Arc<dyn UserDirectory>,
}
