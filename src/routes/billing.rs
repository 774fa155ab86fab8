// SPDX-License-Identifier: MIT

//! Plan catalog and Stripe checkout/portal routes.

use crate::error::{AppError, Result};
use crate::models::Plan;
use crate::services::billing;
use crate::services::entitlement;
use crate::AppState;
use axum::{
    extract::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Public billing routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plans", get(list_plans))
        .route("/api/stripe/checkout", post(create_checkout))
        .route("/api/stripe/portal", post(create_portal))
}

// ─── Plan Catalog ────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlansResponse {
    pub plans: Vec<Plan>,
}

/// List the plan catalog in display order.
async fn list_plans() -> Json<PlansResponse> {
    Json(PlansResponse {
        plans: entitlement::list_plans().to_vec(),
    })
}

// ─── Checkout / Portal ───────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutRequest {
    plan_id: Option<String>,
    user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortalRequest {
    customer_id: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub url: String,
}

fn require_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("Missing field '{}'", name))),
    }
}

/// Create a checkout session for a plan upgrade.
async fn create_checkout(Json(body): Json<CheckoutRequest>) -> Result<Json<SessionResponse>> {
    let plan_id = require_field(body.plan_id, "planId")?;
    let user_id = require_field(body.user_id, "userId")?;

    let session = billing::checkout_session(&plan_id, &user_id)?;
    Ok(Json(SessionResponse { url: session.url }))
}

/// Create a billing portal session.
async fn create_portal(Json(body): Json<PortalRequest>) -> Result<Json<SessionResponse>> {
    let customer_id = require_field(body.customer_id, "customerId")?;

    let session = billing::portal_session(&customer_id);
    Ok(Json(SessionResponse { url: session.url }))
}
