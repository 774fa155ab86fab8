// SPDX-License-Identifier: MIT

//! Stripe webhook route.
//!
//! Signature verification is enforced; the event handlers themselves
//! intentionally perform no store writes yet — they log the mutation
//! the real integration will make. Every verified event is acknowledged
//! so Stripe does not retry.

use crate::error::{AppError, Result};
use crate::models::{InvoiceObject, StripeEvent, StripeEventKind, SubscriptionObject};
use crate::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/stripe/webhook", post(handle_event))
}

#[derive(Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// Handle an incoming Stripe event (POST, raw body).
async fn handle_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<WebhookAck>> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::WebhookSignature("missing stripe-signature header".to_string()))?;

    crate::services::billing::verify_webhook_signature(
        &state.config.stripe_webhook_secret,
        signature,
        body.as_bytes(),
        chrono::Utc::now().timestamp(),
    )?;

    let event: StripeEvent = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed event payload: {}", e)))?;

    tracing::info!(event_type = %event.event_type, event_id = ?event.id, "Webhook event received");

    match StripeEventKind::parse(&event.event_type) {
        StripeEventKind::SubscriptionCreated | StripeEventKind::SubscriptionUpdated => {
            let sub: SubscriptionObject = parse_object(event.data.object)?;
            handle_subscription_update(&sub);
        }
        StripeEventKind::SubscriptionDeleted => {
            let sub: SubscriptionObject = parse_object(event.data.object)?;
            handle_subscription_canceled(&sub);
        }
        StripeEventKind::PaymentSucceeded => {
            let invoice: InvoiceObject = parse_object(event.data.object)?;
            handle_payment_succeeded(&invoice);
        }
        StripeEventKind::PaymentFailed => {
            let invoice: InvoiceObject = parse_object(event.data.object)?;
            handle_payment_failed(&invoice);
        }
        StripeEventKind::Unhandled(event_type) => {
            tracing::debug!(event_type = %event_type, "Ignoring unhandled event type");
        }
    }

    Ok(Json(WebhookAck { received: true }))
}

fn parse_object<T: serde::de::DeserializeOwned>(object: serde_json::Value) -> Result<T> {
    serde_json::from_value(object)
        .map_err(|e| AppError::BadRequest(format!("Malformed event object: {}", e)))
}

/// Log the subscription update the store-side integration will perform.
/// No write happens yet; the period bounds arrive as Unix seconds.
fn handle_subscription_update(sub: &SubscriptionObject) {
    tracing::info!(
        customer = %sub.customer,
        status = ?sub.status,
        current_period_start = ?sub.current_period_start,
        current_period_end = ?sub.current_period_end,
        "Subscription updated (no store write yet)"
    );
}

fn handle_subscription_canceled(sub: &SubscriptionObject) {
    tracing::info!(
        customer = %sub.customer,
        "Subscription canceled (no store write yet)"
    );
}

fn handle_payment_succeeded(invoice: &InvoiceObject) {
    tracing::info!(
        customer = %invoice.customer,
        "Payment succeeded (no store write yet)"
    );
}

fn handle_payment_failed(invoice: &InvoiceObject) {
    tracing::info!(
        customer = %invoice.customer,
        "Payment failed (no store write yet)"
    );
}
