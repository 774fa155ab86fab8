// SPDX-License-Identifier: MIT

//! Stripe webhook event envelope and payload objects.

use serde::Deserialize;

/// Decoded webhook envelope as sent by Stripe.
#[derive(Debug, Deserialize)]
pub struct StripeEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// Subscription object carried by `customer.subscription.*` events.
#[derive(Debug, Deserialize)]
pub struct SubscriptionObject {
    /// Stripe customer reference
    pub customer: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Period start (Unix seconds)
    #[serde(default)]
    pub current_period_start: Option<i64>,
    /// Period end (Unix seconds)
    #[serde(default)]
    pub current_period_end: Option<i64>,
}

/// Invoice object carried by `invoice.*` events.
#[derive(Debug, Deserialize)]
pub struct InvoiceObject {
    /// Stripe customer reference
    pub customer: String,
}

/// Closed set of webhook event kinds the dispatcher understands.
///
/// Matching on this enum instead of raw strings keeps the dispatch table
/// exhaustive at compile time; new event types land in `Unhandled` until
/// a handler arm exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeEventKind {
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionDeleted,
    PaymentSucceeded,
    PaymentFailed,
    Unhandled(String),
}

impl StripeEventKind {
    pub fn parse(event_type: &str) -> Self {
        match event_type {
            "customer.subscription.created" => StripeEventKind::SubscriptionCreated,
            "customer.subscription.updated" => StripeEventKind::SubscriptionUpdated,
            "customer.subscription.deleted" => StripeEventKind::SubscriptionDeleted,
            "invoice.payment_succeeded" => StripeEventKind::PaymentSucceeded,
            "invoice.payment_failed" => StripeEventKind::PaymentFailed,
            other => StripeEventKind::Unhandled(other.to_string()),
        }
    }
}
