// SPDX-License-Identifier: MIT

//! Billing glue: checkout/portal session stubs and webhook signature
//! verification.
//!
//! Checkout and portal sessions are placeholders that construct
//! deterministic provider URLs without calling Stripe. The webhook
//! signature check is real: HMAC-SHA256 over `"{t}.{body}"` with the
//! configured signing secret, `stripe-signature: t=...,v1=...` header
//! format.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::services::entitlement;

type HmacSha256 = Hmac<Sha256>;

/// Reject events whose signature timestamp is further than this from now.
const SIGNATURE_TOLERANCE_SECS: i64 = 5 * 60;

/// Checkout session handed back to the client for redirect.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub url: String,
}

/// Billing portal session handed back to the client for redirect.
#[derive(Debug, Clone)]
pub struct PortalSession {
    pub url: String,
}

/// Create a checkout session for a plan.
///
/// Fails when the plan is unknown or carries no Stripe price reference
/// (the free plan). The returned URL is a deterministic placeholder
/// until the real Stripe integration lands.
pub fn checkout_session(plan_id: &str, user_id: &str) -> Result<CheckoutSession, AppError> {
    let plan = entitlement::plan_by_id(plan_id)
        .ok_or_else(|| AppError::InvalidPlan(format!("Unknown plan '{}'", plan_id)))?;

    let price_id = plan.stripe_price_id.as_deref().ok_or_else(|| {
        AppError::InvalidPlan(format!("Plan '{}' has no Stripe price ID", plan_id))
    })?;

    tracing::info!(
        plan_id,
        user_id,
        stripe_price_id = price_id,
        "Creating checkout session (placeholder)"
    );

    Ok(CheckoutSession {
        url: format!(
            "https://checkout.stripe.com/c/pay/cs_test_{}_{}",
            plan.id,
            urlencoding::encode(user_id)
        ),
    })
}

/// Create a customer portal session.
///
/// Unconditional placeholder; the customer id is not validated.
pub fn portal_session(customer_id: &str) -> PortalSession {
    tracing::info!(customer_id, "Creating portal session (placeholder)");

    PortalSession {
        url: format!(
            "https://billing.stripe.com/placeholder?customer={}",
            urlencoding::encode(customer_id)
        ),
    }
}

/// Verify a Stripe webhook signature header against the raw body.
///
/// `now` is the current Unix time, passed in so tests can pin it.
pub fn verify_webhook_signature(
    secret: &str,
    signature_header: &str,
    payload: &[u8],
    now: i64,
) -> Result<(), AppError> {
    let mut timestamp: Option<&str> = None;
    let mut signature: Option<&str> = None;

    for part in signature_header.split(',') {
        if let Some(rest) = part.strip_prefix("t=") {
            timestamp = Some(rest);
        } else if let Some(rest) = part.strip_prefix("v1=") {
            signature = Some(rest);
        }
    }

    let timestamp_raw =
        timestamp.ok_or_else(|| AppError::WebhookSignature("missing timestamp".to_string()))?;
    let timestamp = timestamp_raw
        .parse::<i64>()
        .map_err(|_| AppError::WebhookSignature("malformed timestamp".to_string()))?;
    let signature =
        signature.ok_or_else(|| AppError::WebhookSignature("missing v1 signature".to_string()))?;

    if (now - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(AppError::WebhookSignature(
            "timestamp outside tolerance".to_string(),
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| AppError::WebhookSignature("invalid signing secret".to_string()))?;
    // Sign over the header's own timestamp bytes, not a re-formatted copy
    mac.update(timestamp_raw.as_bytes());
    mac.update(b".");
    mac.update(payload);
    let expected = mac.finalize().into_bytes();

    let provided = hex::decode(signature)
        .map_err(|_| AppError::WebhookSignature("malformed v1 signature".to_string()))?;

    // Slice ct_eq also rejects length mismatches in constant time
    if bool::from(expected[..].ct_eq(&provided[..])) {
        Ok(())
    } else {
        Err(AppError::WebhookSignature("signature mismatch".to_string()))
    }
}

/// Compute the `stripe-signature` header value for a payload.
///
/// Used by tests and local tooling to produce valid signed events.
pub fn sign_payload(secret: &str, payload: &[u8], timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let sig = hex::encode(mac.finalize().into_bytes());
    format!("t={},v1={}", timestamp, sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    #[test]
    fn test_checkout_requires_price_reference() {
        let err = checkout_session("free", "user-1").unwrap_err();
        assert!(matches!(err, AppError::InvalidPlan(_)));

        let err = checkout_session("enterprise", "user-1").unwrap_err();
        assert!(matches!(err, AppError::InvalidPlan(_)));
    }

    #[test]
    fn test_checkout_url_is_deterministic() {
        let a = checkout_session("plus", "user-1").unwrap();
        let b = checkout_session("plus", "user-1").unwrap();
        assert_eq!(a.url, b.url);
        assert!(a.url.starts_with("https://checkout.stripe.com/c/pay/cs_test_plus_"));
    }

    #[test]
    fn test_portal_encodes_customer_id() {
        let session = portal_session("cus_abc/../x");
        assert_eq!(
            session.url,
            "https://billing.stripe.com/placeholder?customer=cus_abc%2F..%2Fx"
        );
    }

    #[test]
    fn test_signature_round_trip() {
        let payload = br#"{"type":"invoice.payment_failed"}"#;
        let now = 1_700_000_000;
        let header = sign_payload(SECRET, payload, now);
        verify_webhook_signature(SECRET, &header, payload, now).unwrap();
    }

    #[test]
    fn test_signature_rejects_tampered_body() {
        let now = 1_700_000_000;
        let header = sign_payload(SECRET, b"original", now);
        let err = verify_webhook_signature(SECRET, &header, b"tampered", now).unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));
    }

    #[test]
    fn test_signature_rejects_wrong_secret() {
        let now = 1_700_000_000;
        let header = sign_payload("whsec_other", b"payload", now);
        let err = verify_webhook_signature(SECRET, &header, b"payload", now).unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));
    }

    #[test]
    fn test_signature_rejects_stale_timestamp() {
        let signed_at = 1_700_000_000;
        let header = sign_payload(SECRET, b"payload", signed_at);
        let err = verify_webhook_signature(
            SECRET,
            &header,
            b"payload",
            signed_at + SIGNATURE_TOLERANCE_SECS + 1,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));
    }

    #[test]
    fn test_signature_rejects_malformed_header() {
        let err = verify_webhook_signature(SECRET, "v1=deadbeef", b"x", 0).unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));

        let err = verify_webhook_signature(SECRET, "t=123", b"x", 123).unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));

        let err = verify_webhook_signature(SECRET, "t=123,v1=not-hex", b"x", 123).unwrap_err();
        assert!(matches!(err, AppError::WebhookSignature(_)));
    }
}
