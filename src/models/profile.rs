// SPDX-License-Identifier: MIT

//! User profile and embedded subscription models stored in Firestore.

use serde::{Deserialize, Serialize};

/// Subscription payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Unpaid,
}

/// Subscription sub-document embedded in a user profile.
///
/// All fields are optional on the wire: the subscription update path
/// replaces the whole sub-document with exactly the fields it is given
/// (plus a refreshed `updated_at`), so a stored subscription only has
/// the fields the last writer supplied. Callers that want to keep the
/// tier across an update must re-supply it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSubscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    /// Current billing period start (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<String>,
    /// Current billing period end (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_at_period_end: Option<bool>,
    /// Stripe customer reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    /// Stripe subscription reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserSubscription {
    /// The subscription every new profile starts with.
    pub fn default_free(now: &str) -> Self {
        Self {
            tier: Some("free".to_string()),
            status: Some(SubscriptionStatus::Active),
            created_at: Some(now.to_string()),
            updated_at: Some(now.to_string()),
            ..Default::default()
        }
    }
}

/// User preferences record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub language: String,
    pub theme: String,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            theme: "light".to_string(),
            notifications: true,
        }
    }
}

/// User profile stored in Firestore, keyed by identity-provider uid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    /// Flipped to true exactly once, by profile completion.
    pub profile_completed: bool,

    // School context (set by profile completion)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<UserSubscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}
