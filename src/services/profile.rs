// SPDX-License-Identifier: MIT

//! Profile store: create/read/update operations over the Firestore
//! `users` collection.
//!
//! Subscription updates REPLACE the embedded sub-document with the
//! fields supplied by the caller; the rest of the profile is merged
//! field-by-field via fetch-modify-write.

use serde::Deserialize;

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Preferences, SubscriptionStatus, UserProfile, UserSubscription};

/// Identity fields handed over by the identity provider on sign-in.
#[derive(Debug, Clone)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial profile update. Only the given fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    pub preferences: Option<Preferences>,
}

/// School-context fields collected by profile completion.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolContext {
    pub grade_level: String,
    pub region: String,
    pub school_type: String,
    pub subjects: Vec<String>,
    pub learning_goals: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Split a display name into first and remaining names.
fn synthesize_names(display_name: &str) -> (String, Option<String>) {
    let mut parts = display_name.split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { None } else { Some(rest) };
    (first, last)
}

/// Profile store over Firestore.
#[derive(Clone)]
pub struct ProfileService {
    db: FirestoreDb,
}

impl ProfileService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Create a profile for an identity, or return the existing one
    /// unchanged.
    ///
    /// New profiles get names synthesized from the display name when not
    /// explicitly supplied, a free/active subscription and default
    /// preferences. Two callers racing on the same new identity are not
    /// serialized here; the last write wins in the store.
    pub async fn create_profile(
        &self,
        identity: &Identity,
        additional: ProfileUpdate,
    ) -> Result<UserProfile, AppError> {
        if let Some(existing) = self.db.get_profile(&identity.uid).await? {
            return Ok(existing);
        }

        let display_name = identity.display_name.clone().unwrap_or_default();
        let (synth_first, synth_last) = synthesize_names(&display_name);
        let first_name = additional.first_name.unwrap_or(synth_first);
        let last_name = additional.last_name.or(synth_last);

        let display_name = additional.display_name.unwrap_or_else(|| {
            if display_name.is_empty() {
                match &last_name {
                    Some(last) => format!("{} {}", first_name, last),
                    None => first_name.clone(),
                }
            } else {
                display_name
            }
        });

        let now = chrono::Utc::now().to_rfc3339();
        let profile = UserProfile {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            display_name,
            first_name,
            last_name,
            photo_url: additional.photo_url.or_else(|| identity.photo_url.clone()),
            created_at: now.clone(),
            updated_at: now.clone(),
            profile_completed: false,
            grade_level: None,
            region: None,
            school_type: None,
            subjects: None,
            learning_goals: None,
            subscription: Some(UserSubscription::default_free(&now)),
            preferences: additional.preferences.or_else(|| Some(Preferences::default())),
        };

        self.db.set_profile(&profile).await?;
        tracing::info!(uid = %profile.uid, "User profile created");

        Ok(profile)
    }

    /// Read a profile by uid.
    pub async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        self.db.get_profile(uid).await
    }

    /// Merge-style partial update plus refreshed `updated_at`.
    pub async fn update_profile(&self, uid: &str, updates: ProfileUpdate) -> Result<(), AppError> {
        let mut profile = self
            .db
            .get_profile(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", uid)))?;

        if let Some(display_name) = updates.display_name {
            profile.display_name = display_name;
        }
        if let Some(first_name) = updates.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = updates.last_name {
            profile.last_name = Some(last_name);
        }
        if let Some(photo_url) = updates.photo_url {
            profile.photo_url = Some(photo_url);
        }
        if let Some(preferences) = updates.preferences {
            profile.preferences = Some(preferences);
        }
        profile.updated_at = chrono::Utc::now().to_rfc3339();

        self.db.set_profile(&profile).await
    }

    /// Replace the subscription sub-document.
    ///
    /// The stored subscription becomes exactly `subscription` plus a
    /// refreshed `updated_at`. Fields the caller leaves out (including
    /// `tier`) are dropped, not carried over.
    pub async fn update_subscription(
        &self,
        uid: &str,
        mut subscription: UserSubscription,
    ) -> Result<(), AppError> {
        let mut profile = self
            .db
            .get_profile(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", uid)))?;

        let now = chrono::Utc::now().to_rfc3339();
        subscription.updated_at = Some(now.clone());
        profile.subscription = Some(subscription);
        profile.updated_at = now;

        self.db.set_profile(&profile).await
    }

    /// Mark a subscription canceled at period end.
    ///
    /// Does not call the payment provider; the Stripe-side cancellation
    /// is still a stub.
    pub async fn cancel_subscription(
        &self,
        uid: &str,
        subscription_id: &str,
    ) -> Result<(), AppError> {
        tracing::info!(uid, subscription_id, "Canceling subscription (store only)");

        self.update_subscription(
            uid,
            UserSubscription {
                status: Some(SubscriptionStatus::Canceled),
                cancel_at_period_end: Some(true),
                stripe_subscription_id: Some(subscription_id.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Write school-context fields, flip `profile_completed`, and return
    /// the re-read profile.
    pub async fn complete_profile(
        &self,
        uid: &str,
        context: SchoolContext,
    ) -> Result<UserProfile, AppError> {
        let mut profile = self
            .db
            .get_profile(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", uid)))?;

        profile.grade_level = Some(context.grade_level);
        profile.region = Some(context.region);
        profile.school_type = Some(context.school_type);
        profile.subjects = Some(context.subjects);
        if let Some(goals) = context.learning_goals {
            profile.learning_goals = Some(goals);
        }
        if let Some(first_name) = context.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = context.last_name {
            profile.last_name = Some(last_name);
        }
        profile.profile_completed = true;
        profile.updated_at = chrono::Utc::now().to_rfc3339();

        self.db.set_profile(&profile).await?;
        tracing::info!(uid, "Profile completed");

        self.db
            .get_profile(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found after write", uid)))
    }
}
