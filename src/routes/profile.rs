// SPDX-License-Identifier: MIT

//! Authenticated profile routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{school, UserProfile};
use crate::services::entitlement;
use crate::services::profile::{Identity, ProfileUpdate, SchoolContext};
use crate::AppState;
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Profile routes (require authentication via session JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me).patch(update_me))
        .route("/api/me/complete", post(complete_me))
        .route("/api/me/subscription/cancel", post(cancel_subscription))
}

// ─── Profile ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Usage limits for the profile's current tier.
    pub limits: crate::models::FeatureLimits,
}

fn with_limits(profile: UserProfile) -> ProfileResponse {
    let tier = profile
        .subscription
        .as_ref()
        .and_then(|s| s.tier.clone())
        .unwrap_or_default();
    ProfileResponse {
        limits: entitlement::feature_limits(&tier),
        profile,
    }
}

/// Get the caller's profile, creating it on first sign-in if absent.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let identity = Identity {
        uid: user.uid,
        email: user.email,
        display_name: user.display_name,
        photo_url: user.photo_url,
    };

    // Idempotent: returns the stored profile unchanged when it exists.
    let profile = state
        .profiles
        .create_profile(&identity, ProfileUpdate::default())
        .await?;

    Ok(Json(with_limits(profile)))
}

/// Apply a partial profile update and return the refreshed profile.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(updates): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>> {
    state.profiles.update_profile(&user.uid, updates).await?;

    let profile = state
        .profiles
        .get_profile(&user.uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", user.uid)))?;

    Ok(Json(with_limits(profile)))
}

// ─── Profile Completion ──────────────────────────────────────

fn validate_school_context(context: &SchoolContext) -> Result<()> {
    if !school::is_valid_grade_level(&context.grade_level) {
        return Err(AppError::BadRequest(format!(
            "Unknown grade level '{}'",
            context.grade_level
        )));
    }
    if !school::is_valid_region(&context.region) {
        return Err(AppError::BadRequest(format!(
            "Unknown region '{}'",
            context.region
        )));
    }
    if !school::is_valid_school_type(&context.school_type) {
        return Err(AppError::BadRequest(format!(
            "Unknown school type '{}'",
            context.school_type
        )));
    }
    if context.subjects.is_empty() {
        return Err(AppError::BadRequest("At least one subject required".to_string()));
    }
    if let Some(subject) = context.subjects.iter().find(|s| !school::is_valid_subject(s)) {
        return Err(AppError::BadRequest(format!("Unknown subject '{}'", subject)));
    }
    Ok(())
}

/// Complete the caller's profile with school context.
async fn complete_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(context): Json<SchoolContext>,
) -> Result<Json<ProfileResponse>> {
    validate_school_context(&context)?;

    let profile = state.profiles.complete_profile(&user.uid, context).await?;
    Ok(Json(with_limits(profile)))
}

// ─── Subscription ────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelRequest {
    subscription_id: Option<String>,
}

#[derive(Serialize)]
pub struct CancelResponse {
    pub success: bool,
}

/// Cancel the caller's subscription at period end (store only; the
/// provider-side cancellation is still a stub).
async fn cancel_subscription(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CancelRequest>,
) -> Result<Json<CancelResponse>> {
    let subscription_id = body
        .subscription_id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing field 'subscriptionId'".to_string()))?;

    state
        .profiles
        .cancel_subscription(&user.uid, &subscription_id)
        .await?;

    Ok(Json(CancelResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SchoolContext {
        SchoolContext {
            grade_level: "10".to_string(),
            region: "Bayern".to_string(),
            school_type: "Gymnasium".to_string(),
            subjects: vec!["Mathematik".to_string(), "Physik".to_string()],
            learning_goals: None,
            first_name: None,
            last_name: None,
        }
    }

    #[test]
    fn test_valid_school_context_passes() {
        validate_school_context(&context()).unwrap();
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let mut c = context();
        c.region = "Atlantis".to_string();
        assert!(validate_school_context(&c).is_err());

        let mut c = context();
        c.subjects = vec!["Alchemie".to_string()];
        assert!(validate_school_context(&c).is_err());

        let mut c = context();
        c.subjects.clear();
        assert!(validate_school_context(&c).is_err());
    }
}
