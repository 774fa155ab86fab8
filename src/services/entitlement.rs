// SPDX-License-Identifier: MIT

//! Entitlement catalog and checks.
//!
//! The plan catalog is the single source of truth for entitlements: a
//! subscription grants a feature iff its tier's plan lists that exact
//! feature string. There is no hierarchy between tiers beyond catalog
//! membership.

use std::sync::LazyLock;

use crate::models::{BillingInterval, FeatureLimits, Plan, Tier, UserSubscription};

/// The fixed plan catalog, in UI display order.
static PLANS: LazyLock<Vec<Plan>> = LazyLock::new(|| {
    vec![
        Plan {
            id: Tier::Free,
            name: "Free".to_string(),
            price: 0,
            currency: "EUR".to_string(),
            interval: BillingInterval::Month,
            features: vec![
                "5 Tutoring Sessions pro Monat".to_string(),
                "Basis Support".to_string(),
                "Standard Lernmaterialien".to_string(),
                "Community Access".to_string(),
            ],
            is_popular: false,
            coming_soon: false,
            stripe_price_id: None,
        },
        Plan {
            id: Tier::Plus,
            name: "Plus".to_string(),
            price: 19,
            currency: "EUR".to_string(),
            interval: BillingInterval::Month,
            features: vec![
                "Unlimited Tutoring Sessions".to_string(),
                "24/7 Premium Support".to_string(),
                "Alle Lernmaterialien".to_string(),
                "Personalisierte Lernpläne".to_string(),
                "Video Aufzeichnungen".to_string(),
                "Live Gruppensessions".to_string(),
                "Mobile App Access".to_string(),
                "Fortschritts-Tracking".to_string(),
            ],
            is_popular: true,
            coming_soon: false,
            stripe_price_id: Some("price_plus_monthly".to_string()),
        },
        Plan {
            id: Tier::Pro,
            name: "Pro".to_string(),
            // Price not announced yet
            price: 0,
            currency: "EUR".to_string(),
            interval: BillingInterval::Month,
            features: vec![
                "Alles aus Plus".to_string(),
                "Dedicated Account Manager".to_string(),
                "Custom Lernpläne".to_string(),
                "White-label Optionen".to_string(),
                "API Access".to_string(),
                "Enterprise Support".to_string(),
                "Advanced Analytics".to_string(),
                "Priority Scheduling".to_string(),
            ],
            is_popular: false,
            coming_soon: true,
            stripe_price_id: Some("price_pro_monthly".to_string()),
        },
    ]
});

const FREE_LIMITS: FeatureLimits = FeatureLimits {
    sessions_per_month: 5,
    storage_gb: 1,
    support_level: "basic",
};

/// All available plans in display order.
pub fn list_plans() -> &'static [Plan] {
    &PLANS
}

/// Look up a plan by tier.
pub fn get_plan(tier: Tier) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == tier)
}

/// Look up a plan by raw tier string. Unknown strings yield `None`.
pub fn plan_by_id(id: &str) -> Option<&'static Plan> {
    Tier::parse(id).and_then(get_plan)
}

/// Whether a subscription grants access to the named feature.
///
/// False when there is no subscription, when the subscription's tier is
/// unknown, or when the tier's plan does not list the exact feature
/// string.
pub fn can_access_feature(subscription: Option<&UserSubscription>, feature: &str) -> bool {
    let Some(sub) = subscription else {
        return false;
    };
    let Some(plan) = sub.tier.as_deref().and_then(plan_by_id) else {
        return false;
    };
    plan.features.iter().any(|f| f == feature)
}

/// Usage limits for a tier string.
///
/// Any tier value outside the catalog falls back to the free limits
/// rather than failing. `sessions_per_month == -1` means unlimited.
pub fn feature_limits(tier: &str) -> FeatureLimits {
    match Tier::parse(tier) {
        Some(Tier::Free) | None => FREE_LIMITS,
        Some(Tier::Plus) => FeatureLimits {
            sessions_per_month: -1,
            storage_gb: 50,
            support_level: "premium",
        },
        Some(Tier::Pro) => FeatureLimits {
            sessions_per_month: -1,
            storage_gb: 500,
            support_level: "enterprise",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(tier: &str) -> UserSubscription {
        UserSubscription {
            tier: Some(tier.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_plan_ids_match_tiers() {
        for tier in Tier::ALL {
            let plan = get_plan(tier).expect("catalog covers every tier");
            assert_eq!(plan.id, tier);
        }
        assert_eq!(list_plans().len(), 3);
    }

    #[test]
    fn test_no_subscription_grants_nothing() {
        assert!(!can_access_feature(None, "Community Access"));
        assert!(!can_access_feature(None, ""));
    }

    #[test]
    fn test_feature_access_is_exact_membership() {
        let plus = subscription("plus");
        assert!(can_access_feature(Some(&plus), "Mobile App Access"));
        // Pro-only feature string is not granted to Plus, even though
        // Pro is conceptually a superset.
        assert!(!can_access_feature(Some(&plus), "API Access"));
        // No normalization
        assert!(!can_access_feature(Some(&plus), "mobile app access"));
    }

    #[test]
    fn test_unknown_tier_grants_nothing() {
        let bogus = subscription("enterprise");
        assert!(!can_access_feature(Some(&bogus), "Community Access"));
        let empty = UserSubscription::default();
        assert!(!can_access_feature(Some(&empty), "Community Access"));
    }

    #[test]
    fn test_limits_fall_back_to_free() {
        assert_eq!(feature_limits("enterprise"), FREE_LIMITS);
        assert_eq!(feature_limits(""), FREE_LIMITS);
        assert_eq!(feature_limits("free"), FREE_LIMITS);
    }

    #[test]
    fn test_paid_tiers_have_unlimited_sessions() {
        assert_eq!(feature_limits("plus").sessions_per_month, -1);
        assert_eq!(feature_limits("pro").sessions_per_month, -1);
        assert_eq!(feature_limits("plus").support_level, "premium");
        assert_eq!(feature_limits("pro").storage_gb, 500);
    }

    #[test]
    fn test_free_plan_has_no_price_reference() {
        assert!(get_plan(Tier::Free).unwrap().stripe_price_id.is_none());
        assert!(get_plan(Tier::Plus).unwrap().stripe_price_id.is_some());
    }
}
