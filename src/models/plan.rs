// SPDX-License-Identifier: MIT

//! Subscription plan catalog types.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Subscription tier. Closed set; everything outside it falls back to
/// the free tier for limit lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Tier {
    Free,
    Plus,
    Pro,
}

impl Tier {
    /// All tiers in catalog display order.
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Plus, Tier::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Plus => "plus",
            Tier::Pro => "pro",
        }
    }

    /// Parse a tier string from the wire. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Tier> {
        match s {
            "free" => Some(Tier::Free),
            "plus" => Some(Tier::Plus),
            "pro" => Some(Tier::Pro),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing interval for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum BillingInterval {
    Month,
    Year,
}

/// A subscription plan in the catalog. Defined at process start, never
/// mutated.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Plan {
    pub id: Tier,
    pub name: String,
    /// Price in whole currency units (0 for free and unannounced plans)
    pub price: u32,
    pub currency: String,
    pub interval: BillingInterval,
    /// Feature strings, display order. Authoritative for entitlement checks.
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_popular: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub coming_soon: bool,
    /// External price reference; absent means the plan cannot be checked out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
}

/// Per-tier usage limits. `sessions_per_month == -1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FeatureLimits {
    pub sessions_per_month: i32,
    pub storage_gb: u32,
    pub support_level: &'static str,
}
