// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod event;
pub mod plan;
pub mod profile;
pub mod school;
pub mod user;

pub use event::{InvoiceObject, StripeEvent, StripeEventKind, SubscriptionObject};
pub use plan::{BillingInterval, FeatureLimits, Plan, Tier};
pub use profile::{Preferences, SubscriptionStatus, UserProfile, UserSubscription};
pub use user::DirectoryUser;
