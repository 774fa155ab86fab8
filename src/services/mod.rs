// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod billing;
pub mod directory;
pub mod entitlement;
pub mod profile;

pub use billing::{CheckoutSession, PortalSession};
pub use directory::{FirestoreDirectory, InMemoryDirectory, UserDirectory};
pub use profile::{ProfileService, ProfileUpdate, SchoolContext};
