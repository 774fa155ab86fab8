// SPDX-License-Identifier: MIT

//! Directory user model (the sample-user listing API).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A user record in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DirectoryUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}
