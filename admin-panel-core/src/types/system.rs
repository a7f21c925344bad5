//! Basic info of the running system

use serde::{Deserialize, Serialize};

/// Crate version reported on every page
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            version: VERSION.to_string(),
        }
    }
}
