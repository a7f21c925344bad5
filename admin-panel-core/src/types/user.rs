//! Login user as seen by the page chrome

use serde::{Deserialize, Serialize};

/// The login user.
///
/// Resolved by the authentication layer; the page only carries it to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl UserModel {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }
}
