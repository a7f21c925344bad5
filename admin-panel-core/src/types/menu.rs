//! Left side navigation menu

use serde::{Deserialize, Serialize};

/// One entry of the navigation tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

/// Left side menu of the template.
///
/// Permission filtering happens before the menu reaches the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    /// Url of the currently active entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

impl Menu {
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            active: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
