//! Panel: the main content region of an admin screen

use serde::{Deserialize, Serialize};

use crate::types::Html;

/// Refresh interval used when auto refresh is on but no interval is given, in seconds
pub const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 60;

/// Main content of the template, swapped in place on pjax navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Panel {
    pub title: String,
    pub description: String,
    pub content: Html,
    pub url: String,

    /// Whether to collapse the sidebar
    pub mini_sidebar: bool,

    /// Auto refresh page switch
    pub auto_refresh: bool,
    /// Refresh intervals in seconds; only the first one is used
    pub refresh_interval: Vec<u32>,
}

impl Panel {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<Html>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_mini_sidebar(mut self, mini_sidebar: bool) -> Self {
        self.mini_sidebar = mini_sidebar;
        self
    }

    /// Turn auto refresh on with the given candidate intervals.
    #[must_use]
    pub fn with_auto_refresh(mut self, intervals: Vec<u32>) -> Self {
        self.auto_refresh = true;
        self.refresh_interval = intervals;
        self
    }

    /// Effective refresh interval in seconds.
    #[must_use]
    pub fn refresh_interval_secs(&self) -> u32 {
        self.refresh_interval
            .first()
            .copied()
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_interval_defaults_to_sixty_seconds() {
        let panel = Panel::new("Users", "<p>hi</p>").with_auto_refresh(vec![]);
        assert_eq!(panel.refresh_interval_secs(), 60);
    }

    #[test]
    fn first_refresh_interval_wins() {
        let panel = Panel::new("Users", "<p>hi</p>").with_auto_refresh(vec![5, 30]);
        assert_eq!(panel.refresh_interval_secs(), 5);
    }

    #[test]
    fn deserializes_from_camel_case() {
        let panel: Panel = serde_json::from_str(
            r#"{"title":"Users","content":"<p>hi</p>","miniSidebar":true,"refreshInterval":[10]}"#,
        )
        .unwrap();
        assert!(panel.mini_sidebar);
        assert!(!panel.auto_refresh);
        assert_eq!(panel.refresh_interval, vec![10]);
        assert_eq!(panel.content, "<p>hi</p>");
    }
}
