//! Test helpers
//!
//! Fixed-output actions and a fully populated config.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::{Action, ActionContent};
use crate::types::{Animation, ButtonMeta, Config, Html};

// ===== StaticAction =====

/// Returns the same nav markup, script and footer for any button.
#[derive(Debug, Clone, Default)]
pub struct StaticAction {
    nav: Html,
    script: String,
    footer: Html,
}

impl StaticAction {
    pub fn new(nav: &str, script: &str, footer: &str) -> Self {
        Self {
            nav: Html::from(nav),
            script: script.to_string(),
            footer: Html::from(footer),
        }
    }
}

impl Action for StaticAction {
    fn content(&self, _button: &ButtonMeta) -> ActionContent {
        ActionContent::new(self.nav.clone(), self.script.clone())
    }

    fn footer_content(&self, _button: &ButtonMeta) -> Html {
        self.footer.clone()
    }
}

// ===== CountingAction =====

/// Counts footer requests.
#[derive(Debug, Default)]
pub struct CountingAction {
    footer_calls: Arc<AtomicUsize>,
}

impl CountingAction {
    pub fn footer_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.footer_calls)
    }
}

impl Action for CountingAction {
    fn content(&self, button: &ButtonMeta) -> ActionContent {
        ActionContent::new(button.nav_item(""), String::new())
    }

    fn footer_content(&self, button: &ButtonMeta) -> Html {
        self.footer_calls.fetch_add(1, Ordering::SeqCst);
        Html::new(format!("<div id=\"{}-footer\"></div>", button.id))
    }
}

// ===== Fixtures =====

pub fn test_config() -> Config {
    Config {
        title: "Admin".to_string(),
        logo: Html::from("<b>Panel</b>Admin"),
        mini_logo: Html::from("<b>P</b>A"),
        color_scheme: "skin-black".to_string(),
        url_prefix: "admin".to_string(),
        index_url: "dashboard".to_string(),
        asset_url: "https://cdn.example.com".to_string(),
        custom_head_html: Html::from("<meta name=\"robots\" content=\"noindex\">"),
        custom_foot_html: Html::from("<!-- foot -->"),
        animation: Animation::new("fadeInUp", 0.0, 0.0),
    }
}

pub fn meta(id: &str) -> ButtonMeta {
    ButtonMeta {
        id: id.to_string(),
        title: Html::from("Title"),
        icon: "fa-circle".to_string(),
    }
}
