//! Display configuration consumed by the composer and the assembler

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Html;

/// Page transition animation settings
///
/// An empty `kind` disables the animation wrapper entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Animation {
    /// animate.css class name, e.g. `fadeInUp`
    #[serde(rename = "type")]
    pub kind: String,
    /// Delay before the animation starts, in seconds
    pub delay: f64,
    /// Animation duration, in seconds
    pub duration: f64,
}

impl Animation {
    #[must_use]
    pub fn new(kind: impl Into<String>, delay: f64, duration: f64) -> Self {
        Self {
            kind: kind.into(),
            delay,
            duration,
        }
    }

    /// Whether an animation type is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.kind.is_empty()
    }
}

/// Resolved site configuration
///
/// Loaded and validated by the configuration layer; the core only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Title of the web page
    pub title: String,
    /// Logo markup shown in the expanded sidebar
    pub logo: Html,
    /// Logo markup shown in the collapsed sidebar
    pub mini_logo: Html,
    /// Theme color scheme, e.g. `skin-black`
    pub color_scheme: String,
    /// Raw url prefix, e.g. `admin` or `/admin/`
    pub url_prefix: String,
    /// Raw index url relative to the prefix
    pub index_url: String,
    /// CDN link of assets
    pub asset_url: String,
    /// Custom html in the head tag
    pub custom_head_html: Html,
    /// Custom html after body
    pub custom_foot_html: Html,
    /// Panel transition animation
    pub animation: Animation,
}

impl Config {
    /// Normalized prefix: always starts with `/`, never ends with one unless it is the root.
    #[must_use]
    pub fn prefix(&self) -> String {
        let trimmed = self.url_prefix.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Prefix suitable for concatenation: empty when the site is mounted at the root.
    #[must_use]
    pub fn assert_prefix(&self) -> String {
        let prefix = self.prefix();
        if prefix == "/" {
            String::new()
        } else {
            prefix
        }
    }

    /// Index path relative to the prefix, always with a leading `/`.
    #[must_use]
    pub fn index(&self) -> String {
        if self.index_url.is_empty() {
            "/".to_string()
        } else if self.index_url.starts_with('/') {
            self.index_url.clone()
        } else {
            format!("/{}", self.index_url)
        }
    }

    /// Absolute home page url of the admin site.
    #[must_use]
    pub fn index_url(&self) -> String {
        let index = self.index();
        if index == "/" {
            self.prefix()
        } else {
            self.assert_prefix() + &index
        }
    }

    /// Join a path onto the prefix.
    #[must_use]
    pub fn url(&self, suffix: &str) -> String {
        if suffix.is_empty() || suffix == "/" {
            return self.prefix();
        }
        if suffix.starts_with('/') {
            self.assert_prefix() + suffix
        } else {
            format!("{}/{suffix}", self.assert_prefix())
        }
    }

    /// Reject values the composer cannot render.
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "title cannot be empty".to_string(),
            ));
        }
        for (name, value) in [
            ("animation.delay", self.animation.delay),
            ("animation.duration", self.animation.duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{name} must be a non-negative number of seconds, got {value}"
                )));
            }
        }
        if self.animation.kind.chars().any(char::is_whitespace) {
            return Err(CoreError::ValidationError(format!(
                "animation.type must be a single class name, got '{}'",
                self.animation.kind
            )));
        }
        Ok(())
    }
}
