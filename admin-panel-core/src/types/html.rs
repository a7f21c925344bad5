//! Trusted markup string

use std::fmt;

use serde::{Deserialize, Serialize};

/// Markup that is emitted into the page verbatim.
///
/// Everything stored here is treated as already-safe HTML (or inline script) by the
/// renderer; the core never escapes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push_str(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    pub fn push_html(&mut self, markup: &Self) {
        self.0.push_str(&markup.0);
    }

    /// Replace the whole markup, used by in-place transforms such as minification.
    pub fn replace(&mut self, markup: String) {
        self.0 = markup;
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Html {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Html {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for Html {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Html {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Self::default();
        for part in iter {
            out.push_html(&part);
        }
        out
    }
}
