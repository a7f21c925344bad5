//! Button action abstraction

use std::fmt;

use crate::types::{ButtonMeta, Html};

/// What an action contributes to the nav area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionContent {
    /// Clickable control markup
    pub markup: Html,
    /// Script wiring the click behavior, emitted inside the page-level script tag
    pub script: String,
}

impl ActionContent {
    #[must_use]
    pub fn new(markup: impl Into<Html>, script: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            script: script.into(),
        }
    }
}

/// Behavior attached to a nav button.
///
/// Implementations are pure value objects: calling [`Action::content`] twice yields the
/// same output. [`Action::footer_content`] is called once per button per page by the
/// assembler; the action itself does not guard against repeated calls.
pub trait Action: Send + Sync + fmt::Debug {
    /// Nav markup and click script for the given button
    fn content(&self, button: &ButtonMeta) -> ActionContent;

    /// One-time footer markup, e.g. a modal definition
    fn footer_content(&self, _button: &ButtonMeta) -> Html {
        Html::default()
    }
}
