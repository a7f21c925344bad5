//! Nav buttons and their ordered registry

use std::sync::Arc;

use crate::traits::{Action, ActionContent};
use crate::types::Html;

/// Identity and display surface of a nav button, handed to its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMeta {
    /// DOM id, fixed at construction
    pub id: String,
    /// Display title (markup)
    pub title: Html,
    /// Font Awesome icon class, e.g. `fa-trash`
    pub icon: String,
}

impl ButtonMeta {
    /// CSS selector of the button element
    #[must_use]
    pub fn selector(&self) -> String {
        format!("#{}", self.id)
    }

    /// Standard nav list item; `attrs` is appended verbatim to the anchor tag.
    #[must_use]
    pub fn nav_item(&self, attrs: &str) -> Html {
        Html::new(format!(
            r#"<li><a id="{id}" class="nav-action-btn" href="javascript:;"{attrs}><i class="fa {icon}"></i> <span class="hidden-xs">{title}</span></a></li>"#,
            id = self.id,
            icon = self.icon,
            title = self.title,
        ))
    }
}

/// A nav button together with its action.
///
/// Exclusively owned by the registry or page that holds it.
#[derive(Debug, Clone)]
pub struct ActionButton {
    meta: ButtonMeta,
    action: Arc<dyn Action>,
}

impl ActionButton {
    /// Create a nav button with a fresh DOM id.
    #[must_use]
    pub fn nav_button(
        title: impl Into<Html>,
        icon: impl Into<String>,
        action: impl Action + 'static,
    ) -> Self {
        let id = format!("nav-btn-{}", uuid::Uuid::new_v4().simple());
        Self::with_id(id, title, icon, action)
    }

    /// Create a nav button with a caller-chosen DOM id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<Html>,
        icon: impl Into<String>,
        action: impl Action + 'static,
    ) -> Self {
        Self {
            meta: ButtonMeta {
                id: id.into(),
                title: title.into(),
                icon: icon.into(),
            },
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub fn meta(&self) -> &ButtonMeta {
        &self.meta
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    #[must_use]
    pub fn action(&self) -> &dyn Action {
        self.action.as_ref()
    }

    /// Nav markup and click script
    #[must_use]
    pub fn content(&self) -> ActionContent {
        self.action.content(&self.meta)
    }

    /// One-time footer markup
    #[must_use]
    pub fn footer_content(&self) -> Html {
        self.action.footer_content(&self.meta)
    }
}

/// Aggregated contributions of every button in a registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedButtons {
    pub nav_html: Html,
    pub nav_script: String,
    pub footer_html: Html,
}

/// Ordered, append-only collection of nav buttons.
#[derive(Debug, Clone, Default)]
pub struct ButtonRegistry {
    buttons: Vec<ActionButton>,
}

impl ButtonRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, button: ActionButton) {
        self.buttons.push(button);
    }

    #[must_use]
    pub fn with(mut self, button: ActionButton) -> Self {
        self.append(button);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionButton> {
        self.buttons.iter()
    }

    /// Nav markup of all buttons, in registration order
    #[must_use]
    pub fn nav_markup(&self) -> Html {
        self.buttons.iter().map(|b| b.content().markup).collect()
    }

    /// Click scripts of all buttons, in registration order
    #[must_use]
    pub fn nav_script(&self) -> String {
        self.buttons.iter().map(|b| b.content().script).collect()
    }

    /// Footer markup of all buttons, in registration order, never deduplicated
    #[must_use]
    pub fn footer_markup(&self) -> Html {
        self.buttons.iter().map(ActionButton::footer_content).collect()
    }

    /// Single pass over the registry: each action's footer is produced exactly once.
    #[must_use]
    pub fn render(&self) -> RenderedButtons {
        let mut rendered = RenderedButtons::default();
        for button in &self.buttons {
            rendered.footer_html.push_html(&button.footer_content());
            let content = button.content();
            rendered.nav_html.push_html(&content.markup);
            rendered.nav_script.push_str(&content.script);
        }
        rendered
    }
}

impl FromIterator<ActionButton> for ButtonRegistry {
    fn from_iter<I: IntoIterator<Item = ActionButton>>(iter: I) -> Self {
        Self {
            buttons: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ButtonRegistry {
    type Item = &'a ActionButton;
    type IntoIter = std::slice::Iter<'a, ActionButton>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StaticAction;

    fn registry() -> ButtonRegistry {
        ButtonRegistry::new()
            .with(ActionButton::with_id(
                "a",
                "First",
                "fa-plus",
                StaticAction::new("<a1>", "js1;", "<f1>"),
            ))
            .with(ActionButton::with_id(
                "b",
                "Second",
                "fa-trash",
                StaticAction::new("<a2>", "js2;", "<f2>"),
            ))
    }

    #[test]
    fn folds_keep_registration_order() {
        let reg = registry();
        assert_eq!(reg.nav_markup(), "<a1><a2>");
        assert_eq!(reg.nav_script(), "js1;js2;");
        assert_eq!(reg.footer_markup(), "<f1><f2>");
    }

    #[test]
    fn render_matches_individual_folds() {
        let reg = registry();
        let rendered = reg.render();
        assert_eq!(rendered.nav_html, reg.nav_markup());
        assert_eq!(rendered.nav_script, reg.nav_script());
        assert_eq!(rendered.footer_html, reg.footer_markup());
    }

    #[test]
    fn footer_is_not_deduplicated() {
        let reg: ButtonRegistry = (0..3)
            .map(|i| {
                ActionButton::with_id(
                    format!("btn-{i}"),
                    "Same",
                    "fa-plus",
                    StaticAction::new("", "", "<modal>"),
                )
            })
            .collect();
        assert_eq!(reg.footer_markup(), "<modal><modal><modal>");
    }

    #[test]
    fn content_is_idempotent() {
        let button = ActionButton::nav_button("Go", "fa-link", StaticAction::new("<a>", "x;", ""));
        assert_eq!(button.content(), button.content());
        assert!(button.id().starts_with("nav-btn-"));
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = ActionButton::nav_button("Go", "fa-link", StaticAction::default());
        let b = ActionButton::nav_button("Go", "fa-link", StaticAction::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn nav_item_renders_icon_and_title() {
        let meta = ButtonMeta {
            id: "nav-btn-1".to_string(),
            title: Html::from("<b>New</b>"),
            icon: "fa-plus".to_string(),
        };
        let item = meta.nav_item(r#" data-url="/x""#);
        assert_eq!(
            item,
            r#"<li><a id="nav-btn-1" class="nav-action-btn" href="javascript:;" data-url="/x"><i class="fa fa-plus"></i> <span class="hidden-xs"><b>New</b></span></a></li>"#
        );
        assert_eq!(meta.selector(), "#nav-btn-1");
    }
}
