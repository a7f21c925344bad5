//! Input file schemas
//!
//! JSON shapes accepted by `--inputs`. Nav buttons are described declaratively and
//! turned into actions when the page is rendered.

use serde::Deserialize;

use admin_panel_app::PageInputs;
use admin_panel_core::actions::{AjaxAction, JumpAction, PopUpAction};
use admin_panel_core::traits::Action;
use admin_panel_core::types::{ActionButton, ButtonRegistry, Html, Menu, UserModel};

/// Contents of the `--inputs` file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInputsFile {
    pub user: UserModel,
    pub menu: Menu,
    pub assets_list: Html,
    pub buttons: Vec<ButtonSpec>,
}

impl PageInputsFile {
    /// Resolve into the inputs `AppState` renders with; buttons keep file order.
    pub fn into_inputs(self) -> PageInputs {
        PageInputs {
            user: self.user,
            menu: self.menu,
            assets_list: self.assets_list,
            buttons: self
                .buttons
                .into_iter()
                .map(ButtonSpec::into_button)
                .collect::<ButtonRegistry>(),
        }
    }
}

/// One nav button.
///
/// `id` is optional; a fresh one is generated when it is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub action: ActionSpec,
}

/// Action bound to a nav button.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionSpec {
    /// Navigate through pjax, or open a new tab.
    #[serde(rename_all = "camelCase")]
    Jump {
        url: String,
        #[serde(default)]
        new_tab: bool,
    },

    /// Send the selected rows to a url.
    Ajax {
        url: String,
        #[serde(default)]
        method: Option<String>,
        #[serde(default)]
        confirm: Option<String>,
    },

    /// Load a url into a modal.
    #[serde(rename = "popup")]
    PopUp {
        url: String,
        title: String,
        #[serde(default)]
        width: Option<String>,
    },
}

impl ButtonSpec {
    pub fn into_button(self) -> ActionButton {
        let Self {
            id,
            title,
            icon,
            action,
        } = self;
        match action {
            ActionSpec::Jump { url, new_tab } => {
                let action = JumpAction::new(url);
                let action = if new_tab { action.in_new_tab() } else { action };
                button(id, title, icon, action)
            }
            ActionSpec::Ajax {
                url,
                method,
                confirm,
            } => {
                let mut action = AjaxAction::new(url);
                if let Some(method) = method {
                    action = action.with_method(method);
                }
                if let Some(confirm) = confirm {
                    action = action.with_confirm(confirm);
                }
                button(id, title, icon, action)
            }
            ActionSpec::PopUp {
                url,
                title: modal_title,
                width,
            } => {
                let mut action = PopUpAction::new(url, modal_title);
                if let Some(width) = width {
                    action = action.with_width(width);
                }
                button(id, title, icon, action)
            }
        }
    }
}

fn button(
    id: Option<String>,
    title: String,
    icon: String,
    action: impl Action + 'static,
) -> ActionButton {
    match id {
        Some(id) => ActionButton::with_id(id, title, icon, action),
        None => ActionButton::nav_button(title, icon, action),
    }
}

#[cfg(test)]
#[path = "schemas_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;
