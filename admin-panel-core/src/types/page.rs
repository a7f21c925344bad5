//! Page: the full composed unit handed to rendering

use serde::Serialize;

use crate::traits::Action;
use crate::types::{ActionButton, ButtonRegistry, Html, Menu, Panel, SystemInfo, UserModel};

/// Top-level template variable.
///
/// Built once per request by [`PageAssembler`](crate::services::PageAssembler). After
/// construction only [`Page::add_button`] mutates it, and only by appending.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The login user
    pub user: UserModel,
    /// Left side menu
    pub menu: Menu,
    /// Main content
    pub panel: Panel,
    pub system: SystemInfo,

    /// Prefix of url, empty when mounted at the root
    pub url_prefix: String,
    pub title: String,
    pub logo: Html,
    pub mini_logo: Html,
    pub color_scheme: String,
    /// Home page url of the site
    pub index_url: String,
    /// CDN link of assets
    pub cdn_url: String,

    /// Custom html in the head tag
    pub custom_head_html: Html,
    /// Custom html after body, followed by button footers and the button script tag
    pub custom_foot_html: Html,

    /// Components assets
    pub assets_list: Html,

    #[serde(skip)]
    pub(crate) nav_buttons: ButtonRegistry,
    /// Cached nav markup of the buttons present at assembly time
    pub nav_buttons_html: Html,
}

impl Page {
    /// Page carrying only a panel, used for pjax fragment responses.
    #[must_use]
    pub fn from_panel(panel: Panel, system: SystemInfo) -> Self {
        Self {
            panel,
            system,
            ..Self::default()
        }
    }

    /// Buttons attached to the page, in registration order
    #[must_use]
    pub fn nav_buttons(&self) -> &ButtonRegistry {
        &self.nav_buttons
    }

    /// Append a button after assembly.
    ///
    /// Only the button's footer markup is appended to `custom_foot_html`. Its nav markup
    /// and click script are **not** added to `nav_buttons_html` or the footer script tag;
    /// callers that need them must render the button themselves.
    pub fn add_button(
        &mut self,
        title: impl Into<Html>,
        icon: impl Into<String>,
        action: impl Action + 'static,
    ) -> &mut Self {
        self.push_button(ActionButton::nav_button(title, icon, action))
    }

    /// Same as [`Page::add_button`] for an already constructed button.
    pub fn push_button(&mut self, button: ActionButton) -> &mut Self {
        self.custom_foot_html.push_html(&button.footer_content());
        self.nav_buttons.append(button);
        self
    }
}
