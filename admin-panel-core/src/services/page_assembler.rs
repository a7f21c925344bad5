//! Page assembly
//!
//! Combines an already composed panel with the menu, the user, display metadata from
//! the config and the page's nav buttons.

use crate::types::{ButtonRegistry, Config, Html, Menu, Page, Panel, SystemInfo, UserModel};

/// Builds [`Page`] values from resolved request inputs.
#[derive(Debug, Clone, Default)]
pub struct PageAssembler {
    system: SystemInfo,
}

impl PageAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a different system version on every page
    #[must_use]
    pub fn with_system(system: SystemInfo) -> Self {
        Self { system }
    }

    #[must_use]
    pub fn system(&self) -> &SystemInfo {
        &self.system
    }

    /// Assemble a full page.
    ///
    /// Footer markup is `custom_foot_html`, then each button's footer contribution in
    /// registration order, then one `<script>` tag holding every button's click script.
    #[must_use]
    pub fn assemble(
        &self,
        user: UserModel,
        menu: Menu,
        panel: Panel,
        config: &Config,
        assets_list: Html,
        buttons: ButtonRegistry,
    ) -> Page {
        let rendered = buttons.render();

        let mut footer = config.custom_foot_html.clone();
        footer.push_html(&rendered.footer_html);
        footer.push_str("<script>");
        footer.push_str(&rendered.nav_script);
        footer.push_str("</script>");

        log::debug!(
            "Assembled page '{}' for user {} with {} nav button(s)",
            config.title,
            user.id,
            buttons.len()
        );

        Page {
            user,
            menu,
            panel,
            system: self.system.clone(),
            url_prefix: config.assert_prefix(),
            title: config.title.clone(),
            logo: config.logo.clone(),
            mini_logo: config.mini_logo.clone(),
            color_scheme: config.color_scheme.clone(),
            index_url: config.index_url(),
            cdn_url: config.asset_url.clone(),
            custom_head_html: config.custom_head_html.clone(),
            custom_foot_html: footer,
            assets_list,
            nav_buttons: buttons,
            nav_buttons_html: rendered.nav_html,
        }
    }

    /// Page carrying only the panel, for pjax fragment responses.
    #[must_use]
    pub fn assemble_panel(&self, panel: Panel) -> Page {
        Page::from_panel(panel, self.system.clone())
    }
}
