//! Navigate to another admin page

use crate::services::{PlaceholderResolver, PJAX_CONTAINER_ID};
use crate::traits::{Action, ActionContent};
use crate::types::{ButtonMeta, TemplateRowContext};

/// Jumps to `url`, through pjax or in a new browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpAction {
    url: String,
    new_tab: bool,
}

impl JumpAction {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            new_tab: false,
        }
    }

    #[must_use]
    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

impl Action for JumpAction {
    fn content(&self, button: &ButtonMeta) -> ActionContent {
        let url = PlaceholderResolver::resolve(&self.url, &TemplateRowContext::bulk());
        let navigate = if self.new_tab {
            format!("window.open('{url}', '_blank');")
        } else {
            format!("$.pjax({{url: '{url}', container: '#{PJAX_CONTAINER_ID}'}});")
        };
        ActionContent::new(
            button.nav_item(""),
            format!(
                "$('{sel}').on('click', function (event) {{\n    {navigate}\n}});\n",
                sel = button.selector()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::meta;

    #[test]
    fn navigates_through_pjax() {
        let content = JumpAction::new("/admin/info/users/new").content(&meta("nav-btn-1"));
        assert_eq!(
            content.script,
            "$('#nav-btn-1').on('click', function (event) {\n    $.pjax({url: '/admin/info/users/new', container: '#pjax-container'});\n});\n"
        );
        assert!(content.markup.as_str().contains("id=\"nav-btn-1\""));
    }

    #[test]
    fn opens_new_tab_with_selection() {
        let content = JumpAction::new("/admin/export?ids='+{{.Ids}}+'")
            .in_new_tab()
            .content(&meta("x"));
        assert!(content
            .script
            .contains("window.open('/admin/export?ids='+selectedRows().join()+'', '_blank');"));
    }

    #[test]
    fn broken_url_template_degrades_to_empty_url() {
        let content = JumpAction::new("/admin/{{.Id").content(&meta("x"));
        assert!(content.script.contains("url: ''"));
    }

    #[test]
    fn has_no_footer() {
        assert!(JumpAction::new("/x").footer_content(&meta("x")).is_empty());
    }
}
