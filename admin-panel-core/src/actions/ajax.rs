//! Fire a request against the selected rows

use super::escape_js;
use crate::services::{PlaceholderResolver, PJAX_CONTAINER_ID};
use crate::traits::{Action, ActionContent};
use crate::types::{ButtonMeta, TemplateRowContext, SELECTED_ROWS_EXPR};

/// Sends the checked row ids to `url` and reloads the panel on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AjaxAction {
    url: String,
    method: String,
    confirm: Option<String>,
}

impl AjaxAction {
    /// `POST` to `url` without confirmation
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "post".to_string(),
            confirm: None,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_lowercase();
        self
    }

    /// Ask the user before sending
    #[must_use]
    pub fn with_confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm = Some(message.into());
        self
    }
}

impl Action for AjaxAction {
    fn content(&self, button: &ButtonMeta) -> ActionContent {
        let url = PlaceholderResolver::resolve(&self.url, &TemplateRowContext::bulk());
        let guard = self
            .confirm
            .as_deref()
            .map(|msg| format!("    if (!confirm('{}')) {{ return; }}\n", escape_js(msg)))
            .unwrap_or_default();
        let script = format!(
            "$('{sel}').on('click', function (event) {{\n{guard}    $.ajax({{\n        method: '{method}',\n        url: '{url}',\n        data: {{ids: {SELECTED_ROWS_EXPR}}},\n        success: function (data) {{\n            $.pjax.reload('#{PJAX_CONTAINER_ID}');\n        }}\n    }});\n}});\n",
            sel = button.selector(),
            method = escape_js(&self.method),
        );
        ActionContent::new(button.nav_item(""), script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::meta;

    #[test]
    fn posts_selected_ids_and_reloads() {
        let content = AjaxAction::new("/admin/delete/users").content(&meta("del"));
        assert!(content.script.starts_with("$('#del').on('click'"));
        assert!(content.script.contains("method: 'post',"));
        assert!(content.script.contains("url: '/admin/delete/users',"));
        assert!(content.script.contains("data: {ids: selectedRows().join()},"));
        assert!(content.script.contains("$.pjax.reload('#pjax-container');"));
        assert!(!content.script.contains("confirm("));
    }

    #[test]
    fn confirm_message_is_escaped() {
        let content = AjaxAction::new("/x")
            .with_method("DELETE")
            .with_confirm("Delete 'em all?")
            .content(&meta("del"));
        assert!(content
            .script
            .contains("if (!confirm('Delete \\'em all?')) { return; }"));
        assert!(content.script.contains("method: 'delete',"));
    }

    #[test]
    fn url_template_sees_selection() {
        let content =
            AjaxAction::new("/admin/rows/'+{{.Ids}}+'/archive").content(&meta("a"));
        assert!(content
            .script
            .contains("url: '/admin/rows/'+selectedRows().join()+'/archive',"));
    }

    #[test]
    fn method_is_escaped() {
        let content = AjaxAction::new("/x")
            .with_method("post'); alert('x")
            .content(&meta("m"));
        assert!(content.script.contains(r"method: 'post\'); alert(\'x',"));
    }
}
