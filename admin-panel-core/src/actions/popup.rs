//! Load a page fragment into a modal

use crate::services::PlaceholderResolver;
use crate::traits::{Action, ActionContent};
use crate::types::{ButtonMeta, Html, TemplateRowContext};

const DEFAULT_WIDTH: &str = "900px";

/// Opens a modal whose body is fetched from `url`.
///
/// The modal skeleton is the footer contribution, so it exists once per button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopUpAction {
    url: String,
    /// Modal heading, trusted markup
    title: Html,
    width: String,
}

impl PopUpAction {
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<Html>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            width: DEFAULT_WIDTH.to_string(),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    fn modal_id(button: &ButtonMeta) -> String {
        format!("{}-modal", button.id)
    }
}

impl Action for PopUpAction {
    fn content(&self, button: &ButtonMeta) -> ActionContent {
        let modal = Self::modal_id(button);
        let url = PlaceholderResolver::resolve(&self.url, &TemplateRowContext::bulk());
        ActionContent::new(
            button.nav_item(&format!(r##" data-toggle="modal" data-target="#{modal}""##)),
            format!(
                "$('{sel}').on('click', function (event) {{\n    $.get('{url}', function (data) {{\n        $('#{modal} .modal-body').html(data);\n    }});\n}});\n",
                sel = button.selector()
            ),
        )
    }

    fn footer_content(&self, button: &ButtonMeta) -> Html {
        Html::new(format!(
            r#"<div class="modal fade" id="{modal}" tabindex="-1" role="dialog"><div class="modal-dialog" role="document" style="width: {width};"><div class="modal-content"><div class="modal-header"><button type="button" class="close" data-dismiss="modal" aria-label="Close"><span aria-hidden="true">&times;</span></button><h4 class="modal-title">{title}</h4></div><div class="modal-body"></div></div></div></div>"#,
            modal = Self::modal_id(button),
            width = self.width,
            title = self.title,
        ))
    }
}
