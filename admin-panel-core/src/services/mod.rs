//! Composition services

mod page_assembler;
mod panel_composer;
mod placeholder_resolver;

pub use page_assembler::PageAssembler;
pub use panel_composer::{
    auto_refresh_script, PanelContentComposer, RenderOptions, CONTAINER_CLASS, PJAX_CONTAINER_ID,
    SIDEBAR_COLLAPSE_SCRIPT,
};
pub use placeholder_resolver::{
    parse_table_data_tmpl, parse_table_data_tmpl_with_id, PlaceholderResolver, RowTemplate,
    TemplateSource,
};
