//! Admin Panel Core Library
//!
//! Turns resolved request inputs into renderable admin pages:
//! - Panel content composition (pjax container, animation, sidebar and refresh scripts, minification)
//! - Page assembly (menu, user, display metadata, nav buttons)
//! - Row templates for bulk and per-row action links
//!
//! Every operation here is a pure, request-scoped transformation. Configuration,
//! authentication, persistence and HTTP live in the calling layers.

pub mod actions;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, TemplateError};
pub use services::{PageAssembler, PanelContentComposer, PlaceholderResolver, RenderOptions};
pub use traits::{Action, ActionContent, Compressor, PanelSource};
pub use types::{ActionButton, ButtonRegistry, Config, Html, Page, Panel};
