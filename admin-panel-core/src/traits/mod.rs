//! Composition seams: actions, minification and panel producers

mod action;
mod compressor;
mod panel_source;

pub use action::{Action, ActionContent};
pub use compressor::{Compressor, NoopCompressor};
pub use panel_source::{FnPanelSource, PanelRequest, PanelSource};
