//! Type definitions

mod button;
mod config;
mod html;
mod menu;
mod page;
mod panel;
mod row_context;
mod system;
mod user;

pub use button::{ActionButton, ButtonMeta, ButtonRegistry, RenderedButtons};
pub use config::{Animation, Config};
pub use html::Html;
pub use menu::{Menu, MenuItem};
pub use page::Page;
pub use panel::{Panel, DEFAULT_REFRESH_INTERVAL_SECS};
pub use row_context::{TemplateRowContext, SELECTED_ROWS_EXPR};
pub use system::{SystemInfo, VERSION};
pub use user::UserModel;
