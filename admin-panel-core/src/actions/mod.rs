//! Stock nav button actions
//!
//! Every action url is a row template: `{{.Ids}}` expands to the client-side
//! selection expression, so a url such as `/export?ids='+{{.Ids}}+'` is evaluated in
//! the browser when the button is clicked.

mod ajax;
mod jump;
mod popup;

pub use ajax::AjaxAction;
pub use jump::JumpAction;
pub use popup::PopUpAction;

/// Escape text for a single-quoted JS string literal.
fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}
