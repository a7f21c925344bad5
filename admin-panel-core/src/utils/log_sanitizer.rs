//! Log sanitization utilities
//!
//! Panel content and templates can be arbitrarily large markup; log lines get a
//! bounded, single-line preview instead.

/// Maximum number of bytes of markup included in a log line.
const PREVIEW_LIMIT: usize = 200;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Single-line preview of markup for logging.
///
/// Line breaks are escaped; input longer than the limit is cut on a char boundary and
/// suffixed with its total length.
pub fn truncate_for_log(s: &str) -> String {
    let cut = floor_char_boundary(s, PREVIEW_LIMIT);
    let preview = s[..cut].replace('\r', "\\r").replace('\n', "\\n");
    if cut == s.len() {
        preview
    } else {
        format!("{preview}... [truncated, total {} bytes]", s.len())
    }
}
