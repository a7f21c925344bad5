//! Lightweight HTML whitespace minification

use crate::traits::Compressor;
use crate::types::Html;

/// Collapses insignificant whitespace in composed panel markup.
///
/// - runs of whitespace in text collapse to one space
/// - whitespace between two tags collapses to one space, and is dropped when either
///   tag is block-level or at the start/end of the content
/// - whitespace inside tags collapses, quoted attribute values are kept as is
/// - `<` only opens a tag when followed by a letter, `/` or `!`
/// - `<script>` / `<style>` bodies keep their line structure, only blank lines and
///   indentation are removed; bodies holding a template literal are copied verbatim
/// - `<pre>` / `<textarea>` bodies are copied verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCompressor;

impl Compressor for WhitespaceCompressor {
    fn compress(&self, content: &mut Html) {
        let minified = minify_html(content.as_str());
        log::debug!(
            "Minified panel content: {} -> {} bytes",
            content.len(),
            minified.len()
        );
        content.replace(minified);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawText {
    /// Body kept line by line
    Code(&'static str),
    /// Body kept byte for byte
    Verbatim(&'static str),
}

/// Elements around which whitespace never renders
const BLOCK_ELEMENTS: &[&str] = &[
    "!", "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "fieldset", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "head",
    "header", "hr", "html", "li", "link", "main", "meta", "nav", "ol", "p", "pre", "script",
    "section", "style", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "title",
    "tr", "ul",
];

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Whether `rest` (starting at a `<`) opens a tag rather than being a literal less-than.
fn opens_tag(rest: &str) -> bool {
    rest.strip_prefix('<')
        .and_then(|r| r.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Lowercased element name of a tag starting at `<`; `!` for comments and doctypes.
fn tag_name(tag: &str) -> String {
    let inner = tag.trim_start_matches('<');
    if inner.starts_with('!') {
        return "!".to_string();
    }
    let inner = inner.trim_start_matches('/');
    let end = inner
        .find(|c: char| is_space(c) || c == '>' || c == '/')
        .unwrap_or(inner.len());
    inner[..end].to_ascii_lowercase()
}

fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag_name(tag).as_str())
}

/// Element name of an opening tag such as `<script type="x">`.
fn raw_text_element(tag: &str) -> Option<RawText> {
    let inner = tag.strip_prefix('<')?;
    if inner.starts_with('/') || tag.ends_with("/>") {
        return None;
    }
    match tag_name(tag).as_str() {
        "script" => Some(RawText::Code("script")),
        "style" => Some(RawText::Code("style")),
        "pre" => Some(RawText::Verbatim("pre")),
        "textarea" => Some(RawText::Verbatim("textarea")),
        _ => None,
    }
}

/// Byte offset of `</name` in `hay`, ASCII case-insensitive.
fn find_closing(hay: &str, name: &str) -> Option<usize> {
    hay.to_ascii_lowercase().find(&format!("</{name}"))
}

fn compact_code(body: &str) -> String {
    if body.contains('`') {
        return body.to_string();
    }
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minify markup; see [`WhitespaceCompressor`] for the rules.
#[must_use]
pub fn minify_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    let mut in_quote: Option<char> = None;
    let mut pending_space = false;
    let mut tag_start = 0;
    // `out.len()` right after the last tag closed; text written since moves `out` past it
    let mut tag_end = None;
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        let at = pos;
        pos += ch.len_utf8();

        if in_tag {
            if let Some(q) = in_quote {
                out.push(ch);
                if ch == q {
                    in_quote = None;
                }
                continue;
            }
            match ch {
                '"' | '\'' => {
                    in_quote = Some(ch);
                    out.push(ch);
                }
                '>' => {
                    while out.ends_with(' ') {
                        out.pop();
                    }
                    out.push('>');
                    in_tag = false;

                    if let Some(raw) = raw_text_element(&out[tag_start..]) {
                        let name = match raw {
                            RawText::Code(name) | RawText::Verbatim(name) => name,
                        };
                        let end = find_closing(&input[pos..], name).map_or(input.len(), |i| pos + i);
                        let body = &input[pos..end];
                        match raw {
                            RawText::Code(_) => out.push_str(&compact_code(body)),
                            RawText::Verbatim(_) => out.push_str(body),
                        }
                        pos = end;
                    }
                    tag_end = Some(out.len());
                }
                c if is_space(c) => {
                    if !out.ends_with(' ') && !out.ends_with('<') {
                        out.push(' ');
                    }
                }
                _ => out.push(ch),
            }
            continue;
        }

        if is_space(ch) {
            pending_space = true;
            continue;
        }

        let starts_tag = ch == '<' && opens_tag(&input[at..]);

        if pending_space {
            let after_tag = tag_end == Some(out.len());
            let drop = out.is_empty()
                || (after_tag && is_block(&out[tag_start..]))
                || (starts_tag && is_block(&input[at..]));
            if !drop {
                out.push(' ');
            }
            pending_space = false;
        }

        if starts_tag {
            tag_start = out.len();
            in_tag = true;
        }
        out.push(ch);
    }

    out
}
