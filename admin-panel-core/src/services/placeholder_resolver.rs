//! Row template resolution for action links
//!
//! Action urls and scripts may embed two placeholders:
//! - `{{.Id}}`  - identifier of the row the action is rendered for
//! - `{{.Ids}}` - client-side expression yielding the checked row ids
//!
//! Only field actions are supported: whitespace inside the braces is allowed,
//! `{{-` / `-}}` trim adjacent whitespace, and `{{/* ... */}}` is a comment.

use crate::error::TemplateError;
use crate::types::{Html, TemplateRowContext};
use crate::utils::log_sanitizer::truncate_for_log;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Template input: a plain string or trusted markup. Both parse identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource<'a> {
    Raw(&'a str),
    Markup(&'a Html),
}

impl TemplateSource<'_> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Raw(s) => s,
            Self::Markup(h) => h.as_str(),
        }
    }
}

impl<'a> From<&'a str> for TemplateSource<'a> {
    fn from(s: &'a str) -> Self {
        Self::Raw(s)
    }
}

impl<'a> From<&'a String> for TemplateSource<'a> {
    fn from(s: &'a String) -> Self {
        Self::Raw(s.as_str())
    }
}

impl<'a> From<&'a Html> for TemplateSource<'a> {
    fn from(h: &'a Html) -> Self {
        Self::Markup(h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Ids,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Field(Field),
}

/// A parsed row template, reusable across rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    nodes: Vec<Node>,
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn starts_with_trim_marker(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('-') && chars.next().is_some_and(is_space)
}

fn ends_with_trim_marker(s: &str) -> bool {
    let mut chars = s.chars().rev();
    chars.next() == Some('-') && chars.next().is_some_and(is_space)
}

impl RowTemplate {
    /// Parse a template.
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let mut nodes = Vec::new();
        let mut pos = 0;
        let mut trim_next_text = false;

        while let Some(rel) = src[pos..].find(OPEN) {
            let open = pos + rel;
            let mut body_start = open + OPEN.len();

            let trim_left = starts_with_trim_marker(&src[body_start..]);
            if trim_left {
                body_start += 2;
            }
            push_text(&mut nodes, &src[pos..open], trim_next_text, trim_left);

            let (field, end, trim_right) = if src[body_start..].starts_with("/*") {
                let (end, trim_right) = scan_comment(src, open, body_start)?;
                (None, end, trim_right)
            } else {
                let close = src[body_start..]
                    .find(CLOSE)
                    .map(|i| body_start + i)
                    .ok_or(TemplateError::UnclosedAction { offset: open })?;
                let mut inner = &src[body_start..close];
                let trim_right = ends_with_trim_marker(inner);
                if trim_right {
                    inner = &inner[..inner.len() - 2];
                }
                (Some(parse_action(inner, open)?), close + CLOSE.len(), trim_right)
            };

            if let Some(field) = field {
                nodes.push(Node::Field(field));
            }
            pos = end;
            trim_next_text = trim_right;
        }

        push_text(&mut nodes, &src[pos..], trim_next_text, false);
        Ok(Self { nodes })
    }

    /// Substitute row values. An absent id renders as empty text.
    #[must_use]
    pub fn execute(&self, ctx: &TemplateRowContext) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Field(Field::Id) => out.push_str(ctx.id.as_deref().unwrap_or_default()),
                Node::Field(Field::Ids) => out.push_str(ctx.ids),
            }
        }
        out
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str, trim_start: bool, trim_end: bool) {
    let mut text = text;
    if trim_start {
        text = text.trim_start_matches(is_space);
    }
    if trim_end {
        text = text.trim_end_matches(is_space);
    }
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// Returns the byte offset after the closing delimiter and whether it carried a trim marker.
fn scan_comment(src: &str, open: usize, body_start: usize) -> Result<(usize, bool), TemplateError> {
    let unclosed = TemplateError::UnclosedComment { offset: open };
    let comment_end = src[body_start + 2..]
        .find("*/")
        .map(|i| body_start + 2 + i + 2)
        .ok_or_else(|| unclosed.clone())?;
    let rest = &src[comment_end..];
    if rest.starts_with(CLOSE) {
        Ok((comment_end + CLOSE.len(), false))
    } else if rest.starts_with(is_space) && rest[1..].starts_with("-}}") {
        Ok((comment_end + 2 + CLOSE.len(), true))
    } else {
        Err(unclosed)
    }
}

fn parse_action(inner: &str, offset: usize) -> Result<Field, TemplateError> {
    let action = inner.trim_matches(is_space);
    if action.is_empty() {
        return Err(TemplateError::EmptyAction { offset });
    }
    let Some(name) = action.strip_prefix('.') else {
        return Err(TemplateError::UnsupportedAction {
            action: action.to_string(),
            offset,
        });
    };
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(TemplateError::UnsupportedAction {
            action: action.to_string(),
            offset,
        });
    }
    match name {
        "Id" => Ok(Field::Id),
        "Ids" => Ok(Field::Ids),
        _ => Err(TemplateError::UnknownField {
            field: name.to_string(),
            offset,
        }),
    }
}

/// Resolves row templates against a [`TemplateRowContext`].
///
/// # Fail-soft contract
///
/// [`PlaceholderResolver::resolve`] never fails: a template that cannot be parsed resolves
/// to an **empty string**, and the cause is logged at `warn`. Use
/// [`PlaceholderResolver::try_resolve`] to observe the error instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderResolver;

impl PlaceholderResolver {
    /// Resolve, surfacing parse errors.
    pub fn try_resolve<'a>(
        source: impl Into<TemplateSource<'a>>,
        ctx: &TemplateRowContext,
    ) -> Result<String, TemplateError> {
        let source = source.into();
        RowTemplate::parse(source.as_str()).map(|tmpl| tmpl.execute(ctx))
    }

    /// Resolve, degrading to `""` on error.
    #[must_use]
    pub fn resolve<'a>(source: impl Into<TemplateSource<'a>>, ctx: &TemplateRowContext) -> String {
        let source = source.into();
        match Self::try_resolve(source, ctx) {
            Ok(out) => out,
            Err(e) => {
                log::warn!(
                    "Row template resolved to empty output: {e}; template: {}",
                    truncate_for_log(source.as_str())
                );
                String::new()
            }
        }
    }
}

/// Resolve a bulk-action template: `{{.Ids}}` is available, `{{.Id}}` is empty.
#[must_use]
pub fn parse_table_data_tmpl<'a>(source: impl Into<TemplateSource<'a>>) -> String {
    PlaceholderResolver::resolve(source, &TemplateRowContext::bulk())
}

/// Resolve a per-row template: both `{{.Id}}` and `{{.Ids}}` are available.
#[must_use]
pub fn parse_table_data_tmpl_with_id(id: &str, source: &str) -> String {
    PlaceholderResolver::resolve(source, &TemplateRowContext::with_id(id))
}
