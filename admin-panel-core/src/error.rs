//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Row template parse/execution error
///
/// Produced by [`PlaceholderResolver::try_resolve`](crate::services::PlaceholderResolver::try_resolve).
/// The fail-soft entry points never return it; they log it and emit an empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details", rename_all = "camelCase")]
pub enum TemplateError {
    /// `{{` without a matching `}}`
    #[error("unclosed action starting at byte {offset}")]
    UnclosedAction { offset: usize },

    /// `{{/*` without a matching `*/}}`
    #[error("unclosed comment starting at byte {offset}")]
    UnclosedComment { offset: usize },

    /// `{{}}` or `{{- -}}`
    #[error("missing value for action at byte {offset}")]
    EmptyAction { offset: usize },

    /// `{{.Foo}}` where `Foo` is not a row field
    #[error("can't evaluate field {field} at byte {offset}")]
    UnknownField { field: String, offset: usize },

    /// Anything that is not a field reference (`{{if}}`, `{{range .}}`, ...)
    #[error("unsupported action {action:?} at byte {offset}")]
    UnsupportedAction { action: String, offset: usize },
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Row template error
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Panel source could not produce a panel
    #[error("Panel source error: {0}")]
    PanelSource(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, broken template) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Template(_) | Self::ValidationError(_) => true,
            Self::SerializationError(_) | Self::PanelSource(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_are_expected() {
        let err: CoreError = TemplateError::UnclosedAction { offset: 3 }.into();
        assert!(err.is_expected());
        assert_eq!(
            err.to_string(),
            "Template error: unclosed action starting at byte 3"
        );
    }

    #[test]
    fn panel_source_errors_are_not_expected() {
        assert!(!CoreError::PanelSource("db down".to_string()).is_expected());
    }

    #[test]
    fn error_serializes_with_code_tag() {
        let err = CoreError::ValidationError("title is empty".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ValidationError");
        assert_eq!(json["details"], "title is empty");
    }
}
