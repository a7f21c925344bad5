//! Row data exposed to action url templates

/// Client-side accessor evaluating to the comma-joined ids of the checked rows
pub const SELECTED_ROWS_EXPR: &str = "selectedRows().join()";

/// Values a row template may reference: `{{.Id}}` and `{{.Ids}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRowContext {
    /// Identifier of a single row; absent for bulk actions
    pub id: Option<String>,
    /// Browser-evaluated selection expression, never server data
    pub ids: &'static str,
}

impl TemplateRowContext {
    /// Context for bulk actions: only the selection expression is available.
    #[must_use]
    pub fn bulk() -> Self {
        Self {
            id: None,
            ids: SELECTED_ROWS_EXPR,
        }
    }

    /// Context for a per-row action; the selection expression stays available.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ids: SELECTED_ROWS_EXPR,
        }
    }
}

impl Default for TemplateRowContext {
    fn default() -> Self {
        Self::bulk()
    }
}
