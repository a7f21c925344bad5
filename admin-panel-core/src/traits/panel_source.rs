//! Panel producer abstract Trait

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Panel;

/// What a panel source needs to know about the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelRequest {
    /// Request path without the admin prefix
    pub path: String,
    /// Query and route parameters
    pub params: BTreeMap<String, String>,
}

impl PanelRequest {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Panel Source Trait
///
/// Implemented by the data-access layer: builds the raw panel for a request.
#[async_trait]
pub trait PanelSource: Send + Sync {
    /// Produce the raw, uncomposed panel
    ///
    /// # Arguments
    /// * `request` - Current request
    async fn get_panel(&self, request: &PanelRequest) -> CoreResult<Panel>;
}

/// Adapts a synchronous function into a [`PanelSource`]
pub struct FnPanelSource<F> {
    f: F,
}

impl<F> FnPanelSource<F>
where
    F: Fn(&PanelRequest) -> CoreResult<Panel> + Send + Sync,
{
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnPanelSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPanelSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> PanelSource for FnPanelSource<F>
where
    F: Fn(&PanelRequest) -> CoreResult<Panel> + Send + Sync,
{
    async fn get_panel(&self, request: &PanelRequest) -> CoreResult<Panel> {
        (self.f)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[tokio::test]
    async fn fn_source_passes_request_through() {
        let source = FnPanelSource::new(|req: &PanelRequest| {
            Ok(Panel::new(
                req.param("table").unwrap_or("none").to_string(),
                "<p>rows</p>",
            ))
        });
        let panel = source
            .get_panel(&PanelRequest::new("/info/users").with_param("table", "users"))
            .await
            .unwrap();
        assert_eq!(panel.title, "users");
    }

    #[tokio::test]
    async fn fn_source_propagates_errors() {
        let source =
            FnPanelSource::new(|_: &PanelRequest| Err(CoreError::PanelSource("gone".to_string())));
        let result = source.get_panel(&PanelRequest::new("/info/users")).await;
        assert!(matches!(result, Err(CoreError::PanelSource(_))));
    }
}
