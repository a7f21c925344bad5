//! File-backed panel source
//!
//! Reads the raw panel as JSON from disk. The request path is the file path.

use std::path::PathBuf;

use async_trait::async_trait;

use admin_panel_core::error::{CoreError, CoreResult};
use admin_panel_core::traits::{PanelRequest, PanelSource};
use admin_panel_core::types::Panel;

/// Loads panels from JSON files
#[derive(Debug, Default)]
pub struct JsonFilePanelSource;

impl JsonFilePanelSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PanelSource for JsonFilePanelSource {
    async fn get_panel(&self, request: &PanelRequest) -> CoreResult<Panel> {
        let path = PathBuf::from(&request.path);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            CoreError::PanelSource(format!("failed to read {}: {e}", path.display()))
        })?;
        let panel: Panel = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded panel '{}' from {}", panel.title, path.display());
        Ok(panel)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_panel(dir: &tempfile::TempDir, name: &str, contents: &str) -> PanelRequest {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        PanelRequest::new(path.to_string_lossy())
    }

    #[tokio::test]
    async fn loads_panel_json() {
        let tmp = tempfile::tempdir().unwrap();
        let request = write_panel(
            &tmp,
            "panel.json",
            r#"{"title":"Users","content":"<p>hi</p>","miniSidebar":true}"#,
        );
        let panel = JsonFilePanelSource::new().get_panel(&request).await.unwrap();

        assert_eq!(panel.title, "Users");
        assert_eq!(panel.content, "<p>hi</p>");
        assert!(panel.mini_sidebar);
        assert!(!panel.auto_refresh);
    }

    #[tokio::test]
    async fn missing_file_is_a_panel_source_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("panel.json");
        let err = JsonFilePanelSource::new()
            .get_panel(&PanelRequest::new(path.to_string_lossy()))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::PanelSource(msg) if msg.contains("panel.json")));
    }

    #[tokio::test]
    async fn malformed_json_is_a_serialization_error() {
        let tmp = tempfile::tempdir().unwrap();
        let request = write_panel(&tmp, "broken.json", "{\"title\":");
        let err = JsonFilePanelSource::new()
            .get_panel(&request)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }
}
