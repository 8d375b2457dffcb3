use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tokio::fs as async_fs;

use crate::common::error::PluggableScmError;
use crate::domain::entities::plugin_info::PluginInfo;
use crate::infrastructure::plugin_infos::provider::InMemoryPluginInfos;

/// Plugin info store related errors
#[derive(Debug, Error)]
pub enum PluginInfoStoreError {
    #[error("Plugin info file not found at path: {0}")]
    PluginInfoFileNotFound(String),

    #[error("Plugin info file read failed: {0}")]
    ReadFailed(String),

    #[error("Plugin info file write failed: {0}")]
    WriteFailed(String),

    #[error("YAML parsing failed: {0}")]
    YamlParsingFailed(String),

    #[error("JSON parsing failed: {0}")]
    JsonParsingFailed(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

impl From<PluginInfoStoreError> for PluggableScmError {
    fn from(error: PluginInfoStoreError) -> Self {
        match error {
            PluginInfoStoreError::PluginInfoFileNotFound(path) => PluggableScmError::filesystem_error(
                format!("Plugin info file not found: {}", path),
                Some(path.into()),
            ),
            other => PluggableScmError::provider_error_with_source("Failed to load plugin infos", other),
        }
    }
}

/// On-disk shape of a plugin info document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginInfoDocument {
    /// Plugin infos in document order
    #[serde(default)]
    pub plugins: Vec<PluginInfo>,
}

/// Document format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` is read as JSON; everything else as YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Loads and stores plugin info documents
#[derive(Debug, Default)]
pub struct PluginInfoStore;

impl PluginInfoStore {
    pub fn new() -> Self {
        Self
    }

    /// Read a plugin info document and wrap it as an in-memory provider
    pub async fn read_plugin_infos<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<InMemoryPluginInfos, PluginInfoStoreError> {
        let path = path.as_ref();

        let content = async_fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                PluginInfoStoreError::PluginInfoFileNotFound(path.display().to_string())
            }
            _ => PluginInfoStoreError::ReadFailed(format!("{}: {}", path.display(), e)),
        })?;

        let document = Self::parse(&content, DocumentFormat::from_path(path))?;
        tracing::debug!(
            "Loaded {} plugin infos from {}",
            document.plugins.len(),
            path.display()
        );

        Ok(InMemoryPluginInfos::from(document.plugins))
    }

    /// Write plugin infos to disk in the format implied by the path
    pub async fn write_plugin_infos<P: AsRef<Path>>(
        &self,
        path: P,
        plugin_infos: &InMemoryPluginInfos,
    ) -> Result<(), PluginInfoStoreError> {
        let path = path.as_ref();
        let document = PluginInfoDocument {
            plugins: plugin_infos.all().to_vec(),
        };

        let content = match DocumentFormat::from_path(path) {
            DocumentFormat::Json => serde_json::to_string_pretty(&document)
                .map_err(|e| PluginInfoStoreError::SerializationFailed(e.to_string()))?,
            DocumentFormat::Yaml => serde_yaml::to_string(&document)
                .map_err(|e| PluginInfoStoreError::SerializationFailed(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PluginInfoStoreError::WriteFailed(e.to_string()))?;
            }
        }

        async_fs::write(path, content)
            .await
            .map_err(|e| PluginInfoStoreError::WriteFailed(e.to_string()))
    }

    /// Parse a plugin info document from a string
    pub fn parse(
        content: &str,
        format: DocumentFormat,
    ) -> Result<PluginInfoDocument, PluginInfoStoreError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content)
                .map_err(|e| PluginInfoStoreError::JsonParsingFailed(e.to_string())),
            DocumentFormat::Yaml => {
                // An empty YAML file is an empty document
                if content.trim().is_empty() {
                    return Ok(PluginInfoDocument::default());
                }
                serde_yaml::from_str(content)
                    .map_err(|e| PluginInfoStoreError::YamlParsingFailed(e.to_string()))
            }
        }
    }
}
