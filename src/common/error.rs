use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading plugin infos and building the SCM type registry
#[derive(Error, Debug)]
pub enum PluggableScmError {
    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Plugin info provider failed: {message}")]
    ProviderError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Pluggable SCM '{id}' is not registered")]
    NotFound { id: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl PluggableScmError {
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
        }
    }

    pub fn provider_error(message: impl Into<String>) -> Self {
        Self::ProviderError {
            message: message.into(),
            source: None,
        }
    }

    pub fn provider_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ProviderError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
