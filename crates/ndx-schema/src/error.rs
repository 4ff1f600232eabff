//! Error types for schema building, export, and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building, exporting, or loading schema files.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// File I/O failure.
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML schema file.
    #[error("failed to parse YAML schema file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON schema file.
    #[error("failed to parse JSON schema file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to render a schema document in memory.
    #[error("failed to render schema document {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Structural validation failure.
    #[error("invalid schema: {message}")]
    InvalidSpec { message: String },

    /// A `source` entry points at a file that does not exist.
    #[error("missing schema source file: {path}")]
    MissingSource { path: PathBuf },

    /// Unrecognized schema file extension.
    #[error("unsupported schema file format: {path} (expected .yaml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, SchemaError>;
