//! Error types for container and persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building, writing, or reading containers.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying HDF5 failure.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// A collection already holds a container with this name.
    #[error("duplicate name in {collection}: {name}")]
    DuplicateName { collection: String, name: String },

    /// Container and module names become HDF5 link names and must be
    /// non-empty and slash free.
    #[error("invalid container name: {name:?}")]
    InvalidName { name: String },

    /// A persisted container group lacks a required attribute.
    #[error("container {container} is missing required attribute {name}")]
    MissingAttribute { container: String, name: String },

    /// The stored session timestamp could not be parsed.
    #[error("invalid session_start_time {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },

    /// A registered factory rejected the record it was handed.
    #[error("failed to build {data_type} record: {message}")]
    Factory { data_type: String, message: String },

    /// A string value could not be stored as an HDF5 string.
    #[error("invalid string value for {name}: {message}")]
    InvalidString { name: String, message: String },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ContainerError>;
