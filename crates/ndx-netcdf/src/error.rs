//! Error types for dataset file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing dataset files.
#[derive(Debug, Error)]
pub enum NetcdfError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying HDF5 failure (unreadable or corrupt file included).
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Variable data length does not match its shape.
    #[error("variable {name}: shape {shape:?} does not match {len} data values")]
    ShapeMismatch {
        name: String,
        shape: Vec<usize>,
        len: usize,
    },

    /// Dimension name count does not match shape rank.
    #[error("variable {name}: {dims} dimension names for shape of rank {rank}")]
    RankMismatch {
        name: String,
        dims: usize,
        rank: usize,
    },

    /// A dimension name is used with two different sizes.
    #[error("dimension {name} has conflicting sizes {existing} and {requested}")]
    DimensionSizeConflict {
        name: String,
        existing: usize,
        requested: usize,
    },

    /// Duplicate variable name.
    #[error("duplicate variable: {name}")]
    DuplicateVariable { name: String },

    /// No variable with the given name.
    #[error("no such variable: {name}")]
    MissingVariable { name: String },

    /// A string value could not be stored as an HDF5 string.
    #[error("invalid string value for {name}: {message}")]
    InvalidString { name: String, message: String },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, NetcdfError>;
