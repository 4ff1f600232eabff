//! Error types for external dataset references.

use thiserror::Error;

use ndx_netcdf::NetcdfError;

/// Errors raised by [`ExternalXarrayDataset`](crate::ExternalXarrayDataset).
#[derive(Debug, Error)]
pub enum XarrayError {
    /// The path has already been set once and cannot change.
    #[error("Cannot reset path.")]
    PathAlreadySet,

    /// The accessor was called before a path was set.
    #[error("path is not set")]
    PathUnset,

    /// The external dataset could not be opened or read.
    #[error(transparent)]
    Netcdf(#[from] NetcdfError),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, XarrayError>;
