//! Extension for referencing external xarray datasets from a data file.
//!
//! An [`ExternalXarrayDataset`] holds a description and a relative file path
//! to a gridded dataset stored outside the data file, in a netCDF `.nc`
//! file. The path is write once and validated advisorily (a non-`.nc`
//! suffix warns but is stored); the referenced file is only opened on
//! demand through [`ExternalXarrayDataset::as_xarray`].
//!
//! The extension ships its schema as a namespace file pair (see
//! [`extension_namespace`] and the `spec/` directory) and registers its
//! record type with the host [`TypeRegistry`](ndx_container::TypeRegistry)
//! via [`register`], so reading a data file yields concrete
//! `ExternalXarrayDataset` values.
//!
//! # Example
//!
//! ```no_run
//! use ndx_xarray::ExternalXarrayDataset;
//!
//! let reference = ExternalXarrayDataset::new("weather", "gridded weather", "weather.nc");
//! let dataset = reference.as_xarray().unwrap();
//! println!("variables: {:?}", dataset.variable_names().unwrap());
//! dataset.close();
//! ```

mod dataset;
mod error;
mod find;
mod register;
mod spec;

pub use dataset::{DATA_TYPE, ExternalXarrayDataset, NAMESPACE};
pub use error::{Result, XarrayError};
pub use find::{FoundDataset, find_external_xarray_datasets};
pub use register::{default_registry, register};
pub use spec::{
    BASE_DATA_TYPE, NAMESPACE_VERSION, cached_spec, export_spec, extension_namespace,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
