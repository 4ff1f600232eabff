//! Minimal reader and writer for netCDF4-flavored HDF5 dataset files.
//!
//! Gridded datasets are stored in an HDF5 container: one dataset per
//! variable, dimension names as a string attribute on each variable, and
//! coordinate variables listed in a root attribute. This covers what an
//! external dataset reference needs — writing a gridded dataset to disk and
//! opening it again on demand — not general netCDF compatibility.
//!
//! # Example
//!
//! ```no_run
//! use ndx_netcdf::{NcDataset, NcFile, NcVariable, write_netcdf};
//!
//! let mut dataset = NcDataset::new();
//! dataset
//!     .add_variable(NcVariable::new("temperature", &["x", "y"], &[2, 2], vec![1.0; 4]).unwrap())
//!     .unwrap();
//! write_netcdf("weather.nc", &dataset).unwrap();
//!
//! let file = NcFile::open("weather.nc").unwrap();
//! let temperature = file.read_variable("temperature").unwrap();
//! assert_eq!(temperature.shape, vec![2, 2]);
//! file.close();
//! ```

mod error;
mod reader;
mod types;
mod writer;

pub use error::{NetcdfError, Result};
pub use reader::NcFile;
pub use types::{NcDataset, NcVariable};
pub use writer::write_netcdf;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
