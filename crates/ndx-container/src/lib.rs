//! Host container layer: typed records, named sub-collections, a type
//! registry, and HDF5 persistence.
//!
//! A [`DataFile`] holds named containers in its "scratch" and "analysis"
//! collections and in named processing modules. Containers implement
//! [`Container`]; on disk each becomes an HDF5 group whose string attributes
//! carry the record state. Reading goes through a [`TypeRegistry`] so that
//! extensions decide which concrete type backs a `(namespace, data type)`
//! pair; unknown types fall back to [`GenericContainer`] without losing
//! attributes.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use ndx_container::{DataFile, GenericContainer, RecordData, TypeRegistry, new_object_id,
//!     read_data_file, write_data_file};
//!
//! let mut data = DataFile::new("identifier", "session_description", Utc::now());
//! let record = RecordData::new("thing", new_object_id()).with_attribute("description", "desc");
//! data.add_scratch(GenericContainer::new("ndx-thing", "Thing", record)).unwrap();
//! write_data_file("session.h5", &data).unwrap();
//!
//! let read_back = read_data_file("session.h5", &TypeRegistry::new()).unwrap();
//! assert!(read_back.get_scratch("thing").is_some());
//! ```

mod container;
mod error;
mod file;
mod reader;
mod registry;
mod writer;

pub use container::{
    Container, DATA_TYPE_ATTR, GenericContainer, NAMESPACE_ATTR, OBJECT_ID_ATTR, RecordData,
    new_object_id,
};
pub use error::{ContainerError, Result};
pub use file::{DataFile, ProcessingModule};
pub use reader::{read_cached_specs, read_data_file};
pub use registry::{ContainerFactory, TypeRegistry};
pub use writer::{CachedSpec, WriteOptions, write_data_file, write_data_file_with_options};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
