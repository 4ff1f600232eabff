//! Declarative extension-schema model for container-format namespaces.
//!
//! An extension contributes record types to a data file format by shipping a
//! schema file pair: a namespace manifest and a type-definitions file. This
//! crate models both documents, builds and exports them, and loads them back
//! with structural validation.
//!
//! # Example
//!
//! ```
//! use ndx_schema::{AttributeSpec, GroupSpec, NamespaceBuilder};
//!
//! let builder = NamespaceBuilder::new("ndx-thing", "0.1.0", "An example extension")
//!     .include_namespace("core")
//!     .add_group(
//!         GroupSpec::new("Thing", "DataInterface", "A thing record")
//!             .with_attribute(AttributeSpec::text("description", "Description of the thing.")),
//!     );
//! let documents = builder.render().unwrap();
//! assert_eq!(documents[0].0, "ndx-thing.namespace.yaml");
//! ```

mod builder;
mod error;
mod loader;
mod types;
mod validate;

pub use builder::NamespaceBuilder;
pub use error::{Result, SchemaError};
pub use loader::{LoadedNamespace, load_namespace_file, load_namespaces, load_type_defs_file};
pub use types::{
    AttributeSpec, Dtype, GroupSpec, Namespace, NamespaceFile, SchemaSource, TypeDefsFile,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
