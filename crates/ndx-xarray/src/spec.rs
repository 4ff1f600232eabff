//! Extension schema definition and export.

use std::path::Path;

use ndx_container::CachedSpec;
use ndx_schema::{AttributeSpec, GroupSpec, NamespaceBuilder, SchemaError};

use crate::dataset::{DATA_TYPE, NAMESPACE};

/// Namespace version of this extension.
pub const NAMESPACE_VERSION: &str = "0.1.1";

/// Base type the reference extends in the core namespace.
pub const BASE_DATA_TYPE: &str = "DataInterface";

const NAMESPACE_DOC: &str =
    "Extension to add support for storing and referencing external xarray files";
const GROUP_DOC: &str = "A container holding a reference to an xarray dataset stored in an \
     external netCDF .nc file (netCDF4 format).";
const DESCRIPTION_DOC: &str = "Description of the xarray dataset.";
const PATH_DOC: &str = "Relative file path to the xarray dataset.";

/// The declarative spec for this extension's namespace.
#[must_use]
pub fn extension_namespace() -> NamespaceBuilder {
    NamespaceBuilder::new(NAMESPACE, NAMESPACE_VERSION, NAMESPACE_DOC)
        .author("Ryan Ly")
        .contact("rly@lbl.gov")
        .include_namespace("core")
        .add_group(
            GroupSpec::new(DATA_TYPE, BASE_DATA_TYPE, GROUP_DOC)
                .with_attribute(AttributeSpec::text("description", DESCRIPTION_DOC))
                .with_attribute(AttributeSpec::text("path", PATH_DOC)),
        )
}

/// Write the namespace file pair into `dir`.
pub fn export_spec(dir: impl AsRef<Path>) -> Result<(), SchemaError> {
    extension_namespace().export(dir.as_ref())
}

/// Render the schema documents for caching inside written data files.
pub fn cached_spec() -> Result<CachedSpec, SchemaError> {
    let documents = extension_namespace().render()?;
    Ok(CachedSpec {
        namespace: NAMESPACE.to_string(),
        version: NAMESPACE_VERSION.to_string(),
        documents,
    })
}
