//! External xarray dataset reference.

use std::any::Any;
use std::path::Path;

use ndx_container::{Container, new_object_id};
use ndx_netcdf::NcFile;
use tracing::warn;

use crate::error::{Result, XarrayError};

/// Namespace this extension's types are registered under.
pub const NAMESPACE: &str = "ndx-xarray";
/// Record type name of the external reference.
pub const DATA_TYPE: &str = "ExternalXarrayDataset";

/// A reference to an xarray dataset stored in an external netCDF `.nc` file.
///
/// The reference holds a description and a relative file path; the
/// referenced file is not opened or checked for existence when the
/// reference is created. [`as_xarray`](Self::as_xarray) opens it on demand.
///
/// The path is write once: it can be set at construction or later through
/// [`set_path`](Self::set_path), but never changed afterwards.
#[derive(Debug, Clone)]
pub struct ExternalXarrayDataset {
    name: String,
    object_id: String,
    description: String,
    path: Option<String>,
}

impl ExternalXarrayDataset {
    /// Create a reference with its path set.
    ///
    /// `path` accepts a string or a structured path value and is stored as
    /// its string form. A path whose extension is not `.nc` is stored as
    /// given, with a warning.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Self {
        let mut dataset = Self::without_path(name, description);
        // A fresh reference has no path yet, so the write-once guard
        // cannot trip here.
        dataset.store_path(path.as_ref());
        dataset
    }

    /// Create a reference whose path will be set later, exactly once.
    pub fn without_path(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_id: new_object_id(),
            description: description.into(),
            path: None,
        }
    }

    /// Name of this reference within its parent collection.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable object id.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub(crate) fn restore_object_id(&mut self, object_id: impl Into<String>) {
        self.object_id = object_id.into();
    }

    /// Description of the referenced dataset.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Relative file path of the referenced dataset, if set.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Set the path of this reference.
    ///
    /// Fails with [`XarrayError::PathAlreadySet`] if a path is already
    /// stored, leaving the stored value unchanged. Warns if the file suffix
    /// is not `.nc`; the value is stored either way.
    pub fn set_path(&mut self, value: impl AsRef<Path>) -> Result<()> {
        if self.path.is_some() {
            return Err(XarrayError::PathAlreadySet);
        }
        self.store_path(value.as_ref());
        Ok(())
    }

    fn store_path(&mut self, value: &Path) {
        let text = value.to_string_lossy().into_owned();
        if value.extension().and_then(|ext| ext.to_str()) != Some("nc") {
            warn!("ExternalXarrayDataset path should have extension .nc: {text}");
        }
        self.path = Some(text);
    }

    /// Open the referenced dataset and return a handle onto it.
    ///
    /// The path is resolved relative to the process working directory. Each
    /// call opens the file anew; nothing is cached on the reference. The
    /// returned handle should be closed (or dropped) after use.
    pub fn as_xarray(&self) -> Result<NcFile> {
        let path = self.path.as_deref().ok_or(XarrayError::PathUnset)?;
        Ok(NcFile::open(path)?)
    }
}

impl Container for ExternalXarrayDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn object_id(&self) -> &str {
        &self.object_id
    }

    fn namespace(&self) -> &str {
        NAMESPACE
    }

    fn data_type(&self) -> &str {
        DATA_TYPE
    }

    fn text_attributes(&self) -> Vec<(String, String)> {
        let mut attributes = vec![("description".to_string(), self.description.clone())];
        if let Some(path) = &self.path {
            attributes.push(("path".to_string(), path.clone()));
        }
        attributes
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
