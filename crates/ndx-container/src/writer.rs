//! HDF5 writer for the container hierarchy.

use std::path::Path;
use std::str::FromStr;

use hdf5::Group;
use hdf5::types::VarLenUnicode;
use tracing::debug;

use crate::container::{Container, DATA_TYPE_ATTR, NAMESPACE_ATTR, OBJECT_ID_ATTR};
use crate::error::{ContainerError, Result};
use crate::file::DataFile;

/// Root group holding cached schema documents.
pub(crate) const SPEC_GROUP: &str = "specifications";

pub(crate) const IDENTIFIER_ATTR: &str = "identifier";
pub(crate) const SESSION_DESCRIPTION_ATTR: &str = "session_description";
pub(crate) const SESSION_START_TIME_ATTR: &str = "session_start_time";
pub(crate) const MODULE_DESCRIPTION_ATTR: &str = "description";

/// A schema document pair cached inside a written file, so readers can
/// resolve the namespace without the extension installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSpec {
    pub namespace: String,
    pub version: String,
    /// `(document name, document content)` pairs.
    pub documents: Vec<(String, String)>,
}

/// Options for writing data files.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Schema documents cached under `/specifications`.
    pub cached_specs: Vec<CachedSpec>,
}

impl WriteOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a schema document pair in the written file.
    #[must_use]
    pub fn cache_spec(mut self, spec: CachedSpec) -> Self {
        self.cached_specs.push(spec);
        self
    }
}

/// Write a data file to `path` with default options.
pub fn write_data_file(path: impl AsRef<Path>, data: &DataFile) -> Result<()> {
    write_data_file_with_options(path, data, &WriteOptions::default())
}

/// Write a data file to `path`.
///
/// Layout: root string attributes for session identity; one group per
/// collection (`/scratch`, `/analysis`, `/processing/<module>`); one group
/// per container carrying the reserved `namespace`/`data_type`/`object_id`
/// attributes plus the container's text attributes.
pub fn write_data_file_with_options(
    path: impl AsRef<Path>,
    data: &DataFile,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = hdf5::File::create(path)?;

    write_str_attr(&file, IDENTIFIER_ATTR, data.identifier())?;
    write_str_attr(&file, SESSION_DESCRIPTION_ATTR, data.session_description())?;
    write_str_attr(
        &file,
        SESSION_START_TIME_ATTR,
        &data.session_start_time().to_rfc3339(),
    )?;

    let scratch = file.create_group("scratch")?;
    let analysis = file.create_group("analysis")?;
    let processing = file.create_group("processing")?;

    for container in data.scratch() {
        write_container(&scratch, container)?;
    }
    for container in data.analysis() {
        write_container(&analysis, container)?;
    }
    for module in data.processing_modules() {
        let group = processing.create_group(module.name())?;
        write_str_attr(&group, MODULE_DESCRIPTION_ATTR, module.description())?;
        for container in module.containers() {
            write_container(&group, container)?;
        }
    }

    if !options.cached_specs.is_empty() {
        let specs = file.create_group(SPEC_GROUP)?;
        for spec in &options.cached_specs {
            let version_group = specs
                .create_group(&spec.namespace)?
                .create_group(&spec.version)?;
            for (name, content) in &spec.documents {
                let value = to_var_len_unicode(name, content)?;
                version_group
                    .new_dataset::<VarLenUnicode>()
                    .create(name.as_str())?
                    .write_scalar(&value)?;
            }
        }
    }

    Ok(())
}

fn write_container(parent: &Group, container: &dyn Container) -> Result<()> {
    debug!(
        name = container.name(),
        data_type = container.data_type(),
        "writing container"
    );
    let group = parent.create_group(container.name())?;
    write_str_attr(&group, NAMESPACE_ATTR, container.namespace())?;
    write_str_attr(&group, DATA_TYPE_ATTR, container.data_type())?;
    write_str_attr(&group, OBJECT_ID_ATTR, container.object_id())?;
    for (name, value) in container.text_attributes() {
        write_str_attr(&group, &name, &value)?;
    }
    Ok(())
}

/// Write a string scalar attribute. Files coerce to groups through deref,
/// so one helper covers both.
fn write_str_attr(group: &Group, name: &str, value: &str) -> Result<()> {
    let value = to_var_len_unicode(name, value)?;
    group
        .new_attr::<VarLenUnicode>()
        .create(name)?
        .write_scalar(&value)?;
    Ok(())
}

fn to_var_len_unicode(name: &str, value: &str) -> Result<VarLenUnicode> {
    VarLenUnicode::from_str(value).map_err(|error| ContainerError::InvalidString {
        name: name.to_string(),
        message: error.to_string(),
    })
}

