//! HDF5 reader for the container hierarchy.

use std::path::Path;

use chrono::{DateTime, Utc};
use hdf5::Group;
use hdf5::types::VarLenUnicode;
use tracing::debug;

use crate::container::{Container, DATA_TYPE_ATTR, NAMESPACE_ATTR, OBJECT_ID_ATTR, RecordData};
use crate::error::{ContainerError, Result};
use crate::file::DataFile;
use crate::registry::TypeRegistry;
use crate::writer::{
    CachedSpec, IDENTIFIER_ATTR, MODULE_DESCRIPTION_ATTR, SESSION_DESCRIPTION_ATTR,
    SESSION_START_TIME_ATTR, SPEC_GROUP,
};

/// Read a data file, instantiating containers through `registry`.
///
/// Records of types without a registered factory are preserved as
/// [`GenericContainer`](crate::GenericContainer) instances.
pub fn read_data_file(path: impl AsRef<Path>, registry: &TypeRegistry) -> Result<DataFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ContainerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = hdf5::File::open(path)?;

    let identifier = read_required_attr(&file, "root", IDENTIFIER_ATTR)?;
    let session_description = read_required_attr(&file, "root", SESSION_DESCRIPTION_ATTR)?;
    let raw_time = read_required_attr(&file, "root", SESSION_START_TIME_ATTR)?;
    let session_start_time = parse_session_start_time(&raw_time)?;

    let mut data = DataFile::new(identifier, session_description, session_start_time);

    if file.link_exists("scratch") {
        let scratch = file.group("scratch")?;
        for name in sorted_members(&scratch)? {
            let container = read_container(&scratch, &name, registry)?;
            data.add_scratch_boxed(container)?;
        }
    }
    if file.link_exists("analysis") {
        let analysis = file.group("analysis")?;
        for name in sorted_members(&analysis)? {
            let container = read_container(&analysis, &name, registry)?;
            data.add_analysis_boxed(container)?;
        }
    }
    if file.link_exists("processing") {
        let processing = file.group("processing")?;
        for module_name in sorted_members(&processing)? {
            let module_group = processing.group(&module_name)?;
            let description = read_required_attr(&module_group, &module_name, MODULE_DESCRIPTION_ATTR)?;
            let module = data.create_processing_module(module_name.clone(), description)?;
            for name in sorted_members(&module_group)? {
                let container = read_container(&module_group, &name, registry)?;
                module.add_boxed(container)?;
            }
        }
    }

    Ok(data)
}

/// Read the schema documents cached in a written file.
pub fn read_cached_specs(path: impl AsRef<Path>) -> Result<Vec<CachedSpec>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ContainerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = hdf5::File::open(path)?;
    if !file.link_exists(SPEC_GROUP) {
        return Ok(Vec::new());
    }

    let specs_group = file.group(SPEC_GROUP)?;
    let mut specs = Vec::new();
    for namespace in sorted_members(&specs_group)? {
        let namespace_group = specs_group.group(&namespace)?;
        for version in sorted_members(&namespace_group)? {
            let version_group = namespace_group.group(&version)?;
            let mut documents = Vec::new();
            for name in sorted_members(&version_group)? {
                let content = version_group
                    .dataset(&name)?
                    .read_scalar::<VarLenUnicode>()?
                    .as_str()
                    .to_string();
                documents.push((name, content));
            }
            specs.push(CachedSpec {
                namespace: namespace.clone(),
                version,
                documents,
            });
        }
    }
    Ok(specs)
}

fn read_container(
    parent: &Group,
    name: &str,
    registry: &TypeRegistry,
) -> Result<Box<dyn Container>> {
    let group = parent.group(name)?;
    let namespace = read_required_attr(&group, name, NAMESPACE_ATTR)?;
    let data_type = read_required_attr(&group, name, DATA_TYPE_ATTR)?;
    let object_id = read_required_attr(&group, name, OBJECT_ID_ATTR)?;
    debug!(name, namespace, data_type, "reading container");

    let mut record = RecordData::new(name, object_id);
    for attr_name in group.attr_names()? {
        if matches!(
            attr_name.as_str(),
            NAMESPACE_ATTR | DATA_TYPE_ATTR | OBJECT_ID_ATTR
        ) {
            continue;
        }
        // Only string attributes belong to the record model; anything else
        // in a foreign file is skipped.
        let Ok(value) = group
            .attr(&attr_name)
            .and_then(|attr| attr.read_scalar::<VarLenUnicode>())
        else {
            debug!(name, attribute = %attr_name, "skipping non-string attribute");
            continue;
        };
        record
            .attributes
            .insert(attr_name, value.as_str().to_string());
    }

    registry.build(&namespace, &data_type, record)
}

fn parse_session_start_time(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|error| ContainerError::InvalidTimestamp {
            value: raw.to_string(),
            message: error.to_string(),
        })
}

fn read_required_attr(group: &Group, owner: &str, name: &str) -> Result<String> {
    let attr = group
        .attr(name)
        .map_err(|_| ContainerError::MissingAttribute {
            container: owner.to_string(),
            name: name.to_string(),
        })?;
    Ok(attr.read_scalar::<VarLenUnicode>()?.as_str().to_string())
}

fn sorted_members(group: &Group) -> Result<Vec<String>> {
    let mut names = group.member_names()?;
    names.sort();
    Ok(names)
}
