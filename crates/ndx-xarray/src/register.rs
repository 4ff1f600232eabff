//! Registry integration: building references back from persisted records.

use ndx_container::{Container, ContainerError, RecordData, TypeRegistry};

use crate::dataset::{DATA_TYPE, ExternalXarrayDataset, NAMESPACE};

/// Factory invoked by the host reader for `ExternalXarrayDataset` records.
fn build_external_xarray_dataset(
    record: RecordData,
) -> Result<Box<dyn Container>, ContainerError> {
    let description = record.require_attribute("description")?.to_string();
    let path = record.require_attribute("path")?.to_string();

    let mut dataset = ExternalXarrayDataset::without_path(record.name.as_str(), description);
    dataset.restore_object_id(record.object_id.as_str());
    dataset
        .set_path(&path)
        .map_err(|error| ContainerError::Factory {
            data_type: DATA_TYPE.to_string(),
            message: error.to_string(),
        })?;
    Ok(Box::new(dataset))
}

/// Associate this extension's types with the given registry, so the host
/// reader instantiates [`ExternalXarrayDataset`] instead of the generic
/// fallback.
pub fn register(registry: &mut TypeRegistry) {
    registry.register(NAMESPACE, DATA_TYPE, build_external_xarray_dataset);
}

/// A registry with this extension's types pre-registered.
#[must_use]
pub fn default_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register(&mut registry);
    registry
}
