//! Discovery of external xarray references inside a data file.

use ndx_container::DataFile;

use crate::dataset::{DATA_TYPE, NAMESPACE};

/// One match from [`find_external_xarray_datasets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundDataset {
    /// Absolute HDF5 path of the record's group.
    pub hdf5_path: String,
    pub name: String,
    pub object_id: String,
    /// Human-readable hierarchy, innermost container first.
    pub hierarchy: String,
}

/// Find every `ExternalXarrayDataset` record in `file`.
///
/// Matching is by namespace and data type, so records read through the
/// generic fallback (extension not registered) are found as well.
#[must_use]
pub fn find_external_xarray_datasets(file: &DataFile) -> Vec<FoundDataset> {
    file.iter_objects()
        .into_iter()
        .filter(|(_, container)| {
            container.namespace() == NAMESPACE && container.data_type() == DATA_TYPE
        })
        .map(|(hdf5_path, container)| {
            let hierarchy = hierarchy_string(&hdf5_path, container.name(), file.identifier());
            FoundDataset {
                hdf5_path,
                name: container.name().to_string(),
                object_id: container.object_id().to_string(),
                hierarchy,
            }
        })
        .collect()
}

/// Render the container hierarchy for one match, e.g.
/// `ExternalXarrayDataset 'x', scratch, DataFile 'id'`.
fn hierarchy_string(hdf5_path: &str, name: &str, identifier: &str) -> String {
    let mut parts = vec![format!("{DATA_TYPE} '{name}'")];
    let parents: Vec<&str> = hdf5_path
        .trim_start_matches('/')
        .split('/')
        .collect();
    // Skip the record's own segment; list enclosing groups outwards.
    for parent in parents[..parents.len().saturating_sub(1)].iter().rev() {
        parts.push((*parent).to_string());
    }
    parts.push(format!("DataFile '{identifier}'"));
    parts.join(", ")
}
