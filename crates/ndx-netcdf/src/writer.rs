//! Dataset file writer.

use std::path::Path;
use std::str::FromStr;

use hdf5::types::VarLenUnicode;
use ndarray::{ArrayD, IxDyn};

use crate::error::{NetcdfError, Result};
use crate::types::NcDataset;

/// Attribute on each variable listing its dimension names, space separated.
pub(crate) const DIMENSIONS_ATTR: &str = "dimensions";
/// Root attribute listing coordinate variable names, space separated.
pub(crate) const COORDINATES_ATTR: &str = "coordinates";

/// Write a string scalar attribute on an HDF5 location.
/// A macro because File, Group, and Dataset expose `new_attr` through
/// separate deref chains rather than one trait that generics can bind on.
macro_rules! write_str_attr {
    ($loc:expr, $name:expr, $value:expr) => {{
        let value =
            VarLenUnicode::from_str($value).map_err(|error| NetcdfError::InvalidString {
                name: $name.to_string(),
                message: error.to_string(),
            })?;
        $loc.new_attr::<VarLenUnicode>()
            .create($name)?
            .write_scalar(&value)?;
    }};
}

/// Write a dataset to an HDF5-backed `.nc` file at `path`.
///
/// Each variable becomes one HDF5 dataset with its dimension names stored as
/// a string attribute; coordinate variables are listed in a root attribute.
pub fn write_netcdf(path: impl AsRef<Path>, dataset: &NcDataset) -> Result<()> {
    let file = hdf5::File::create(path.as_ref())?;

    for variable in dataset.variables() {
        let array = ArrayD::from_shape_vec(IxDyn(&variable.shape), variable.data.clone())
            .map_err(|_| NetcdfError::ShapeMismatch {
                name: variable.name.clone(),
                shape: variable.shape.clone(),
                len: variable.data.len(),
            })?;
        let ds = file
            .new_dataset_builder()
            .with_data(&array)
            .create(variable.name.as_str())?;
        write_str_attr!(ds, DIMENSIONS_ATTR, &variable.dims.join(" "));
    }

    let coords: Vec<&str> = dataset.coords().iter().map(String::as_str).collect();
    write_str_attr!(file, COORDINATES_ATTR, &coords.join(" "));

    Ok(())
}
