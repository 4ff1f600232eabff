//! Deferred-open dataset reader.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hdf5::types::VarLenUnicode;

use crate::error::{NetcdfError, Result};
use crate::types::{NcDataset, NcVariable};
use crate::writer::{COORDINATES_ATTR, DIMENSIONS_ATTR};

/// An open handle onto an external dataset file.
///
/// Opening is immediate and cheap; variable data is read on demand. The
/// handle owns the underlying HDF5 file and releases it when dropped or
/// explicitly closed.
#[derive(Debug)]
pub struct NcFile {
    file: hdf5::File,
    path: PathBuf,
    coords: BTreeSet<String>,
}

impl NcFile {
    /// Open a dataset file for reading.
    ///
    /// A missing file is reported as [`NetcdfError::FileNotFound`]; an
    /// unreadable or corrupt file surfaces the underlying HDF5 error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NetcdfError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = hdf5::File::open(path)?;
        let coords = match file.attr(COORDINATES_ATTR) {
            Ok(attr) => attr
                .read_scalar::<VarLenUnicode>()?
                .as_str()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            Err(_) => BTreeSet::new(),
        };
        Ok(Self {
            file,
            path: path.to_path_buf(),
            coords,
        })
    }

    /// Path the handle was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the variables in the file, sorted.
    pub fn variable_names(&self) -> Result<Vec<String>> {
        let mut names = self.file.member_names()?;
        names.sort();
        Ok(names)
    }

    /// Whether the named variable is a coordinate.
    #[must_use]
    pub fn is_coord(&self, name: &str) -> bool {
        self.coords.contains(name)
    }

    /// Read one variable's shape, dimension names, and data.
    pub fn read_variable(&self, name: &str) -> Result<NcVariable> {
        let ds = self
            .file
            .dataset(name)
            .map_err(|_| NetcdfError::MissingVariable {
                name: name.to_string(),
            })?;
        let shape = ds.shape();
        let data = ds.read_raw::<f64>()?;
        let dims_raw = ds
            .attr(DIMENSIONS_ATTR)
            .and_then(|attr| attr.read_scalar::<VarLenUnicode>())
            .map(|value| value.as_str().to_string())
            .unwrap_or_default();
        let dims: Vec<&str> = dims_raw.split_whitespace().collect();
        NcVariable::new(name, &dims, &shape, data)
    }

    /// Read the whole file into an in-memory [`NcDataset`].
    pub fn read_dataset(&self) -> Result<NcDataset> {
        let mut dataset = NcDataset::new();
        for name in self.variable_names()? {
            dataset.add_variable(self.read_variable(&name)?)?;
        }
        for coord in &self.coords {
            dataset.mark_coord(coord)?;
        }
        Ok(dataset)
    }

    /// Close the handle, releasing the underlying file.
    pub fn close(self) {}
}
