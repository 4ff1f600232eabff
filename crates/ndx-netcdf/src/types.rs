//! In-memory model for gridded datasets.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{NetcdfError, Result};

/// A named variable: dimension names, shape, and row-major data.
#[derive(Debug, Clone, PartialEq)]
pub struct NcVariable {
    pub name: String,
    pub dims: Vec<String>,
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl NcVariable {
    /// Create a variable, validating rank and data length against the shape.
    pub fn new(
        name: impl Into<String>,
        dims: &[&str],
        shape: &[usize],
        data: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if dims.len() != shape.len() {
            return Err(NetcdfError::RankMismatch {
                name,
                dims: dims.len(),
                rank: shape.len(),
            });
        }
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(NetcdfError::ShapeMismatch {
                name,
                shape: shape.to_vec(),
                len: data.len(),
            });
        }
        Ok(Self {
            name,
            dims: dims.iter().map(|dim| (*dim).to_string()).collect(),
            shape: shape.to_vec(),
            data,
        })
    }
}

/// A gridded dataset: variables sharing named dimensions, with some
/// variables marked as coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NcDataset {
    variables: Vec<NcVariable>,
    coords: BTreeSet<String>,
}

impl NcDataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, validating dimension sizes against existing variables.
    pub fn add_variable(&mut self, variable: NcVariable) -> Result<()> {
        if self.variable(&variable.name).is_some() {
            return Err(NetcdfError::DuplicateVariable {
                name: variable.name,
            });
        }
        let dimensions = self.dimensions();
        for (dim, size) in variable.dims.iter().zip(&variable.shape) {
            if let Some(existing) = dimensions.get(dim.as_str())
                && existing != size
            {
                return Err(NetcdfError::DimensionSizeConflict {
                    name: dim.clone(),
                    existing: *existing,
                    requested: *size,
                });
            }
        }
        self.variables.push(variable);
        Ok(())
    }

    /// Mark an existing variable as a coordinate.
    pub fn mark_coord(&mut self, name: &str) -> Result<()> {
        if self.variable(name).is_none() {
            return Err(NetcdfError::MissingVariable {
                name: name.to_string(),
            });
        }
        self.coords.insert(name.to_string());
        Ok(())
    }

    /// All variables, in insertion order.
    #[must_use]
    pub fn variables(&self) -> &[NcVariable] {
        &self.variables
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&NcVariable> {
        self.variables.iter().find(|var| var.name == name)
    }

    /// Coordinate variable names.
    #[must_use]
    pub fn coords(&self) -> &BTreeSet<String> {
        &self.coords
    }

    /// Whether the named variable is a coordinate.
    #[must_use]
    pub fn is_coord(&self, name: &str) -> bool {
        self.coords.contains(name)
    }

    /// Dimension names and sizes, derived from the variables.
    #[must_use]
    pub fn dimensions(&self) -> BTreeMap<&str, usize> {
        let mut dimensions = BTreeMap::new();
        for variable in &self.variables {
            for (dim, size) in variable.dims.iter().zip(&variable.shape) {
                dimensions.insert(dim.as_str(), *size);
            }
        }
        dimensions
    }
}
