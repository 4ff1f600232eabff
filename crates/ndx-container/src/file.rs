//! The root data file and its named sub-collections.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::container::Container;
use crate::error::{ContainerError, Result};

/// An in-memory data file: session identity plus the named sub-collections
/// containers can be attached to ("scratch", "analysis", and processing
/// modules).
#[derive(Debug)]
pub struct DataFile {
    identifier: String,
    session_description: String,
    session_start_time: DateTime<Utc>,
    scratch: BTreeMap<String, Box<dyn Container>>,
    analysis: BTreeMap<String, Box<dyn Container>>,
    processing: BTreeMap<String, ProcessingModule>,
}

/// A named processing module holding its own containers.
#[derive(Debug)]
pub struct ProcessingModule {
    name: String,
    description: String,
    containers: BTreeMap<String, Box<dyn Container>>,
}

impl DataFile {
    /// Create an empty data file.
    pub fn new(
        identifier: impl Into<String>,
        session_description: impl Into<String>,
        session_start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            session_description: session_description.into(),
            session_start_time,
            scratch: BTreeMap::new(),
            analysis: BTreeMap::new(),
            processing: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn session_description(&self) -> &str {
        &self.session_description
    }

    #[must_use]
    pub fn session_start_time(&self) -> DateTime<Utc> {
        self.session_start_time
    }

    /// Attach a container to the scratch collection.
    pub fn add_scratch(&mut self, container: impl Container) -> Result<()> {
        self.add_scratch_boxed(Box::new(container))
    }

    /// Attach an already boxed container to the scratch collection.
    pub fn add_scratch_boxed(&mut self, container: Box<dyn Container>) -> Result<()> {
        insert(&mut self.scratch, "scratch", container)
    }

    /// Look up a scratch container by name.
    #[must_use]
    pub fn get_scratch(&self, name: &str) -> Option<&dyn Container> {
        self.scratch.get(name).map(Box::as_ref)
    }

    /// Scratch containers, sorted by name.
    pub fn scratch(&self) -> impl Iterator<Item = &dyn Container> {
        self.scratch.values().map(Box::as_ref)
    }

    /// Attach a container to the analysis collection.
    pub fn add_analysis(&mut self, container: impl Container) -> Result<()> {
        self.add_analysis_boxed(Box::new(container))
    }

    /// Attach an already boxed container to the analysis collection.
    pub fn add_analysis_boxed(&mut self, container: Box<dyn Container>) -> Result<()> {
        insert(&mut self.analysis, "analysis", container)
    }

    /// Look up an analysis container by name.
    #[must_use]
    pub fn get_analysis(&self, name: &str) -> Option<&dyn Container> {
        self.analysis.get(name).map(Box::as_ref)
    }

    /// Analysis containers, sorted by name.
    pub fn analysis(&self) -> impl Iterator<Item = &dyn Container> {
        self.analysis.values().map(Box::as_ref)
    }

    /// Create a new, empty processing module.
    pub fn create_processing_module(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&mut ProcessingModule> {
        let name = name.into();
        validate_name(&name)?;
        if self.processing.contains_key(&name) {
            return Err(ContainerError::DuplicateName {
                collection: "processing".to_string(),
                name,
            });
        }
        let module = ProcessingModule {
            name: name.clone(),
            description: description.into(),
            containers: BTreeMap::new(),
        };
        Ok(self.processing.entry(name).or_insert(module))
    }

    /// Look up a processing module by name.
    #[must_use]
    pub fn processing_module(&self, name: &str) -> Option<&ProcessingModule> {
        self.processing.get(name)
    }

    /// All processing modules, sorted by name.
    pub fn processing_modules(&self) -> impl Iterator<Item = &ProcessingModule> {
        self.processing.values()
    }

    /// Every container in the file with its HDF5 path, in a stable order:
    /// scratch, analysis, then processing modules, each sorted by name.
    #[must_use]
    pub fn iter_objects(&self) -> Vec<(String, &dyn Container)> {
        let mut objects = Vec::new();
        for (name, container) in &self.scratch {
            objects.push((format!("/scratch/{name}"), container.as_ref()));
        }
        for (name, container) in &self.analysis {
            objects.push((format!("/analysis/{name}"), container.as_ref()));
        }
        for (module_name, module) in &self.processing {
            for (name, container) in &module.containers {
                objects.push((
                    format!("/processing/{module_name}/{name}"),
                    container.as_ref(),
                ));
            }
        }
        objects
    }
}

impl ProcessingModule {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attach a container to this module.
    pub fn add(&mut self, container: impl Container) -> Result<()> {
        self.add_boxed(Box::new(container))
    }

    /// Attach an already boxed container to this module.
    pub fn add_boxed(&mut self, container: Box<dyn Container>) -> Result<()> {
        let collection = self.name.clone();
        insert(&mut self.containers, &collection, container)
    }

    /// Look up a container by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Container> {
        self.containers.get(name).map(Box::as_ref)
    }

    /// All containers in this module, sorted by name.
    pub fn containers(&self) -> impl Iterator<Item = &dyn Container> {
        self.containers.values().map(Box::as_ref)
    }
}

fn insert(
    collection: &mut BTreeMap<String, Box<dyn Container>>,
    collection_name: &str,
    container: Box<dyn Container>,
) -> Result<()> {
    let name = container.name().to_string();
    validate_name(&name)?;
    if collection.contains_key(&name) {
        return Err(ContainerError::DuplicateName {
            collection: collection_name.to_string(),
            name,
        });
    }
    collection.insert(name, container);
    Ok(())
}

/// Names become HDF5 link names: non-empty, no slashes.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') {
        return Err(ContainerError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{GenericContainer, RecordData, new_object_id};

    fn thing(name: &str) -> GenericContainer {
        GenericContainer::new("ns", "Thing", RecordData::new(name, new_object_id()))
    }

    fn file() -> DataFile {
        DataFile::new("id", "desc", Utc::now())
    }

    #[test]
    fn duplicate_scratch_name_is_rejected() {
        let mut data = file();
        data.add_scratch(thing("a")).expect("first add");
        let err = data.add_scratch(thing("a")).unwrap_err();
        assert!(matches!(err, ContainerError::DuplicateName { .. }));
        assert!(data.get_scratch("a").is_some());
    }

    #[test]
    fn scratch_and_analysis_are_separate_collections() {
        let mut data = file();
        data.add_scratch(thing("a")).expect("scratch");
        data.add_analysis(thing("a")).expect("analysis");
        assert!(data.get_scratch("a").is_some());
        assert!(data.get_analysis("a").is_some());
    }

    #[test]
    fn names_with_slashes_are_rejected() {
        let mut data = file();
        let err = data.add_scratch(thing("a/b")).unwrap_err();
        assert!(matches!(err, ContainerError::InvalidName { .. }));
    }

    #[test]
    fn iter_objects_paths_are_stable() {
        let mut data = file();
        data.add_scratch(thing("s")).expect("scratch");
        data.add_analysis(thing("a")).expect("analysis");
        let module = data
            .create_processing_module("behavior", "behavioral data")
            .expect("module");
        module.add(thing("p")).expect("module add");

        let paths: Vec<String> = data
            .iter_objects()
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(paths, vec!["/scratch/s", "/analysis/a", "/processing/behavior/p"]);
    }

    #[test]
    fn duplicate_processing_module_is_rejected() {
        let mut data = file();
        data.create_processing_module("behavior", "one").expect("first");
        let err = data.create_processing_module("behavior", "two").unwrap_err();
        assert!(matches!(err, ContainerError::DuplicateName { .. }));
        assert_eq!(data.processing_module("behavior").unwrap().description(), "one");
    }
}
