//! Type registry: schema-driven instantiation of concrete containers.
//!
//! The host reader does not know concrete types. Extensions register a
//! factory under their `(namespace, data type)` pair; records of types
//! nobody registered fall back to [`GenericContainer`].

use std::collections::BTreeMap;

use crate::container::{Container, GenericContainer, RecordData};
use crate::error::Result;

/// Builds a concrete container from a raw persisted record.
pub type ContainerFactory = fn(RecordData) -> Result<Box<dyn Container>>;

/// Maps `(namespace, data type)` pairs to record factories.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    factories: BTreeMap<(String, String), ContainerFactory>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. A later registration for the same pair replaces
    /// the earlier one.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        data_type: impl Into<String>,
        factory: ContainerFactory,
    ) {
        self.factories
            .insert((namespace.into(), data_type.into()), factory);
    }

    /// Whether a factory is registered for the pair.
    #[must_use]
    pub fn contains(&self, namespace: &str, data_type: &str) -> bool {
        self.factories
            .contains_key(&(namespace.to_string(), data_type.to_string()))
    }

    /// Instantiate a record, falling back to [`GenericContainer`] when no
    /// factory is registered for its type.
    pub fn build(
        &self,
        namespace: &str,
        data_type: &str,
        record: RecordData,
    ) -> Result<Box<dyn Container>> {
        match self
            .factories
            .get(&(namespace.to_string(), data_type.to_string()))
        {
            Some(factory) => factory(record),
            None => Ok(Box::new(GenericContainer::new(namespace, data_type, record))),
        }
    }
}
