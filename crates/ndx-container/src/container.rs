//! Container trait and record primitives.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::{ContainerError, Result};

/// Reserved attribute names used by the persistence layer.
pub const NAMESPACE_ATTR: &str = "namespace";
pub const DATA_TYPE_ATTR: &str = "data_type";
pub const OBJECT_ID_ATTR: &str = "object_id";

/// A typed, named record that can be attached to a data file collection.
///
/// Implementations carry a stable object id and expose their persisted
/// state as text attributes; the reader rebuilds them through a
/// [`TypeRegistry`](crate::TypeRegistry) factory.
pub trait Container: Any + Debug {
    /// Name of the record, unique within its parent collection.
    fn name(&self) -> &str;

    /// Stable object id, preserved across persistence round-trips.
    fn object_id(&self) -> &str;

    /// Namespace the record's type belongs to.
    fn namespace(&self) -> &str;

    /// Type name within the namespace.
    fn data_type(&self) -> &str;

    /// Text attributes persisted on the record's group.
    fn text_attributes(&self) -> Vec<(String, String)>;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Generate a fresh object id.
#[must_use]
pub fn new_object_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Raw record contents handed to a factory when a file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordData {
    pub name: String,
    pub object_id: String,
    pub attributes: BTreeMap<String, String>,
}

impl RecordData {
    /// Create a record with no attributes.
    pub fn new(name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_id: object_id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Look up an attribute value, failing if absent.
    pub fn require_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .ok_or_else(|| ContainerError::MissingAttribute {
                container: self.name.clone(),
                name: name.to_string(),
            })
    }
}

/// Fallback container used when no factory is registered for a type.
///
/// Preserves every attribute of the record it was read from, so a file can
/// be read, inspected, and re-written without the defining extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericContainer {
    namespace: String,
    data_type: String,
    record: RecordData,
}

impl GenericContainer {
    /// Wrap a raw record under its namespace and type name.
    pub fn new(
        namespace: impl Into<String>,
        data_type: impl Into<String>,
        record: RecordData,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            data_type: data_type.into(),
            record,
        }
    }

    /// The wrapped record.
    #[must_use]
    pub fn record(&self) -> &RecordData {
        &self.record
    }
}

impl Container for GenericContainer {
    fn name(&self) -> &str {
        &self.record.name
    }

    fn object_id(&self) -> &str {
        &self.record.object_id
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn text_attributes(&self) -> Vec<(String, String)> {
        self.record
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
