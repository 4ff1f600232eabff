//! Declarative schema model for extension namespaces.
//!
//! A namespace ships as a file pair: a namespace manifest listing included
//! namespaces and type-definition sources, and one or more type-definition
//! files holding the group specs themselves.

use serde::{Deserialize, Serialize};

/// Top-level structure of a `<name>.namespace.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceFile {
    pub namespaces: Vec<Namespace>,
}

/// A named, versioned extension namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub version: String,
    pub doc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<String>,
    pub schema: Vec<SchemaSource>,
}

/// One entry in a namespace's `schema` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaSource {
    /// Include every type from another namespace.
    Namespace { namespace: String },
    /// A type-definition file shipped next to the namespace file.
    Source { source: String },
}

/// Top-level structure of a type-definitions file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefsFile {
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

/// A group-backed record type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Name of the type this spec defines.
    pub data_type_def: String,
    /// Name of the base type this spec extends.
    pub data_type_inc: String,
    pub doc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
}

impl GroupSpec {
    /// Create a group spec with no attributes.
    pub fn new(
        data_type_def: impl Into<String>,
        data_type_inc: impl Into<String>,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            data_type_def: data_type_def.into(),
            data_type_inc: data_type_inc.into(),
            doc: doc.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute spec.
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A scalar attribute attached to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    pub dtype: Dtype,
    pub doc: String,
}

impl AttributeSpec {
    /// Create a text attribute spec.
    pub fn text(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: Dtype::Text,
            doc: doc.into(),
        }
    }
}

/// Attribute value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Text,
    Int,
    Float,
    Bool,
}
