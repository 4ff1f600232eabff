//! Builder for a namespace and its exported file pair.

use std::fs;
use std::path::Path;

use crate::error::{Result, SchemaError};
use crate::types::{GroupSpec, Namespace, NamespaceFile, SchemaSource, TypeDefsFile};
use crate::validate::{validate_groups, validate_namespace};

/// Builds an extension namespace and its type-definitions file.
///
/// The built namespace is exported as a file pair next to each other: the
/// namespace manifest (`<name>.namespace.yaml`) and the type definitions
/// (`<name>.extensions.yaml`).
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    name: String,
    version: String,
    doc: String,
    author: Vec<String>,
    contact: Vec<String>,
    includes: Vec<String>,
    groups: Vec<GroupSpec>,
}

impl NamespaceBuilder {
    /// Start a namespace with its identity fields.
    pub fn new(name: impl Into<String>, version: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            doc: doc.into(),
            author: Vec::new(),
            contact: Vec::new(),
            includes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Append an author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author.push(author.into());
        self
    }

    /// Append a contact address.
    #[must_use]
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact.push(contact.into());
        self
    }

    /// Include every type from another namespace.
    #[must_use]
    pub fn include_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.includes.push(namespace.into());
        self
    }

    /// Define a new group-backed type in this namespace.
    #[must_use]
    pub fn add_group(mut self, group: GroupSpec) -> Self {
        self.groups.push(group);
        self
    }

    /// File name of the namespace manifest.
    #[must_use]
    pub fn namespace_filename(&self) -> String {
        format!("{}.namespace.yaml", self.name)
    }

    /// File name of the type-definitions file.
    #[must_use]
    pub fn extensions_filename(&self) -> String {
        format!("{}.extensions.yaml", self.name)
    }

    /// Build the validated document pair.
    pub fn build(&self) -> Result<(NamespaceFile, TypeDefsFile)> {
        let mut schema: Vec<SchemaSource> = self
            .includes
            .iter()
            .map(|namespace| SchemaSource::Namespace {
                namespace: namespace.clone(),
            })
            .collect();
        if !self.groups.is_empty() {
            schema.push(SchemaSource::Source {
                source: self.extensions_filename(),
            });
        }

        let namespace = Namespace {
            name: self.name.clone(),
            version: self.version.clone(),
            doc: self.doc.clone(),
            author: self.author.clone(),
            contact: self.contact.clone(),
            schema,
        };
        validate_namespace(&namespace)?;
        validate_groups(&self.groups)?;

        Ok((
            NamespaceFile {
                namespaces: vec![namespace],
            },
            TypeDefsFile {
                groups: self.groups.clone(),
            },
        ))
    }

    /// Render the document pair as `(file name, YAML content)` entries.
    pub fn render(&self) -> Result<Vec<(String, String)>> {
        let (namespace_file, type_defs) = self.build()?;
        let namespace_yaml =
            serde_yaml::to_string(&namespace_file).map_err(|source| SchemaError::Render {
                name: self.namespace_filename(),
                source,
            })?;
        let mut documents = vec![(self.namespace_filename(), namespace_yaml)];
        if !type_defs.groups.is_empty() {
            let extensions_yaml =
                serde_yaml::to_string(&type_defs).map_err(|source| SchemaError::Render {
                    name: self.extensions_filename(),
                    source,
                })?;
            documents.push((self.extensions_filename(), extensions_yaml));
        }
        Ok(documents)
    }

    /// Write the document pair into `dir`.
    pub fn export(&self, dir: &Path) -> Result<()> {
        for (filename, content) in self.render()? {
            let path = dir.join(filename);
            fs::write(&path, content).map_err(|source| SchemaError::io(&path, source))?;
        }
        Ok(())
    }
}
