//! Schema file loading.
//!
//! Namespace manifests and type-definition files are parsed by file
//! extension (YAML or JSON); `source` entries resolve relative to the
//! namespace file's directory.

use std::fs;
use std::path::Path;

use crate::error::{Result, SchemaError};
use crate::types::{GroupSpec, Namespace, NamespaceFile, SchemaSource, TypeDefsFile};
use crate::validate::{validate_groups, validate_namespace};

/// A namespace together with the group specs its sources define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNamespace {
    pub namespace: Namespace,
    pub groups: Vec<GroupSpec>,
}

/// Load and parse a namespace manifest file.
pub fn load_namespace_file(path: &Path) -> Result<NamespaceFile> {
    parse_file(path)
}

/// Load and parse a type-definitions file.
pub fn load_type_defs_file(path: &Path) -> Result<TypeDefsFile> {
    parse_file(path)
}

/// Load a namespace manifest and every type-definition source it lists.
pub fn load_namespaces(path: &Path) -> Result<Vec<LoadedNamespace>> {
    let namespace_file = load_namespace_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut loaded = Vec::with_capacity(namespace_file.namespaces.len());
    for namespace in namespace_file.namespaces {
        validate_namespace(&namespace)?;
        let mut groups = Vec::new();
        for source in &namespace.schema {
            if let SchemaSource::Source { source } = source {
                let source_path = base_dir.join(source);
                if !source_path.exists() {
                    return Err(SchemaError::MissingSource { path: source_path });
                }
                let type_defs = load_type_defs_file(&source_path)?;
                groups.extend(type_defs.groups);
            }
        }
        validate_groups(&groups)?;
        loaded.push(LoadedNamespace { namespace, groups });
    }
    Ok(loaded)
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::io(path, source))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|source| SchemaError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
        Some("json") => serde_json::from_str(&content).map_err(|source| SchemaError::Json {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(SchemaError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
