//! Structural validation shared by the builder and the loader.

use std::collections::BTreeSet;

use crate::error::{Result, SchemaError};
use crate::types::{GroupSpec, Namespace};

/// Validate a namespace entry: non-empty identity and at least one schema source.
pub(crate) fn validate_namespace(namespace: &Namespace) -> Result<()> {
    if namespace.name.is_empty() {
        return Err(SchemaError::invalid("namespace name must not be empty"));
    }
    if namespace.version.is_empty() {
        return Err(SchemaError::invalid(format!(
            "namespace {} has an empty version",
            namespace.name
        )));
    }
    if namespace.schema.is_empty() {
        return Err(SchemaError::invalid(format!(
            "namespace {} lists no schema sources",
            namespace.name
        )));
    }
    Ok(())
}

/// Validate a set of group specs: non-empty type names, unique definitions,
/// unique attribute names within each group.
pub(crate) fn validate_groups(groups: &[GroupSpec]) -> Result<()> {
    let mut defined = BTreeSet::new();
    for group in groups {
        if group.data_type_def.is_empty() {
            return Err(SchemaError::invalid("group with empty data_type_def"));
        }
        if group.data_type_inc.is_empty() {
            return Err(SchemaError::invalid(format!(
                "group {} has an empty data_type_inc",
                group.data_type_def
            )));
        }
        if !defined.insert(group.data_type_def.as_str()) {
            return Err(SchemaError::invalid(format!(
                "duplicate group definition: {}",
                group.data_type_def
            )));
        }
        let mut attr_names = BTreeSet::new();
        for attribute in &group.attributes {
            if attribute.name.is_empty() {
                return Err(SchemaError::invalid(format!(
                    "group {} has an attribute with an empty name",
                    group.data_type_def
                )));
            }
            if !attr_names.insert(attribute.name.as_str()) {
                return Err(SchemaError::invalid(format!(
                    "group {} has duplicate attribute: {}",
                    group.data_type_def, attribute.name
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttributeSpec, GroupSpec};

    #[test]
    fn rejects_duplicate_attributes() {
        let group = GroupSpec::new("Thing", "Base", "doc")
            .with_attribute(AttributeSpec::text("description", "doc"))
            .with_attribute(AttributeSpec::text("description", "doc"));
        let err = validate_groups(std::slice::from_ref(&group)).unwrap_err();
        assert!(err.to_string().contains("duplicate attribute"));
    }

    #[test]
    fn rejects_duplicate_group_defs() {
        let groups = vec![
            GroupSpec::new("Thing", "Base", "doc"),
            GroupSpec::new("Thing", "Base", "doc"),
        ];
        let err = validate_groups(&groups).unwrap_err();
        assert!(err.to_string().contains("duplicate group definition"));
    }
}
