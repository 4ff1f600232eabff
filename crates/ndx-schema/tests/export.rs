//! Export and reload tests for the namespace builder.

use ndx_schema::{
    AttributeSpec, GroupSpec, NamespaceBuilder, SchemaError, SchemaSource, load_namespaces,
};

fn example_builder() -> NamespaceBuilder {
    NamespaceBuilder::new("ndx-thing", "0.2.0", "An example extension")
        .author("A. Author")
        .contact("author@example.org")
        .include_namespace("core")
        .add_group(
            GroupSpec::new("Thing", "DataInterface", "A thing record")
                .with_attribute(AttributeSpec::text("description", "Description of the thing."))
                .with_attribute(AttributeSpec::text("path", "Relative file path of the thing.")),
        )
}

#[test]
fn render_produces_file_pair() {
    let documents = example_builder().render().expect("render");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].0, "ndx-thing.namespace.yaml");
    assert_eq!(documents[1].0, "ndx-thing.extensions.yaml");
    assert!(documents[0].1.contains("version: 0.2.0"));
    assert!(documents[1].1.contains("data_type_def: Thing"));
}

#[test]
fn exported_pair_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let builder = example_builder();
    builder.export(dir.path()).expect("export");

    let loaded = load_namespaces(&dir.path().join(builder.namespace_filename())).expect("load");
    assert_eq!(loaded.len(), 1);

    let namespace = &loaded[0].namespace;
    assert_eq!(namespace.name, "ndx-thing");
    assert_eq!(namespace.version, "0.2.0");
    assert_eq!(namespace.author, vec!["A. Author".to_string()]);
    assert_eq!(
        namespace.schema[0],
        SchemaSource::Namespace {
            namespace: "core".to_string()
        }
    );
    assert_eq!(
        namespace.schema[1],
        SchemaSource::Source {
            source: "ndx-thing.extensions.yaml".to_string()
        }
    );

    let (namespace_file, type_defs) = builder.build().expect("build");
    assert_eq!(loaded[0].namespace, namespace_file.namespaces[0]);
    assert_eq!(loaded[0].groups, type_defs.groups);
}

#[test]
fn builder_without_groups_renders_single_document() {
    let documents = NamespaceBuilder::new("ndx-empty", "0.1.0", "doc")
        .include_namespace("core")
        .render()
        .expect("render");
    assert_eq!(documents.len(), 1);
    assert!(!documents[0].1.contains("extensions.yaml"));
}

#[test]
fn builder_rejects_empty_version() {
    let err = NamespaceBuilder::new("ndx-thing", "", "doc")
        .include_namespace("core")
        .render()
        .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidSpec { .. }));
}

#[test]
fn builder_rejects_namespace_without_sources() {
    let err = NamespaceBuilder::new("ndx-thing", "0.1.0", "doc")
        .render()
        .unwrap_err();
    assert!(err.to_string().contains("no schema sources"));
}
