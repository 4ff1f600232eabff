//! Persistence round-trip tests over real HDF5 files.

use chrono::Utc;
use ndx_container::{
    CachedSpec, Container, ContainerError, DataFile, GenericContainer, RecordData, TypeRegistry,
    WriteOptions, new_object_id, read_cached_specs, read_data_file, write_data_file,
    write_data_file_with_options,
};

fn thing(name: &str, description: &str) -> GenericContainer {
    let record = RecordData::new(name, new_object_id())
        .with_attribute("description", description)
        .with_attribute("path", format!("{name}.nc"));
    GenericContainer::new("ndx-thing", "Thing", record)
}

#[test]
fn roundtrip_preserves_session_and_containers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.h5");

    let start_time = Utc::now();
    let mut data = DataFile::new("identifier", "session_description", start_time);
    let original = thing("thing1", "first thing");
    let original_id = original.object_id().to_string();
    data.add_scratch(original).expect("add scratch");
    data.add_analysis(thing("thing2", "second thing"))
        .expect("add analysis");

    write_data_file(&path, &data).expect("write");
    let read_back = read_data_file(&path, &TypeRegistry::new()).expect("read");

    assert_eq!(read_back.identifier(), "identifier");
    assert_eq!(read_back.session_description(), "session_description");
    assert_eq!(read_back.session_start_time(), start_time);

    let container = read_back.get_scratch("thing1").expect("scratch container");
    assert_eq!(container.namespace(), "ndx-thing");
    assert_eq!(container.data_type(), "Thing");
    assert_eq!(container.object_id(), original_id);

    let generic = container
        .as_any()
        .downcast_ref::<GenericContainer>()
        .expect("generic fallback");
    assert_eq!(generic.record().attribute("description"), Some("first thing"));
    assert_eq!(generic.record().attribute("path"), Some("thing1.nc"));

    assert!(read_back.get_analysis("thing2").is_some());
    assert!(read_back.get_scratch("thing2").is_none());
}

#[test]
fn roundtrip_preserves_processing_modules() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.h5");

    let mut data = DataFile::new("id", "desc", Utc::now());
    let module = data
        .create_processing_module("behavior", "behavioral data")
        .expect("module");
    module.add(thing("tracked", "tracked thing")).expect("add");

    write_data_file(&path, &data).expect("write");
    let read_back = read_data_file(&path, &TypeRegistry::new()).expect("read");

    let module = read_back.processing_module("behavior").expect("module");
    assert_eq!(module.description(), "behavioral data");
    assert!(module.get("tracked").is_some());

    let paths: Vec<String> = read_back
        .iter_objects()
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(paths, vec!["/processing/behavior/tracked"]);
}

#[test]
fn registered_factory_builds_concrete_type() {
    #[derive(Debug)]
    struct Concrete {
        record: RecordData,
    }

    impl Container for Concrete {
        fn name(&self) -> &str {
            &self.record.name
        }
        fn object_id(&self) -> &str {
            &self.record.object_id
        }
        fn namespace(&self) -> &str {
            "ndx-thing"
        }
        fn data_type(&self) -> &str {
            "Thing"
        }
        fn text_attributes(&self) -> Vec<(String, String)> {
            self.record
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn build(record: RecordData) -> Result<Box<dyn Container>, ContainerError> {
        record.require_attribute("description")?;
        Ok(Box::new(Concrete { record }))
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.h5");

    let mut data = DataFile::new("id", "desc", Utc::now());
    data.add_scratch(thing("thing1", "first thing"))
        .expect("add scratch");
    write_data_file(&path, &data).expect("write");

    let mut registry = TypeRegistry::new();
    registry.register("ndx-thing", "Thing", build);
    let read_back = read_data_file(&path, &registry).expect("read");

    let container = read_back.get_scratch("thing1").expect("container");
    assert!(container.as_any().downcast_ref::<Concrete>().is_some());
    assert!(container.as_any().downcast_ref::<GenericContainer>().is_none());
}

#[test]
fn cached_specs_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.h5");

    // Documents come back sorted by name, so store them sorted.
    let spec = CachedSpec {
        namespace: "ndx-thing".to_string(),
        version: "0.1.0".to_string(),
        documents: vec![
            ("ndx-thing.extensions.yaml".to_string(), "groups: []\n".to_string()),
            ("ndx-thing.namespace.yaml".to_string(), "namespaces: []\n".to_string()),
        ],
    };
    let data = DataFile::new("id", "desc", Utc::now());
    let options = WriteOptions::new().cache_spec(spec.clone());
    write_data_file_with_options(&path, &data, &options).expect("write");

    let specs = read_cached_specs(&path).expect("read specs");
    assert_eq!(specs, vec![spec]);
}

#[test]
fn plain_write_caches_no_specs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.h5");
    write_data_file(&path, &DataFile::new("id", "desc", Utc::now())).expect("write");
    assert!(read_cached_specs(&path).expect("read specs").is_empty());
}

#[test]
fn read_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.h5");
    let err = read_data_file(&path, &TypeRegistry::new()).unwrap_err();
    assert!(matches!(err, ContainerError::FileNotFound { .. }));
}
