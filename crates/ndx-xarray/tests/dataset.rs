//! Construction and path-guard tests for `ExternalXarrayDataset`.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

use ndx_xarray::{ExternalXarrayDataset, XarrayError};
use proptest::prelude::*;
use tracing::Level;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// Collects formatted warn-level messages for assertions.
#[derive(Clone, Default)]
struct WarningCapture(Arc<Mutex<Vec<String>>>);

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S> Layer<S> for WarningCapture
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if let Some(message) = visitor.0 {
                self.0.lock().unwrap().push(message);
            }
        }
    }
}

/// Run `f` with a warning-capturing subscriber installed and return its
/// result together with the captured warn messages.
fn with_captured_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let capture = WarningCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let warnings = capture.0.lock().unwrap().clone();
    (result, warnings)
}

#[test]
fn constructor_sets_fields() {
    let (dataset, warnings) = with_captured_warnings(|| {
        ExternalXarrayDataset::new("test_xarray", "desc", "test_xarray.nc")
    });

    assert_eq!(dataset.name(), "test_xarray");
    assert_eq!(dataset.description(), "desc");
    assert_eq!(dataset.path(), Some("test_xarray.nc"));
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn constructor_accepts_structured_path() {
    let from_path =
        ExternalXarrayDataset::new("test_xarray", "desc", Path::new("test_xarray.nc"));
    let from_str = ExternalXarrayDataset::new("test_xarray", "desc", "test_xarray.nc");
    assert_eq!(from_path.path(), from_str.path());
    assert_eq!(from_path.path(), Some("test_xarray.nc"));
}

#[test]
fn constructor_warns_on_wrong_extension() {
    let (dataset, warnings) = with_captured_warnings(|| {
        ExternalXarrayDataset::new("test_xarray", "desc", "wrong_extension")
    });

    assert_eq!(dataset.path(), Some("wrong_extension"));
    assert_eq!(
        warnings,
        vec!["ExternalXarrayDataset path should have extension .nc: wrong_extension".to_string()]
    );
}

#[test]
fn set_path_twice_fails_and_keeps_value() {
    let mut dataset = ExternalXarrayDataset::new("test_xarray", "desc", "a.nc");

    let err = dataset.set_path("b.nc").unwrap_err();
    assert!(matches!(err, XarrayError::PathAlreadySet));
    assert_eq!(err.to_string(), "Cannot reset path.");
    assert_eq!(dataset.path(), Some("a.nc"));
}

#[test]
fn deferred_path_is_set_exactly_once() {
    let mut dataset = ExternalXarrayDataset::without_path("test_xarray", "desc");
    assert_eq!(dataset.path(), None);

    dataset.set_path("late.nc").expect("first set");
    assert_eq!(dataset.path(), Some("late.nc"));

    let err = dataset.set_path("again.nc").unwrap_err();
    assert_eq!(err.to_string(), "Cannot reset path.");
    assert_eq!(dataset.path(), Some("late.nc"));
}

#[test]
fn description_stays_mutable() {
    let mut dataset = ExternalXarrayDataset::new("test_xarray", "desc", "a.nc");
    dataset.set_description("updated");
    assert_eq!(dataset.description(), "updated");
}

#[test]
fn as_xarray_without_path_fails() {
    let dataset = ExternalXarrayDataset::without_path("test_xarray", "desc");
    let err = dataset.as_xarray().unwrap_err();
    assert!(matches!(err, XarrayError::PathUnset));
}

#[test]
fn distinct_references_get_distinct_object_ids() {
    let first = ExternalXarrayDataset::new("a", "desc", "a.nc");
    let second = ExternalXarrayDataset::new("b", "desc", "b.nc");
    assert_ne!(first.object_id(), second.object_id());
}

proptest! {
    /// The stored path is always the first assigned value, for any inputs.
    #[test]
    fn path_is_write_once(first in "[a-z_]{1,12}(\\.nc)?", second in "[a-z_]{1,12}(\\.nc)?") {
        let mut dataset = ExternalXarrayDataset::without_path("p", "d");
        dataset.set_path(&first).unwrap();
        prop_assert_eq!(dataset.path(), Some(first.as_str()));

        let err = dataset.set_path(&second).unwrap_err();
        prop_assert_eq!(err.to_string(), "Cannot reset path.");
        prop_assert_eq!(dataset.path(), Some(first.as_str()));
    }

    /// The suffix check warns exactly when the extension is not `.nc`.
    #[test]
    fn warns_iff_extension_is_not_nc(stem in "[a-z_]{1,12}", nc in any::<bool>()) {
        let path = if nc { format!("{stem}.nc") } else { stem.clone() };
        let (_, warnings) = with_captured_warnings(|| {
            ExternalXarrayDataset::new("p", "d", &path)
        });
        if nc {
            prop_assert!(warnings.is_empty());
        } else {
            prop_assert_eq!(warnings.len(), 1);
            prop_assert_eq!(
                &warnings[0],
                &format!("ExternalXarrayDataset path should have extension .nc: {path}")
            );
        }
    }
}
