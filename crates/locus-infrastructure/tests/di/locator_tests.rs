//! Component locator tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use locus_application::ComponentRegistry;
use locus_domain::constants::{
    DUCKDB_IMPLEMENTATION, EMBEDDED_DUCKDB_IMPLEMENTATION, LOCAL_API_IMPLEMENTATION,
};
use locus_domain::{Error, Setting, Settings};
use locus_infrastructure::ComponentLocator;
use locus_providers::api::LocalApi;
use locus_providers::db::DuckDb;
use tracing::Level;

use super::{Probe, count_events};

/// Registry with one counting probe and one failing factory
fn counting_registry(constructed: Arc<AtomicUsize>) -> ComponentRegistry {
    ComponentRegistry::new()
        .with_component("tests.probes.Counted", "Counts constructions", move |_| {
            constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Probe::new("counted")))
        })
        .unwrap()
        .with_component("tests.probes.Broken", "Always fails", |_| {
            Err(Error::invalid_argument("probe refused to start"))
        })
        .unwrap()
}

fn settings_with_database(identifier: &str) -> Settings {
    Settings {
        database_implementation: identifier.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_repeated_resolution_returns_same_instance() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let locator = ComponentLocator::new(counting_registry(constructed.clone()));
    let settings = settings_with_database("tests.probes.Counted");

    let first = locator.resolve(&settings, Setting::DatabaseImplementation).unwrap();
    let second = locator.resolve(&settings, Setting::DatabaseImplementation).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert_eq!(locator.len(), 1);
}

#[test]
fn test_same_identifier_through_different_options_is_shared() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let locator = ComponentLocator::new(counting_registry(constructed.clone()));
    let settings = Settings {
        database_implementation: "tests.probes.Counted".to_string(),
        system_database_implementation: "tests.probes.Counted".to_string(),
        ..Default::default()
    };

    let db = locator.resolve(&settings, Setting::DatabaseImplementation).unwrap();
    let system = locator
        .resolve(&settings, Setting::SystemDatabaseImplementation)
        .unwrap();

    assert!(Arc::ptr_eq(&db, &system));
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_builtin_shared_between_ingest_and_system_database() {
    let locator = ComponentLocator::discover();
    let settings = Settings::default();

    let ingest = locator.resolve(&settings, Setting::IngestImplementation).unwrap();
    let system = locator
        .resolve(&settings, Setting::SystemDatabaseImplementation)
        .unwrap();

    assert!(Arc::ptr_eq(&ingest, &system));
    assert_eq!(locator.cached_identifiers(), vec![EMBEDDED_DUCKDB_IMPLEMENTATION]);
}

#[test]
fn test_legacy_alias_shares_canonical_instance_and_warns_once() {
    let locator = ComponentLocator::discover();
    let canonical = locator
        .resolve(&settings_with_database(DUCKDB_IMPLEMENTATION), Setting::DatabaseImplementation)
        .unwrap();

    let legacy_settings = settings_with_database("duckdb");
    let (legacy, warnings) = count_events(Level::WARN, || {
        locator
            .resolve(&legacy_settings, Setting::DatabaseImplementation)
            .unwrap()
    });

    assert!(Arc::ptr_eq(&canonical, &legacy));
    assert_eq!(warnings, 1);
    assert_eq!(legacy_settings.database_implementation, "duckdb");
}

#[test]
fn test_each_aliased_resolution_warns() {
    let locator = ComponentLocator::discover();
    let settings = Settings {
        api_implementation: "local".to_string(),
        ..Default::default()
    };

    let (_, warnings) = count_events(Level::WARN, || {
        for _ in 0..3 {
            locator.resolve(&settings, Setting::ApiImplementation).unwrap();
        }
    });
    assert_eq!(warnings, 3);
    assert_eq!(locator.cached_identifiers(), vec![LOCAL_API_IMPLEMENTATION]);
}

#[test]
fn test_alias_in_non_identifier_option_resolves() {
    let locator = ComponentLocator::discover();
    let settings = Settings {
        environment: "local".to_string(),
        ..Default::default()
    };

    let api = locator.resolve(&settings, Setting::ApiImplementation).unwrap();
    let (from_environment, warnings) = count_events(Level::WARN, || {
        locator.resolve(&settings, Setting::Environment).unwrap()
    });

    assert!(Arc::ptr_eq(&api, &from_environment));
    assert_eq!(warnings, 1);
}

#[test]
fn test_canonical_resolution_does_not_warn() {
    let locator = ComponentLocator::discover();
    let (_, warnings) = count_events(Level::WARN, || {
        locator
            .resolve(&Settings::default(), Setting::DatabaseImplementation)
            .unwrap()
    });
    assert_eq!(warnings, 0);
}

#[test]
fn test_every_resolution_logs_info() {
    let locator = ComponentLocator::discover();
    let settings = Settings::default();
    let (_, infos) = count_events(Level::INFO, || {
        locator.resolve(&settings, Setting::ApiImplementation).unwrap();
        locator.resolve(&settings, Setting::ApiImplementation).unwrap();
    });
    assert_eq!(infos, 2);
}

#[test]
fn test_unset_option_is_required_setting_missing() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let locator = ComponentLocator::new(counting_registry(constructed.clone()));
    let settings = Settings::default();

    match locator.resolve(&settings, Setting::ClickhouseHost) {
        Err(Error::RequiredSettingMissing { setting, source }) => {
            assert_eq!(setting, "clickhouse_host");
            assert!(matches!(*source, Error::MissingValue { .. }));
        }
        other => panic!("Expected RequiredSettingMissing, got {other:?}"),
    }
    assert_eq!(constructed.load(Ordering::SeqCst), 0);
    assert!(locator.is_empty());
}

#[test]
fn test_empty_identifier_is_required_setting_missing() {
    let locator = ComponentLocator::discover();
    let err = locator
        .resolve(&settings_with_database(""), Setting::DatabaseImplementation)
        .unwrap_err();
    assert!(matches!(err, Error::RequiredSettingMissing { .. }));
    assert!(err.is_missing_value());
    assert!(locator.is_empty());
}

#[test]
fn test_identifier_without_separator_is_unresolved() {
    let locator = ComponentLocator::discover();
    let err = locator
        .resolve(&settings_with_database("NoSeparator"), Setting::DatabaseImplementation)
        .unwrap_err();
    match err {
        Error::UnresolvedIdentifier { identifier, .. } => assert_eq!(identifier, "NoSeparator"),
        other => panic!("Expected UnresolvedIdentifier, got {other:?}"),
    }
}

#[test]
fn test_nonexistent_type_leaves_cache_unchanged() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let locator = ComponentLocator::new(counting_registry(constructed.clone()));
    locator
        .resolve(&settings_with_database("tests.probes.Counted"), Setting::DatabaseImplementation)
        .unwrap();
    let before = locator.cached_identifiers();

    for missing in ["tests.probes.Missing", "tests.elsewhere.Counted"] {
        let err = locator
            .resolve(&settings_with_database(missing), Setting::DatabaseImplementation)
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedIdentifier { .. }), "{missing}: {err:?}");
        assert!(locator.cached(missing).is_none());
    }

    assert_eq!(locator.cached_identifiers(), before);
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_construction_failure_is_wrapped_and_not_cached() {
    let locator = ComponentLocator::new(counting_registry(Arc::new(AtomicUsize::new(0))));
    let settings = settings_with_database("tests.probes.Broken");

    for _ in 0..2 {
        match locator.resolve(&settings, Setting::DatabaseImplementation) {
            Err(Error::ConstructionFailure { identifier, source }) => {
                assert_eq!(identifier, "tests.probes.Broken");
                assert!(matches!(*source, Error::InvalidArgument { .. }));
            }
            other => panic!("Expected ConstructionFailure, got {other:?}"),
        }
    }
    assert!(locator.cached("tests.probes.Broken").is_none());
    assert!(locator.is_empty());
}

#[test]
fn test_builtin_construction_failure_surfaces_missing_setting() {
    let locator = ComponentLocator::discover();
    let settings = settings_with_database("clickhouse");

    let err = locator
        .resolve(&settings, Setting::DatabaseImplementation)
        .unwrap_err();
    assert!(matches!(err, Error::ConstructionFailure { .. }));
    assert!(err.is_missing_value());
}

#[test]
fn test_resolve_as_downcasts() {
    let locator = ComponentLocator::discover();
    let settings = Settings {
        environment: "staging".to_string(),
        ..Default::default()
    };

    let api = locator
        .resolve_as::<LocalApi>(&settings, Setting::ApiImplementation)
        .unwrap();
    assert_eq!(api.environment(), "staging");
}

#[test]
fn test_resolve_as_type_mismatch() {
    let locator = ComponentLocator::discover();
    match locator.resolve_as::<DuckDb>(&Settings::default(), Setting::ApiImplementation) {
        Err(Error::ComponentTypeMismatch { identifier, expected }) => {
            assert_eq!(identifier, LOCAL_API_IMPLEMENTATION);
            assert!(expected.ends_with("DuckDb"));
        }
        other => panic!("Expected ComponentTypeMismatch, got {other:?}"),
    }
    assert!(locator.cached(LOCAL_API_IMPLEMENTATION).is_some());
}

#[test]
fn test_resolve_by_name() {
    let locator = ComponentLocator::discover();
    let settings = Settings::default();

    let component = locator
        .resolve_by_name(&settings, "database_implementation")
        .unwrap();
    assert_eq!(component.component_name(), "duckdb");

    let err = locator.resolve_by_name(&settings, "no_such_option").unwrap_err();
    assert!(matches!(err, Error::UnknownSetting { .. }));
}
