//! Construction tests for built-in components

use locus_domain::{Error, Settings};
use locus_providers::api::{FastApi, LocalApi};
use locus_providers::db::{Clickhouse, DuckDb, DuckDbStorage};
use locus_providers::segment::LocalSegmentManager;
use locus_providers::telemetry::Posthog;
use tempfile::TempDir;

#[test]
fn test_clickhouse_requires_host() {
    let settings = Settings {
        clickhouse_port: Some("8123".to_string()),
        ..Default::default()
    };
    match Clickhouse::from_settings(&settings) {
        Err(Error::MissingValue { setting }) => assert_eq!(setting, "clickhouse_host"),
        other => panic!("Expected MissingValue, got {other:?}"),
    }
}

#[test]
fn test_clickhouse_rejects_non_numeric_port() {
    let settings = Settings {
        clickhouse_host: Some("localhost".to_string()),
        clickhouse_port: Some("http".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        Clickhouse::from_settings(&settings),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_clickhouse_endpoint() {
    let settings = Settings {
        clickhouse_host: Some("db.internal".to_string()),
        clickhouse_port: Some(" 8123 ".to_string()),
        ..Default::default()
    };
    let clickhouse = Clickhouse::from_settings(&settings).unwrap();
    assert_eq!(clickhouse.port(), 8123);
    assert_eq!(clickhouse.endpoint(), "http://db.internal:8123");
}

#[test]
fn test_fastapi_url_uses_ssl_flag() {
    let mut settings = Settings {
        server_host: Some("api.example.com".to_string()),
        server_http_port: Some("8000".to_string()),
        ..Default::default()
    };
    assert_eq!(
        FastApi::from_settings(&settings).unwrap().base_url(),
        "http://api.example.com:8000/api/v1"
    );

    settings.server_ssl_enabled = true;
    assert_eq!(
        FastApi::from_settings(&settings).unwrap().base_url(),
        "https://api.example.com:8000/api/v1"
    );
}

#[test]
fn test_fastapi_requires_port() {
    let settings = Settings {
        server_host: Some("api.example.com".to_string()),
        ..Default::default()
    };
    assert!(Error::is_missing_value(
        &FastApi::from_settings(&settings).unwrap_err()
    ));
}

#[test]
fn test_local_api_reset_policy() {
    let api = LocalApi::from_settings(&Settings::default()).unwrap();
    assert!(api.ensure_reset_allowed().is_err());

    let settings = Settings {
        enable_system_reset: true,
        environment: "test".to_string(),
        ..Default::default()
    };
    let api = LocalApi::from_settings(&settings).unwrap();
    assert!(api.ensure_reset_allowed().is_ok());
    assert_eq!(api.environment(), "test");
}

#[test]
fn test_persistent_duckdb_uses_persist_directory() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        persist_directory: dir.path().display().to_string(),
        duckdb_database: Some("chroma.db".to_string()),
        ..Default::default()
    };
    let db = DuckDb::persistent(&settings).unwrap();
    assert_eq!(
        db.storage(),
        &DuckDbStorage::Persistent {
            directory: dir.path().to_path_buf()
        }
    );
    assert_eq!(db.database(), Some("chroma.db"));
}

#[test]
fn test_posthog_disabled_reports_nothing() {
    let settings = Settings {
        anonymized_telemetry: false,
        ..Default::default()
    };
    let posthog = Posthog::from_settings(&settings).unwrap();
    assert!(!posthog.is_enabled());
    assert_eq!(posthog.event_properties("startup"), None);
}

#[test]
fn test_posthog_event_carries_whitelisted_settings() {
    let posthog = Posthog::from_settings(&Settings::default()).unwrap();
    let properties = posthog.event_properties("startup").unwrap();
    assert_eq!(properties["event"], "startup");
    assert!(properties.contains_key("database_implementation"));
    assert!(!properties.contains_key("persist_directory"));
}

#[test]
fn test_segment_paths() {
    let manager = LocalSegmentManager::from_settings(&Settings::default()).unwrap();
    assert_eq!(
        manager.segment_path("docs_v2").unwrap(),
        manager.root().join("docs_v2")
    );
    assert!(manager.segment_path("../escape").is_err());
    assert!(manager.segment_path("").is_err());
}
