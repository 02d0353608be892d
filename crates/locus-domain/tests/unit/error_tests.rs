//! Unit tests for domain error types

use std::error::Error as _;

use locus_domain::Error;

#[test]
fn test_missing_value_error() {
    let error = Error::missing_value("clickhouse_host");
    assert_eq!(
        error.to_string(),
        "Missing required config value 'clickhouse_host'"
    );
    assert!(error.is_missing_value());
}

#[test]
fn test_required_setting_missing_wraps_source() {
    let error = Error::required_setting_missing(
        "database_implementation",
        Error::missing_value("database_implementation"),
    );
    match &error {
        Error::RequiredSettingMissing { setting, .. } => {
            assert_eq!(setting, "database_implementation")
        }
        _ => panic!("Expected RequiredSettingMissing error"),
    }
    assert!(error.is_missing_value());
    assert!(error.source().is_some());
}

#[test]
fn test_construction_failure_display() {
    let error = Error::construction_failure(
        "chromadb.db.clickhouse.Clickhouse",
        Error::invalid_argument("bad port"),
    );
    let display = error.to_string();
    assert!(display.contains("chromadb.db.clickhouse.Clickhouse"));
    assert!(display.contains("bad port"));
    assert!(!error.is_missing_value());
}

#[test]
fn test_unresolved_identifier_error() {
    let error = Error::unresolved("duckdb", "no separator");
    match error {
        Error::UnresolvedIdentifier { identifier, reason } => {
            assert_eq!(identifier, "duckdb");
            assert_eq!(reason, "no separator");
        }
        _ => panic!("Expected UnresolvedIdentifier error"),
    }
}

#[test]
fn test_configuration_error_display() {
    let error = Error::configuration("Invalid log level: loud");
    assert_eq!(error.to_string(), "Configuration error: Invalid log level: loud");
    assert!(error.source().is_none());
    assert!(!error.is_missing_value());
}
