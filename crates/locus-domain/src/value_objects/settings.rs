//! Settings Value Objects
//!
//! The typed configuration record read by the component locator and by the
//! components it constructs. Values are populated once by a loader and are
//! read-only afterwards.
//!
//! ## Reading values
//!
//! | Method | Unset value | Legacy alias |
//! |--------|-------------|--------------|
//! | [`Settings::raw`] | returned as [`SettingValue::Unset`] | kept as stored |
//! | [`Settings::get`] | returned as [`SettingValue::Unset`] | rewritten, warning logged |
//! | [`Settings::validate`] | [`Error::MissingValue`] | rewritten, warning logged |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    DEFAULT_PERSIST_DIRECTORY, DUCKDB_IMPLEMENTATION, EMBEDDED_DUCKDB_IMPLEMENTATION,
    LOCAL_API_IMPLEMENTATION, LOCAL_SEGMENT_MANAGER_IMPLEMENTATION,
    POSTHOG_TELEMETRY_IMPLEMENTATION,
};
use crate::error::{Error, Result};
use crate::value_objects::alias::resolve_alias;

/// Settings that may be reported through telemetry
pub const TELEMETRY_WHITELISTED_SETTINGS: &[Setting] = &[
    Setting::DatabaseImplementation,
    Setting::ApiImplementation,
    Setting::ServerSslEnabled,
];

/// What to do with schema migrations at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationsPolicy {
    /// Never touch migrations
    None,
    /// Check that applied migrations match, fail otherwise
    Validate,
    /// Apply pending migrations
    #[default]
    Apply,
}

impl MigrationsPolicy {
    /// Lowercase name as used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Validate => "validate",
            Self::Apply => "apply",
        }
    }
}

impl fmt::Display for MigrationsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MigrationsPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "validate" => Ok(Self::Validate),
            "apply" => Ok(Self::Apply),
            _ => Err(Error::invalid_argument(format!(
                "Invalid migrations policy: {s}. Use none, validate, or apply"
            ))),
        }
    }
}

/// Semantic type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Plain string with a non-empty or empty default
    Text,
    /// Implementation identifier selecting an extension point
    Identifier,
    /// String that may be unset
    OptionalText,
    /// Boolean flag
    Flag,
    /// Closed enumeration
    Choice,
}

/// Name of one option in [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    /// Deployment environment label
    Environment,
    /// Database backend
    DatabaseImplementation,
    /// API implementation
    ApiImplementation,
    /// Telemetry backend
    TelemetryImplementation,
    /// Ingest backend
    IngestImplementation,
    /// Segment manager
    SegmentManager,
    /// System database backend
    SystemDatabaseImplementation,
    /// Allow the API to wipe all data
    EnableSystemReset,
    /// Migration handling at startup
    MigrationsPolicy,
    /// Clickhouse host
    ClickhouseHost,
    /// Clickhouse port
    ClickhousePort,
    /// Pulsar host
    PulsarHost,
    /// Pulsar port
    PulsarPort,
    /// DuckDB database file
    DuckdbDatabase,
    /// Directory for persisted data
    PersistDirectory,
    /// Remote server host
    ServerHost,
    /// Remote server HTTP port
    ServerHttpPort,
    /// Use TLS when talking to the remote server
    ServerSslEnabled,
    /// Remote server gRPC port
    ServerGrpcPort,
    /// Send anonymized usage telemetry
    AnonymizedTelemetry,
}

impl Setting {
    /// Every option, in declaration order
    pub const ALL: [Setting; 20] = [
        Setting::Environment,
        Setting::DatabaseImplementation,
        Setting::ApiImplementation,
        Setting::TelemetryImplementation,
        Setting::IngestImplementation,
        Setting::SegmentManager,
        Setting::SystemDatabaseImplementation,
        Setting::EnableSystemReset,
        Setting::MigrationsPolicy,
        Setting::ClickhouseHost,
        Setting::ClickhousePort,
        Setting::PulsarHost,
        Setting::PulsarPort,
        Setting::DuckdbDatabase,
        Setting::PersistDirectory,
        Setting::ServerHost,
        Setting::ServerHttpPort,
        Setting::ServerSslEnabled,
        Setting::ServerGrpcPort,
        Setting::AnonymizedTelemetry,
    ];

    /// Configuration key of the option
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::DatabaseImplementation => "database_implementation",
            Self::ApiImplementation => "api_implementation",
            Self::TelemetryImplementation => "telemetry_implementation",
            Self::IngestImplementation => "ingest_implementation",
            Self::SegmentManager => "segment_manager",
            Self::SystemDatabaseImplementation => "system_database_implementation",
            Self::EnableSystemReset => "enable_system_reset",
            Self::MigrationsPolicy => "migrations_policy",
            Self::ClickhouseHost => "clickhouse_host",
            Self::ClickhousePort => "clickhouse_port",
            Self::PulsarHost => "pulsar_host",
            Self::PulsarPort => "pulsar_port",
            Self::DuckdbDatabase => "duckdb_database",
            Self::PersistDirectory => "persist_directory",
            Self::ServerHost => "server_host",
            Self::ServerHttpPort => "server_http_port",
            Self::ServerSslEnabled => "server_ssl_enabled",
            Self::ServerGrpcPort => "server_grpc_port",
            Self::AnonymizedTelemetry => "anonymized_telemetry",
        }
    }

    /// Semantic type of the option
    pub fn kind(self) -> SettingKind {
        match self {
            Self::Environment | Self::PersistDirectory => SettingKind::Text,
            Self::DatabaseImplementation
            | Self::ApiImplementation
            | Self::TelemetryImplementation
            | Self::IngestImplementation
            | Self::SegmentManager
            | Self::SystemDatabaseImplementation => SettingKind::Identifier,
            Self::ClickhouseHost
            | Self::ClickhousePort
            | Self::PulsarHost
            | Self::PulsarPort
            | Self::DuckdbDatabase
            | Self::ServerHost
            | Self::ServerHttpPort
            | Self::ServerGrpcPort => SettingKind::OptionalText,
            Self::EnableSystemReset | Self::ServerSslEnabled | Self::AnonymizedTelemetry => {
                SettingKind::Flag
            }
            Self::MigrationsPolicy => SettingKind::Choice,
        }
    }

    /// Whether the option selects an implementation
    pub fn is_extension_point(self) -> bool {
        self.kind() == SettingKind::Identifier
    }

    /// Options that select implementations
    pub fn extension_points() -> impl Iterator<Item = Setting> {
        Self::ALL.into_iter().filter(|s| s.is_extension_point())
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Setting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_setting(s))
    }
}

/// Value of one option as read from [`Settings`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Textual value (possibly empty)
    Text(String),
    /// Optional option with no value
    Unset,
    /// Boolean option
    Flag(bool),
    /// Migrations policy option
    Migrations(MigrationsPolicy),
}

impl SettingValue {
    /// True for [`SettingValue::Unset`]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Borrow the text of a textual value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Unset => Ok(()),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Migrations(policy) => write!(f, "{policy}"),
        }
    }
}

/// Typed configuration record
///
/// Every option has a default; optional options default to unset (`None`),
/// which is distinct from an empty string.
///
/// ## Example
///
/// ```rust
/// use locus_domain::value_objects::{Setting, SettingValue, Settings};
///
/// let settings = Settings {
///     database_implementation: "duckdb".to_string(),
///     ..Default::default()
/// };
///
/// // Stored value is untouched, reads see the canonical identifier.
/// assert_eq!(settings.database_implementation, "duckdb");
/// assert_eq!(
///     settings.get(Setting::DatabaseImplementation),
///     SettingValue::Text("chromadb.db.duckdb.DuckDB".to_string())
/// );
/// assert!(settings.validate(Setting::ClickhouseHost).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deployment environment label
    #[serde(deserialize_with = "lenient::text")]
    pub environment: String,
    /// Database backend
    #[serde(deserialize_with = "lenient::text")]
    pub database_implementation: String,
    /// API implementation
    #[serde(deserialize_with = "lenient::text")]
    pub api_implementation: String,
    /// Telemetry backend
    #[serde(deserialize_with = "lenient::text")]
    pub telemetry_implementation: String,
    /// Ingest backend
    #[serde(deserialize_with = "lenient::text")]
    pub ingest_implementation: String,
    /// Segment manager
    #[serde(deserialize_with = "lenient::text")]
    pub segment_manager: String,
    /// System database backend
    #[serde(deserialize_with = "lenient::text")]
    pub system_database_implementation: String,
    /// Allow the API to wipe all data
    pub enable_system_reset: bool,
    /// Migration handling at startup
    pub migrations_policy: MigrationsPolicy,
    /// Clickhouse host
    #[serde(deserialize_with = "lenient::optional_text")]
    pub clickhouse_host: Option<String>,
    /// Clickhouse port
    #[serde(deserialize_with = "lenient::optional_text")]
    pub clickhouse_port: Option<String>,
    /// Pulsar host
    #[serde(deserialize_with = "lenient::optional_text")]
    pub pulsar_host: Option<String>,
    /// Pulsar port
    #[serde(deserialize_with = "lenient::optional_text")]
    pub pulsar_port: Option<String>,
    /// DuckDB database file
    #[serde(deserialize_with = "lenient::optional_text")]
    pub duckdb_database: Option<String>,
    /// Directory for persisted data
    #[serde(deserialize_with = "lenient::text")]
    pub persist_directory: String,
    /// Remote server host
    #[serde(deserialize_with = "lenient::optional_text")]
    pub server_host: Option<String>,
    /// Remote server HTTP port
    #[serde(deserialize_with = "lenient::optional_text")]
    pub server_http_port: Option<String>,
    /// Use TLS when talking to the remote server
    pub server_ssl_enabled: bool,
    /// Remote server gRPC port
    #[serde(deserialize_with = "lenient::optional_text")]
    pub server_grpc_port: Option<String>,
    /// Send anonymized usage telemetry
    pub anonymized_telemetry: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: String::new(),
            database_implementation: DUCKDB_IMPLEMENTATION.to_string(),
            api_implementation: LOCAL_API_IMPLEMENTATION.to_string(),
            telemetry_implementation: POSTHOG_TELEMETRY_IMPLEMENTATION.to_string(),
            ingest_implementation: EMBEDDED_DUCKDB_IMPLEMENTATION.to_string(),
            segment_manager: LOCAL_SEGMENT_MANAGER_IMPLEMENTATION.to_string(),
            system_database_implementation: EMBEDDED_DUCKDB_IMPLEMENTATION.to_string(),
            enable_system_reset: false,
            migrations_policy: MigrationsPolicy::Apply,
            clickhouse_host: None,
            clickhouse_port: None,
            pulsar_host: None,
            pulsar_port: None,
            duckdb_database: None,
            persist_directory: DEFAULT_PERSIST_DIRECTORY.to_string(),
            server_host: None,
            server_http_port: None,
            server_ssl_enabled: false,
            server_grpc_port: None,
            anonymized_telemetry: true,
        }
    }
}

impl Settings {
    /// Stored value of an option, without alias rewriting
    pub fn raw(&self, setting: Setting) -> SettingValue {
        fn text(value: &str) -> SettingValue {
            SettingValue::Text(value.to_string())
        }
        fn optional(value: Option<&str>) -> SettingValue {
            value.map_or(SettingValue::Unset, text)
        }

        match setting {
            Setting::Environment => text(&self.environment),
            Setting::DatabaseImplementation => text(&self.database_implementation),
            Setting::ApiImplementation => text(&self.api_implementation),
            Setting::TelemetryImplementation => text(&self.telemetry_implementation),
            Setting::IngestImplementation => text(&self.ingest_implementation),
            Setting::SegmentManager => text(&self.segment_manager),
            Setting::SystemDatabaseImplementation => text(&self.system_database_implementation),
            Setting::EnableSystemReset => SettingValue::Flag(self.enable_system_reset),
            Setting::MigrationsPolicy => SettingValue::Migrations(self.migrations_policy),
            Setting::ClickhouseHost => optional(self.clickhouse_host.as_deref()),
            Setting::ClickhousePort => optional(self.clickhouse_port.as_deref()),
            Setting::PulsarHost => optional(self.pulsar_host.as_deref()),
            Setting::PulsarPort => optional(self.pulsar_port.as_deref()),
            Setting::DuckdbDatabase => optional(self.duckdb_database.as_deref()),
            Setting::PersistDirectory => text(&self.persist_directory),
            Setting::ServerHost => optional(self.server_host.as_deref()),
            Setting::ServerHttpPort => optional(self.server_http_port.as_deref()),
            Setting::ServerSslEnabled => SettingValue::Flag(self.server_ssl_enabled),
            Setting::ServerGrpcPort => optional(self.server_grpc_port.as_deref()),
            Setting::AnonymizedTelemetry => SettingValue::Flag(self.anonymized_telemetry),
        }
    }

    /// Value of an option with legacy identifiers rewritten
    ///
    /// Any textual value matching the alias table is rewritten, whatever the
    /// option. Unset values are returned unchanged. A rewrite logs a
    /// deprecation warning; the stored value is left as is.
    pub fn get(&self, setting: Setting) -> SettingValue {
        match self.raw(setting) {
            SettingValue::Text(old) => match resolve_alias(&old) {
                Some(new) => {
                    warn!(
                        setting = %setting,
                        old = %old,
                        new = new,
                        "Setting '{old}' for '{setting}' is deprecated, use '{new}' instead"
                    );
                    SettingValue::Text(new.to_string())
                }
                None => SettingValue::Text(old),
            },
            other => other,
        }
    }

    /// Value of a required option
    ///
    /// Fails with [`Error::MissingValue`] when the option is unset.
    pub fn validate(&self, setting: Setting) -> Result<SettingValue> {
        match self.get(setting) {
            SettingValue::Unset => Err(Error::missing_value(setting.as_str())),
            value => Ok(value),
        }
    }

    /// Text of a required textual option
    pub fn validate_text(&self, setting: Setting) -> Result<String> {
        match self.validate(setting)? {
            SettingValue::Text(text) => Ok(text),
            other => Err(Error::invalid_argument(format!(
                "Setting '{setting}' is not textual (found '{other}')"
            ))),
        }
    }

    /// [`Settings::get`] by configuration key
    pub fn get_by_name(&self, name: &str) -> Result<SettingValue> {
        Ok(self.get(name.parse()?))
    }

    /// Telemetry-safe view of the settings
    pub fn telemetry_context(&self) -> BTreeMap<&'static str, String> {
        TELEMETRY_WHITELISTED_SETTINGS
            .iter()
            .map(|setting| (setting.as_str(), self.get(*setting).to_string()))
            .collect()
    }
}

/// Deserializers accepting scalars where text is expected
///
/// Environment-sourced values such as `8123` arrive as numbers.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    impl From<Scalar> for String {
        fn from(value: Scalar) -> Self {
            match value {
                Scalar::Text(text) => text,
                Scalar::Unsigned(n) => n.to_string(),
                Scalar::Signed(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Scalar::deserialize(deserializer).map(String::from)
    }

    pub(super) fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
    }
}
