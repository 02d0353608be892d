//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "locus.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "locus";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LOCUS";

/// Environment variable prefix segment routed to the logging section
pub const LOGGING_ENV_SEGMENT: &str = "LOG";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "LOCUS_LOG";

/// Log file stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "locus";
