//! Domain layer constants
//!
//! Canonical implementation identifiers and settings defaults. Infrastructure
//! constants (file names, env prefixes) live in `locus-infrastructure`.

// ============================================================================
// CANONICAL IMPLEMENTATION IDENTIFIERS
// ============================================================================

/// In-memory DuckDB database
pub const DUCKDB_IMPLEMENTATION: &str = "chromadb.db.duckdb.DuckDB";

/// DuckDB database persisted to the persist directory
pub const PERSISTENT_DUCKDB_IMPLEMENTATION: &str = "chromadb.db.duckdb.PersistentDuckDB";

/// Embedded DuckDB used for ingest and the system database
pub const EMBEDDED_DUCKDB_IMPLEMENTATION: &str = "chromadb.db.impls.duckdb.DuckDB";

/// Clickhouse database
pub const CLICKHOUSE_IMPLEMENTATION: &str = "chromadb.db.clickhouse.Clickhouse";

/// In-process API
pub const LOCAL_API_IMPLEMENTATION: &str = "chromadb.api.local.LocalAPI";

/// REST client API
pub const FASTAPI_IMPLEMENTATION: &str = "chromadb.api.fastapi.FastAPI";

/// Posthog telemetry client
pub const POSTHOG_TELEMETRY_IMPLEMENTATION: &str = "chromadb.telemetry.posthog.Posthog";

/// Local segment manager
pub const LOCAL_SEGMENT_MANAGER_IMPLEMENTATION: &str =
    "chromadb.segment.manager.local.LocalSegmentManager";

// ============================================================================
// SETTINGS DEFAULTS
// ============================================================================

/// Default directory for persisted data
pub const DEFAULT_PERSIST_DIRECTORY: &str = ".chroma";

/// Separator between the location and the type name of an identifier
pub const IDENTIFIER_SEPARATOR: char = '.';
