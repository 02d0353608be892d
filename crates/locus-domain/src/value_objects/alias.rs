//! Legacy identifier aliases
//!
//! Older configurations select implementations with short names such as
//! `duckdb` or `rest`. They are rewritten to canonical identifiers when a
//! value is read, never when it is stored.

use crate::constants::{
    CLICKHOUSE_IMPLEMENTATION, DUCKDB_IMPLEMENTATION, FASTAPI_IMPLEMENTATION,
    LOCAL_API_IMPLEMENTATION, PERSISTENT_DUCKDB_IMPLEMENTATION,
};

/// Legacy short identifier → canonical identifier
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("duckdb", DUCKDB_IMPLEMENTATION),
    ("duckdb+parquet", PERSISTENT_DUCKDB_IMPLEMENTATION),
    ("clickhouse", CLICKHOUSE_IMPLEMENTATION),
    ("rest", FASTAPI_IMPLEMENTATION),
    ("local", LOCAL_API_IMPLEMENTATION),
];

/// Canonical identifier for a legacy value, if `raw` is one
pub fn resolve_alias(raw: &str) -> Option<&'static str> {
    LEGACY_ALIASES
        .iter()
        .find(|(legacy, _)| *legacy == raw)
        .map(|(_, canonical)| *canonical)
}

/// Rewrite `raw` to its canonical form; non-aliased values pass through
pub fn canonicalize(raw: &str) -> &str {
    resolve_alias(raw).unwrap_or(raw)
}
