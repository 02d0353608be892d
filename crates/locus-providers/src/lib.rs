//! # Locus - Built-in Components
//!
//! Components registered under the canonical default identifiers. Each one
//! implements the [`Component`] port and registers itself in the
//! `COMPONENTS` slice of `locus-application`, so linking this crate is
//! enough to make them resolvable.
//!
//! ## Components
//!
//! | Identifier | Type |
//! |------------|------|
//! | `chromadb.db.duckdb.DuckDB` | [`db::DuckDb`] (in memory) |
//! | `chromadb.db.duckdb.PersistentDuckDB` | [`db::DuckDb`] (persistent) |
//! | `chromadb.db.impls.duckdb.DuckDB` | [`db::DuckDb`] (embedded) |
//! | `chromadb.db.clickhouse.Clickhouse` | [`db::Clickhouse`] |
//! | `chromadb.api.local.LocalAPI` | [`api::LocalApi`] |
//! | `chromadb.api.fastapi.FastAPI` | [`api::FastApi`] |
//! | `chromadb.telemetry.posthog.Posthog` | [`telemetry::Posthog`] |
//! | `chromadb.segment.manager.local.LocalSegmentManager` | [`segment::LocalSegmentManager`] |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! locus-providers = { version = "0.1", default-features = false, features = ["db-duckdb", "api-local"] }
//! ```

pub use locus_domain::error::{Error, Result};
pub use locus_domain::ports::Component;

/// Shared helpers for reading settings
pub(crate) mod utils;

/// Database components
pub mod db;

/// API components
pub mod api;

/// Telemetry components
pub mod telemetry;

/// Segment manager components
pub mod segment;
