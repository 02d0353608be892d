//! Database components

#[cfg(feature = "db-duckdb")]
pub mod duckdb;

#[cfg(feature = "db-clickhouse")]
pub mod clickhouse;

#[cfg(feature = "db-duckdb")]
pub use duckdb::{DuckDb, DuckDbStorage};

#[cfg(feature = "db-clickhouse")]
pub use clickhouse::Clickhouse;
