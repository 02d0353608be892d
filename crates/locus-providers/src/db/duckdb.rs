//! DuckDB database component
//!
//! One type backs three identifiers: the in-memory database, the persistent
//! database stored under `persist_directory`, and the embedded database used
//! for ingest and the system catalog. Each identifier is its own singleton.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::{
    DUCKDB_IMPLEMENTATION, EMBEDDED_DUCKDB_IMPLEMENTATION, PERSISTENT_DUCKDB_IMPLEMENTATION,
};
use locus_domain::error::{Error, Result};
use locus_domain::ports::Component;
use locus_domain::value_objects::{MigrationsPolicy, Setting, Settings};
use tracing::debug;

/// Where a DuckDB database keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuckDbStorage {
    /// Nothing survives the process
    InMemory,
    /// Data is persisted to a directory
    Persistent {
        /// Directory holding the database files
        directory: PathBuf,
    },
}

/// DuckDB database component
#[derive(Debug)]
pub struct DuckDb {
    storage: DuckDbStorage,
    database: Option<String>,
    migrations: MigrationsPolicy,
}

impl DuckDb {
    /// In-memory database
    pub fn in_memory(settings: &Settings) -> Result<Self> {
        Ok(Self {
            storage: DuckDbStorage::InMemory,
            database: settings.duckdb_database.clone(),
            migrations: settings.migrations_policy,
        })
    }

    /// Database persisted under `persist_directory`
    pub fn persistent(settings: &Settings) -> Result<Self> {
        let directory = settings.validate_text(Setting::PersistDirectory)?;
        if directory.trim().is_empty() {
            return Err(Error::invalid_argument(
                "persist_directory must not be empty for a persistent database",
            ));
        }
        debug!(directory = %directory, "Using persistent DuckDB");
        Ok(Self {
            storage: DuckDbStorage::Persistent {
                directory: PathBuf::from(directory),
            },
            database: settings.duckdb_database.clone(),
            migrations: settings.migrations_policy,
        })
    }

    /// Storage mode
    pub fn storage(&self) -> &DuckDbStorage {
        &self.storage
    }

    /// Persist directory, for persistent databases
    pub fn persist_directory(&self) -> Option<&Path> {
        match &self.storage {
            DuckDbStorage::InMemory => None,
            DuckDbStorage::Persistent { directory } => Some(directory),
        }
    }

    /// Configured database file name
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Migration handling at startup
    pub fn migrations(&self) -> MigrationsPolicy {
        self.migrations
    }
}

impl Component for DuckDb {
    fn component_name(&self) -> &str {
        match self.storage {
            DuckDbStorage::InMemory => "duckdb",
            DuckDbStorage::Persistent { .. } => "duckdb+parquet",
        }
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static DUCKDB_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: DUCKDB_IMPLEMENTATION,
    description: "In-memory DuckDB database",
    factory: |settings: &Settings| Ok(Arc::new(DuckDb::in_memory(settings)?)),
};

#[linkme::distributed_slice(COMPONENTS)]
static PERSISTENT_DUCKDB_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: PERSISTENT_DUCKDB_IMPLEMENTATION,
    description: "DuckDB database persisted to the persist directory",
    factory: |settings: &Settings| Ok(Arc::new(DuckDb::persistent(settings)?)),
};

#[linkme::distributed_slice(COMPONENTS)]
static EMBEDDED_DUCKDB_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: EMBEDDED_DUCKDB_IMPLEMENTATION,
    description: "Embedded DuckDB for ingest and the system database",
    factory: |settings: &Settings| Ok(Arc::new(DuckDb::in_memory(settings)?)),
};
