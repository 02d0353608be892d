//! Component Registry System
//!
//! Defines the registration infrastructure for pluggable components.
//! Uses the `linkme` crate for link-time registration of components that
//! are looked up by implementation identifier at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Component Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Component defines: #[linkme::distributed_slice(COMPONENTS)] │
//! │                        static ENTRY: ComponentEntry = ...       │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static COMPONENTS: [Entry] = [..]    │
//! │                              ↓                                  │
//! │  3. Startup builds:    ComponentRegistry::discover()            │
//! │                              ↓                                  │
//! │  4. Settings select:   "chromadb.db.duckdb.DuckDB" → DuckDb     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Component (in locus-providers)
//!
//! ```ignore
//! use locus_application::ports::registry::{ComponentEntry, COMPONENTS};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static DUCKDB: ComponentEntry = ComponentEntry {
//!     identifier: "chromadb.db.duckdb.DuckDB",
//!     description: "In-memory DuckDB database",
//!     factory: |settings| Ok(Arc::new(DuckDb::in_memory(settings)?)),
//! };
//! ```
//!
//! ### Looking up a Component (in locus-infrastructure)
//!
//! ```ignore
//! let registry = ComponentRegistry::discover();
//! let id = ImplementationIdentifier::parse("chromadb.db.duckdb.DuckDB")?;
//! let component = registry.lookup(&id)?.construct(&settings)?;
//! ```

pub mod component;

pub use component::{
    COMPONENTS, ComponentEntry, ComponentFactory, ComponentRegistry, RegisteredComponent,
    list_components,
};
