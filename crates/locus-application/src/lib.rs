//! # Locus Application Layer
//!
//! Holds the component registration table that maps implementation
//! identifiers to factories. Implementations contribute entries at link time
//! through the [`ports::registry::COMPONENTS`] slice; tests and embedders can
//! also register factories explicitly.

/// Port definitions owned by the application layer
pub mod ports;

pub use ports::registry::{ComponentEntry, ComponentRegistry, COMPONENTS};
