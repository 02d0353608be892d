//! # Locus Domain
//!
//! Core types of the component locator: the typed [`Settings`] record and
//! its validation contract, legacy alias rewriting, implementation
//! identifiers, the [`Component`] port and the domain [`Error`].

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::Component;
pub use value_objects::{ImplementationIdentifier, Setting, SettingValue, Settings};
