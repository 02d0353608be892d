//! Domain Port Interfaces

/// Component port implemented by every pluggable implementation
pub mod component;

pub use component::Component;
