//! Application Ports

/// Component registration
pub mod registry;
