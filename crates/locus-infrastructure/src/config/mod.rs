//! Configuration management
//!
//! Application configuration types and the figment-based loader that
//! populates them from defaults, a TOML file and the environment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
