//! # Infrastructure Layer
//!
//! Runtime side of Locus: configuration loading, logging and component
//! resolution.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration from TOML and `LOCUS_*` variables |
//! | [`constants`] | File names, env prefixes and log defaults |
//! | [`di`] | Component locator and application context |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`logging`] | Structured logging with tracing |

// Built-in components register through linkme and must be linked in
extern crate locus_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use di::{AppContext, ComponentLocator, init_app};
pub use error_ext::ErrorContext;
