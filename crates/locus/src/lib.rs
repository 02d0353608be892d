//! # Locus
//!
//! Configuration-driven component locator. Settings name the concrete
//! implementation behind each extension point; the locator turns those names
//! into shared instances, one per identifier.
//!
//! ## Example
//!
//! ```ignore
//! use locus::domain::Setting;
//! use locus::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let db = context.resolve(Setting::DatabaseImplementation)?;
//! println!("database: {}", db.component_name());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - settings, identifiers, the component port and errors
//! - `application` - the link-time component registration table
//! - `providers` - built-in components
//! - `infrastructure` - locator, application context, config and logging
//! - `cli` - the `locus` command line

// Force-link locus-providers so linkme registrations are included
extern crate locus_providers;

pub mod cli;

/// Domain layer - settings, identifiers and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use locus_domain::*;
}

/// Application layer - component registration table
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use locus_application::*;
}

/// Built-in components
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use locus_providers::*;
}

/// Infrastructure layer - locator, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use locus_infrastructure::*;
}

pub use locus_domain::{Component, Error, Result, Setting, SettingValue, Settings};
pub use locus_infrastructure::{AppConfig, AppContext, ComponentLocator, ConfigLoader, init_app};
