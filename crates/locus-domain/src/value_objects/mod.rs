//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Settings`] | Typed configuration record with validated reads |
//! | [`Setting`] | Name of one option |
//! | [`SettingValue`] | Value of one option |
//! | [`ImplementationIdentifier`] | `location.TypeName` reference to a component |

/// Legacy identifier aliases
pub mod alias;
/// Implementation identifiers
pub mod identifier;
/// Settings record and option names
pub mod settings;

pub use alias::{LEGACY_ALIASES, canonicalize, resolve_alias};
pub use identifier::ImplementationIdentifier;
pub use settings::{
    MigrationsPolicy, Setting, SettingKind, SettingValue, Settings,
    TELEMETRY_WHITELISTED_SETTINGS,
};
