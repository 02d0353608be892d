//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Locus
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration option required by a caller is unset
    #[error("Missing required config value '{setting}'")]
    MissingValue {
        /// Name of the unset option
        setting: String,
    },

    /// The option a caller asked to resolve is unset
    #[error("Setting '{setting}' is required")]
    RequiredSettingMissing {
        /// Name of the extension-point option
        setting: String,
        /// The underlying missing-value error
        #[source]
        source: Box<Error>,
    },

    /// The identifier cannot be parsed, or its location/type is not registered
    #[error("Unresolved identifier '{identifier}': {reason}")]
    UnresolvedIdentifier {
        /// The identifier that failed to resolve
        identifier: String,
        /// Why resolution failed
        reason: String,
    },

    /// The located type's constructor failed
    #[error("Failed to construct '{identifier}': {source}")]
    ConstructionFailure {
        /// The identifier being constructed
        identifier: String,
        /// The constructor's error
        #[source]
        source: Box<Error>,
    },

    /// An option name that is not part of the settings surface
    #[error("Unknown setting '{name}'")]
    UnknownSetting {
        /// The name that was looked up
        name: String,
    },

    /// A resolved component is not of the requested concrete type
    #[error("Component '{identifier}' is not a {expected}")]
    ComponentTypeMismatch {
        /// Identifier of the resolved component
        identifier: String,
        /// Name of the requested type
        expected: &'static str,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a missing value error for an option
    pub fn missing_value<S: Into<String>>(setting: S) -> Self {
        Self::MissingValue {
            setting: setting.into(),
        }
    }

    /// Wrap an error as "the extension point's option is unset"
    pub fn required_setting_missing<S: Into<String>>(setting: S, source: Error) -> Self {
        Self::RequiredSettingMissing {
            setting: setting.into(),
            source: Box::new(source),
        }
    }

    /// Create an unresolved identifier error
    pub fn unresolved<I: Into<String>, R: Into<String>>(identifier: I, reason: R) -> Self {
        Self::UnresolvedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a constructor error for an identifier
    pub fn construction_failure<I: Into<String>>(identifier: I, source: Error) -> Self {
        Self::ConstructionFailure {
            identifier: identifier.into(),
            source: Box::new(source),
        }
    }

    /// Create an unknown setting error
    pub fn unknown_setting<S: Into<String>>(name: S) -> Self {
        Self::UnknownSetting { name: name.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// True when this error, or the error it wraps, is a missing value
    pub fn is_missing_value(&self) -> bool {
        match self {
            Self::MissingValue { .. } => true,
            Self::RequiredSettingMissing { source, .. }
            | Self::ConstructionFailure { source, .. } => source.is_missing_value(),
            _ => false,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
