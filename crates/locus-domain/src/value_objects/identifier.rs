//! Implementation Identifier Value Object

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::IDENTIFIER_SEPARATOR;
use crate::error::{Error, Result};

/// Value Object: reference to a constructible component type
///
/// An identifier has the form `location.TypeName`; the last separator splits
/// the location (a dotted module path) from the type name. Both parts are
/// non-empty once parsed.
///
/// ## Example
///
/// ```rust
/// use locus_domain::value_objects::ImplementationIdentifier;
///
/// let id = ImplementationIdentifier::parse("chromadb.db.duckdb.DuckDB").unwrap();
/// assert_eq!(id.location(), "chromadb.db.duckdb");
/// assert_eq!(id.type_name(), "DuckDB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImplementationIdentifier(String);

impl ImplementationIdentifier {
    /// Parse a raw identifier, rejecting values without both parts
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((location, type_name)) = raw.rsplit_once(IDENTIFIER_SEPARATOR) else {
            return Err(Error::unresolved(
                raw,
                format!("expected 'location{IDENTIFIER_SEPARATOR}TypeName'"),
            ));
        };
        if location.is_empty() {
            return Err(Error::unresolved(raw, "location is empty"));
        }
        if type_name.is_empty() {
            return Err(Error::unresolved(raw, "type name is empty"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Dotted location the type lives in
    pub fn location(&self) -> &str {
        self.split().0
    }

    /// Type name within the location
    pub fn type_name(&self) -> &str {
        self.split().1
    }

    /// The full identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(&self) -> (&str, &str) {
        // Parsing guarantees the separator is present.
        self.0
            .rsplit_once(IDENTIFIER_SEPARATOR)
            .unwrap_or(("", self.0.as_str()))
    }
}

impl fmt::Display for ImplementationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImplementationIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets instance caches keyed by identifier be queried with a plain `&str`.
impl Borrow<str> for ImplementationIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ImplementationIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ImplementationIdentifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ImplementationIdentifier> for String {
    fn from(value: ImplementationIdentifier) -> Self {
        value.0
    }
}
