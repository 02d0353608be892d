//! Component Registry
//!
//! Registration table from implementation identifier to factory.
//! Components submit entries at link time via `linkme::distributed_slice`;
//! [`ComponentRegistry::discover`] collects them at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use locus_domain::error::{Error, Result};
use locus_domain::ports::Component;
use locus_domain::value_objects::{ImplementationIdentifier, Settings};
use tracing::{debug, warn};

/// Factory building a component from the settings
pub type ComponentFactory =
    Arc<dyn Fn(&Settings) -> Result<Arc<dyn Component>> + Send + Sync + 'static>;

/// Registry entry for components
///
/// Each component implementation registers itself with this entry using
/// `#[linkme::distributed_slice(COMPONENTS)]`. The entry contains metadata
/// and a factory function to create instances.
pub struct ComponentEntry {
    /// Canonical identifier (e.g., "chromadb.db.duckdb.DuckDB")
    pub identifier: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create an instance
    pub factory: fn(&Settings) -> Result<Arc<dyn Component>>,
}

// Auto-collection via linkme distributed slices - components submit entries at link time
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

/// A factory registered under one identifier
#[derive(Clone)]
pub struct RegisteredComponent {
    identifier: ImplementationIdentifier,
    description: String,
    factory: ComponentFactory,
}

impl RegisteredComponent {
    /// Identifier the factory is registered under
    pub fn identifier(&self) -> &ImplementationIdentifier {
        &self.identifier
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the factory
    pub fn construct(&self, settings: &Settings) -> Result<Arc<dyn Component>> {
        (self.factory)(settings)
    }
}

impl fmt::Debug for RegisteredComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredComponent")
            .field("identifier", &self.identifier)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registration table: location → type name → factory
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use locus_application::ComponentRegistry;
/// use locus_domain::{Component, ImplementationIdentifier, Settings};
///
/// #[derive(Debug)]
/// struct Echo;
/// impl Component for Echo {
///     fn component_name(&self) -> &str { "echo" }
/// }
///
/// let registry = ComponentRegistry::new()
///     .with_component("demo.tools.Echo", "Echo component", |_| Ok(Arc::new(Echo)))
///     .unwrap();
///
/// let id = ImplementationIdentifier::parse("demo.tools.Echo").unwrap();
/// let echo = registry.lookup(&id).unwrap().construct(&Settings::default()).unwrap();
/// assert_eq!(echo.component_name(), "echo");
/// ```
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    locations: BTreeMap<String, BTreeMap<String, RegisteredComponent>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every entry in [`COMPONENTS`]
    ///
    /// Malformed or duplicate identifiers are skipped with a warning; the
    /// first entry for an identifier wins.
    pub fn discover() -> Self {
        let mut registry = Self::new();
        for entry in COMPONENTS {
            let factory = entry.factory;
            if let Err(e) = registry.register(entry.identifier, entry.description, factory) {
                warn!(identifier = entry.identifier, error = %e, "Skipping component entry");
            }
        }
        debug!(count = registry.len(), "Discovered registered components");
        registry
    }

    /// Register a factory under `identifier`
    ///
    /// Fails with `UnresolvedIdentifier` for malformed identifiers and with
    /// `InvalidArgument` if the identifier is already taken.
    pub fn register<F>(
        &mut self,
        identifier: &str,
        description: impl Into<String>,
        factory: F,
    ) -> Result<()>
    where
        F: Fn(&Settings) -> Result<Arc<dyn Component>> + Send + Sync + 'static,
    {
        let identifier = ImplementationIdentifier::parse(identifier)?;
        let types = self
            .locations
            .entry(identifier.location().to_string())
            .or_default();
        if types.contains_key(identifier.type_name()) {
            return Err(Error::invalid_argument(format!(
                "Component '{identifier}' is already registered"
            )));
        }
        types.insert(
            identifier.type_name().to_string(),
            RegisteredComponent {
                identifier: identifier.clone(),
                description: description.into(),
                factory: Arc::new(factory),
            },
        );
        Ok(())
    }

    /// Builder form of [`ComponentRegistry::register`]
    pub fn with_component<F>(
        mut self,
        identifier: &str,
        description: impl Into<String>,
        factory: F,
    ) -> Result<Self>
    where
        F: Fn(&Settings) -> Result<Arc<dyn Component>> + Send + Sync + 'static,
    {
        self.register(identifier, description, factory)?;
        Ok(self)
    }

    /// Find the factory for an identifier
    ///
    /// Distinguishes an unknown location from a type missing in a known one.
    pub fn lookup(&self, identifier: &ImplementationIdentifier) -> Result<&RegisteredComponent> {
        let location = identifier.location();
        let Some(types) = self.locations.get(location) else {
            return Err(Error::unresolved(
                identifier.as_str(),
                format!("location '{location}' is not registered"),
            ));
        };
        types.get(identifier.type_name()).ok_or_else(|| {
            let available: Vec<&str> = types.keys().map(String::as_str).collect();
            Error::unresolved(
                identifier.as_str(),
                format!(
                    "type '{}' not found in '{location}'. Available types: {available:?}",
                    identifier.type_name()
                ),
            )
        })
    }

    /// Whether a factory is registered under `identifier`
    pub fn contains(&self, identifier: &str) -> bool {
        ImplementationIdentifier::parse(identifier)
            .is_ok_and(|id| self.lookup(&id).is_ok())
    }

    /// Registered (identifier, description) pairs, sorted by identifier
    pub fn list(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|c| (c.identifier.to_string(), c.description.clone()))
            .collect()
    }

    /// Iterate registered components in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredComponent> {
        self.locations.values().flat_map(BTreeMap::values)
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.locations.values().map(BTreeMap::len).sum()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|c| c.identifier.as_str()))
            .finish()
    }
}

/// List all link-time registered components
///
/// Returns (identifier, description) tuples. Useful for CLI help.
pub fn list_components() -> Vec<(&'static str, &'static str)> {
    COMPONENTS
        .iter()
        .map(|e| (e.identifier, e.description))
        .collect()
}
