//! Component Locator
//!
//! Resolves extension-point settings to singleton component instances.
//!
//! ## Architecture
//!
//! ```text
//! Settings: "database_implementation = duckdb"
//!                    │  validate + alias rewrite
//!                    ▼
//!        "chromadb.db.duckdb.DuckDB"
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │   instances: identifier → slot       │  ← hit: return cached instance
//! └─────────────────────────────────────┘
//!                    │ miss
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │   ComponentRegistry::lookup(id)      │  ← factory registered via linkme
//! └─────────────────────────────────────┘
//!                    │
//!                    ▼
//!        slot.get_or_try_init(factory)      ← one construction per identifier
//! ```
//!
//! Each identifier owns a slot, so first-time construction of one component
//! never blocks resolution of another. Callers racing on the same slot wait
//! for the first constructor and share its instance. A failed construction
//! leaves the slot empty.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use locus_application::ports::registry::ComponentRegistry;
use locus_domain::error::{Error, Result};
use locus_domain::ports::Component;
use locus_domain::value_objects::{ImplementationIdentifier, Setting, SettingValue, Settings};
use once_cell::sync::OnceCell;
use tracing::{debug, info};

type Slot = Arc<OnceCell<Arc<dyn Component>>>;

/// Registry-backed locator with a per-identifier instance cache
///
/// # Example
///
/// ```ignore
/// let locator = ComponentLocator::discover();
/// let db = locator.resolve(&settings, Setting::DatabaseImplementation)?;
/// let same = locator.resolve(&settings, Setting::DatabaseImplementation)?;
/// assert!(Arc::ptr_eq(&db, &same));
/// ```
pub struct ComponentLocator {
    registry: ComponentRegistry,
    instances: DashMap<ImplementationIdentifier, Slot>,
}

impl ComponentLocator {
    /// Create a locator over an explicit registry
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            instances: DashMap::new(),
        }
    }

    /// Create a locator over every link-time registered component
    pub fn discover() -> Self {
        Self::new(ComponentRegistry::discover())
    }

    /// Registration table used for lookups
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolve an extension-point setting to its singleton instance
    ///
    /// Fails with `RequiredSettingMissing` when the setting is unset or
    /// empty, `UnresolvedIdentifier` when its value does not name a
    /// registered type, and `ConstructionFailure` when the factory fails.
    pub fn resolve(&self, settings: &Settings, setting: Setting) -> Result<Arc<dyn Component>> {
        self.resolve_identified(settings, setting)
            .map(|(_, instance)| instance)
    }

    /// Resolve and downcast to a concrete component type
    pub fn resolve_as<T: Component>(&self, settings: &Settings, setting: Setting) -> Result<Arc<T>> {
        let (identifier, instance) = self.resolve_identified(settings, setting)?;
        instance
            .downcast_arc::<T>()
            .map_err(|_| Error::ComponentTypeMismatch {
                identifier,
                expected: type_name::<T>(),
            })
    }

    /// Resolve an extension point given its configuration key
    pub fn resolve_by_name(&self, settings: &Settings, name: &str) -> Result<Arc<dyn Component>> {
        self.resolve(settings, name.parse()?)
    }

    /// Resolve, also returning the identifier that was used
    pub fn resolve_identified(
        &self,
        settings: &Settings,
        setting: Setting,
    ) -> Result<(String, Arc<dyn Component>)> {
        let value = settings
            .validate(setting)
            .map_err(|e| Error::required_setting_missing(setting.as_str(), e))?;
        let raw = match value {
            SettingValue::Text(text) if text.is_empty() => {
                return Err(Error::required_setting_missing(
                    setting.as_str(),
                    Error::missing_value(setting.as_str()),
                ));
            }
            SettingValue::Text(text) => text,
            other => other.to_string(),
        };

        if let Some(instance) = self.cached(&raw) {
            info!(identifier = %raw, setting = %setting, "Using {raw} for {setting}");
            return Ok((raw, instance));
        }

        let identifier = ImplementationIdentifier::parse(&raw)?;
        let registered = self.registry.lookup(&identifier)?;

        // Clone the slot out so the map shard is not locked during construction
        let slot: Slot = self
            .instances
            .entry(identifier.clone())
            .or_default()
            .value()
            .clone();

        let instance = slot
            .get_or_try_init(|| {
                debug!(identifier = %identifier, setting = %setting, "Constructing component");
                registered
                    .construct(settings)
                    .map_err(|e| Error::construction_failure(identifier.as_str(), e))
            })?
            .clone();

        info!(identifier = %identifier, setting = %setting, "Using {identifier} for {setting}");
        Ok((identifier.into(), instance))
    }

    /// Cached instance for an identifier, if constructed
    pub fn cached(&self, identifier: &str) -> Option<Arc<dyn Component>> {
        self.instances
            .get(identifier)
            .and_then(|slot| slot.get().cloned())
    }

    /// Identifiers with a constructed instance, sorted
    pub fn cached_identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self
            .instances
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .map(|entry| entry.key().to_string())
            .collect();
        identifiers.sort();
        identifiers
    }

    /// Number of constructed instances
    pub fn len(&self) -> usize {
        self.instances
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// True when nothing has been constructed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ComponentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentLocator")
            .field("registered", &self.registry.len())
            .field("cached", &self.cached_identifiers())
            .finish()
    }
}
