//! Composition root
//!
//! Owns the loaded settings together with the locator that resolves them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//!
//! let api = context.resolve(Setting::ApiImplementation)?;
//! let db = context.resolve_as::<DuckDb>(Setting::DatabaseImplementation)?;
//! ```

use std::sync::Arc;

use locus_domain::error::Result;
use locus_domain::ports::Component;
use locus_domain::value_objects::{Setting, Settings};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::di::locator::ComponentLocator;

/// Settings plus the locator that turns them into components
///
/// Cloning is cheap and every clone shares the same instance cache.
#[derive(Clone, Debug)]
pub struct AppContext {
    settings: Arc<Settings>,
    locator: Arc<ComponentLocator>,
}

impl AppContext {
    /// Build a context over every link-time registered component
    pub fn new(settings: Settings) -> Self {
        Self::with_locator(settings, ComponentLocator::discover())
    }

    /// Build a context over an explicit locator
    pub fn with_locator(settings: Settings, locator: ComponentLocator) -> Self {
        Self {
            settings: Arc::new(settings),
            locator: Arc::new(locator),
        }
    }

    /// Loaded settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shared locator
    pub fn locator(&self) -> &ComponentLocator {
        &self.locator
    }

    /// Resolve an extension point against the owned settings
    pub fn resolve(&self, setting: Setting) -> Result<Arc<dyn Component>> {
        self.locator.resolve(&self.settings, setting)
    }

    /// Resolve an extension point and downcast it
    pub fn resolve_as<T: Component>(&self, setting: Setting) -> Result<Arc<T>> {
        self.locator.resolve_as(&self.settings, setting)
    }

    /// Resolve every extension point, keeping each outcome
    ///
    /// Failures do not stop the remaining points from being resolved.
    pub fn resolve_all(&self) -> Vec<(Setting, Result<Arc<dyn Component>>)> {
        Setting::extension_points()
            .map(|setting| {
                let outcome = self.resolve(setting);
                if let Err(e) = &outcome {
                    warn!(setting = %setting, error = %e, "Extension point did not resolve");
                }
                (setting, outcome)
            })
            .collect()
    }
}

/// Build the application context from a loaded configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let locator = ComponentLocator::discover();
    info!(
        registered = locator.registry().len(),
        environment = %config.settings.environment,
        "Component locator ready"
    );
    Ok(AppContext::with_locator(config.settings, locator))
}
