//! In-process API component

use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::LOCAL_API_IMPLEMENTATION;
use locus_domain::error::{Error, Result};
use locus_domain::ports::Component;
use locus_domain::value_objects::Settings;

/// API served from the current process
#[derive(Debug)]
pub struct LocalApi {
    environment: String,
    allow_reset: bool,
}

impl LocalApi {
    /// Read reset policy and environment from the settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            environment: settings.environment.clone(),
            allow_reset: settings.enable_system_reset,
        })
    }

    /// Deployment environment label
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Check that wiping all data is permitted
    pub fn ensure_reset_allowed(&self) -> Result<()> {
        if self.allow_reset {
            Ok(())
        } else {
            Err(Error::invalid_argument(
                "Resetting is not allowed by this configuration (enable_system_reset is false)",
            ))
        }
    }
}

impl Component for LocalApi {
    fn component_name(&self) -> &str {
        "local"
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static LOCAL_API_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: LOCAL_API_IMPLEMENTATION,
    description: "In-process API",
    factory: |settings: &Settings| Ok(Arc::new(LocalApi::from_settings(settings)?)),
};
