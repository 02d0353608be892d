//! Posthog telemetry component
//!
//! Carries only the telemetry-whitelisted settings. When
//! `anonymized_telemetry` is off the component is still constructed but
//! reports nothing.

use std::collections::BTreeMap;
use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::POSTHOG_TELEMETRY_IMPLEMENTATION;
use locus_domain::error::Result;
use locus_domain::ports::Component;
use locus_domain::value_objects::Settings;
use tracing::info;

/// Posthog telemetry client
#[derive(Debug)]
pub struct Posthog {
    enabled: bool,
    context: BTreeMap<&'static str, String>,
}

impl Posthog {
    /// Capture the telemetry context from the settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let enabled = settings.anonymized_telemetry;
        if enabled {
            info!("Anonymized telemetry enabled");
        }
        Ok(Self {
            enabled,
            context: settings.telemetry_context(),
        })
    }

    /// Whether events are reported
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Settings attached to every event
    pub fn context(&self) -> &BTreeMap<&'static str, String> {
        &self.context
    }

    /// Properties for an event, or `None` when telemetry is off
    pub fn event_properties(&self, event: &str) -> Option<BTreeMap<String, String>> {
        self.enabled.then(|| {
            let mut properties: BTreeMap<String, String> = self
                .context
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect();
            properties.insert("event".to_string(), event.to_string());
            properties
        })
    }
}

impl Component for Posthog {
    fn component_name(&self) -> &str {
        "posthog"
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static POSTHOG_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: POSTHOG_TELEMETRY_IMPLEMENTATION,
    description: "Posthog anonymized telemetry",
    factory: |settings: &Settings| Ok(Arc::new(Posthog::from_settings(settings)?)),
};
