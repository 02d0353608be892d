//! Clickhouse database component

use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::CLICKHOUSE_IMPLEMENTATION;
use locus_domain::error::Result;
use locus_domain::ports::Component;
use locus_domain::value_objects::{Setting, Settings};

use crate::utils::{required_host, required_port};

/// Clickhouse database component
///
/// Construction fails unless `clickhouse_host` and a numeric
/// `clickhouse_port` are configured.
#[derive(Debug)]
pub struct Clickhouse {
    host: String,
    port: u16,
}

impl Clickhouse {
    /// Read host and port from the settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            host: required_host(settings, Setting::ClickhouseHost)?,
            port: required_port(settings, Setting::ClickhousePort)?,
        })
    }

    /// Server host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// HTTP endpoint of the server
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Component for Clickhouse {
    fn component_name(&self) -> &str {
        "clickhouse"
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static CLICKHOUSE_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: CLICKHOUSE_IMPLEMENTATION,
    description: "Clickhouse database (requires clickhouse_host and clickhouse_port)",
    factory: |settings: &Settings| Ok(Arc::new(Clickhouse::from_settings(settings)?)),
};
