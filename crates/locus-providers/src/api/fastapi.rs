//! REST API client component

use std::sync::Arc;

use locus_application::ports::registry::{COMPONENTS, ComponentEntry};
use locus_domain::constants::FASTAPI_IMPLEMENTATION;
use locus_domain::error::Result;
use locus_domain::ports::Component;
use locus_domain::value_objects::{Setting, Settings};

use crate::utils::{required_host, required_port};

/// API path prefix served by the remote server
const API_PREFIX: &str = "/api/v1";

/// Client for a remote API server
///
/// Requires `server_host` and `server_http_port`; uses `https` when
/// `server_ssl_enabled` is set.
#[derive(Debug)]
pub struct FastApi {
    base_url: String,
}

impl FastApi {
    /// Build the server URL from the settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let host = required_host(settings, Setting::ServerHost)?;
        let port = required_port(settings, Setting::ServerHttpPort)?;
        let scheme = if settings.server_ssl_enabled {
            "https"
        } else {
            "http"
        };
        Ok(Self {
            base_url: format!("{scheme}://{host}:{port}{API_PREFIX}"),
        })
    }

    /// Base URL of the remote API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Component for FastApi {
    fn component_name(&self) -> &str {
        "rest"
    }
}

#[linkme::distributed_slice(COMPONENTS)]
static FASTAPI_COMPONENT: ComponentEntry = ComponentEntry {
    identifier: FASTAPI_IMPLEMENTATION,
    description: "REST client for a remote server (requires server_host and server_http_port)",
    factory: |settings: &Settings| Ok(Arc::new(FastApi::from_settings(settings)?)),
};
