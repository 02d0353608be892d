//! Helpers shared by component constructors

use locus_domain::error::{Error, Result};
use locus_domain::value_objects::{Setting, Settings};

/// Read a required port setting and parse it
pub(crate) fn required_port(settings: &Settings, setting: Setting) -> Result<u16> {
    let raw = settings.validate_text(setting)?;
    raw.trim().parse().map_err(|e| {
        Error::invalid_argument(format!("Setting '{setting}' is not a valid port ('{raw}'): {e}"))
    })
}

/// Read a required host setting, rejecting blank values
pub(crate) fn required_host(settings: &Settings, setting: Setting) -> Result<String> {
    let host = settings.validate_text(setting)?;
    if host.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "Setting '{setting}' must not be blank"
        )));
    }
    Ok(host)
}
