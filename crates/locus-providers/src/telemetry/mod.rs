//! Telemetry components

#[cfg(feature = "telemetry-posthog")]
pub mod posthog;

#[cfg(feature = "telemetry-posthog")]
pub use posthog::Posthog;
