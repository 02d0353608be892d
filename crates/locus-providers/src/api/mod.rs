//! API components

#[cfg(feature = "api-local")]
pub mod local;

#[cfg(feature = "api-fastapi")]
pub mod fastapi;

#[cfg(feature = "api-local")]
pub use local::LocalApi;

#[cfg(feature = "api-fastapi")]
pub use fastapi::FastApi;
