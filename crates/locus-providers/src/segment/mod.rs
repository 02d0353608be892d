//! Segment manager components

#[cfg(feature = "segment-local")]
pub mod local;

#[cfg(feature = "segment-local")]
pub use local::LocalSegmentManager;
