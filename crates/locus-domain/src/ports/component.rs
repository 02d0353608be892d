//! Component Port
//!
//! Every implementation that can be selected through an extension point
//! implements [`Component`]. The locator hands components out as
//! `Arc<dyn Component>`; callers that need the concrete type downcast with
//! [`downcast_rs::DowncastSync`].

use std::fmt;

use downcast_rs::{DowncastSync, impl_downcast};

/// A constructible, shareable implementation of an extension point
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use locus_domain::ports::Component;
///
/// #[derive(Debug)]
/// struct InMemoryStore;
///
/// impl Component for InMemoryStore {
///     fn component_name(&self) -> &str {
///         "in-memory"
///     }
/// }
///
/// let component: Arc<dyn Component> = Arc::new(InMemoryStore);
/// assert!(component.clone().downcast_arc::<InMemoryStore>().is_ok());
/// ```
pub trait Component: DowncastSync + fmt::Debug {
    /// Short name for diagnostics
    fn component_name(&self) -> &str;
}

impl_downcast!(sync Component);
