//! Component resolution
//!
//! Wiring between the settings surface and the link-time component table.
//!
//! ```text
//! AppConfig → AppContext ─┬─ Arc<Settings>
//!                         └─ Arc<ComponentLocator> ── ComponentRegistry (linkme)
//! ```

pub mod bootstrap;
pub mod locator;

pub use bootstrap::{AppContext, init_app};
pub use locator::ComponentLocator;
