//! # lattice-registry
//!
//! Generic ordered keyed collection used as the pattern behind every
//! named collection in the framework (plugins, components, routes,
//! middleware). Provides:
//!
//! - Keyed entries sorted by a signed order value, with stable insertion
//!   tie-breaks
//! - Protect/ban guards for lifecycle safety
//! - Clean vs History retention modes (History keeps an append-only audit log)
//! - Synchronous change-subscription notifications

pub mod history;
pub mod registry;

pub use history::{HistoryRecord, RegistryAction, RetentionMode};
pub use registry::{Registry, RegistryEntry, SubscriberId};
