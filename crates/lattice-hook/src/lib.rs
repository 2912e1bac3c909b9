//! # lattice-hook
//!
//! The hook dispatch engine at the center of Lattice. Provides:
//!
//! - Named dispatch points with priority-ordered, sequentially executed
//!   subscribers in two independent namespaces (async and sync)
//! - A triple index (id, name, domain) giving O(1) single unregister and
//!   O(1) group unregister
//! - Domain-scoped bulk teardown, the central lifecycle primitive for
//!   plugins, mounts, and feature flags
//! - A shared mutable context threaded through each subscriber chain

pub mod binding;
pub mod context;
pub mod domain;
pub mod engine;
pub mod handler;
pub mod order;
mod sequence;

pub use binding::HookBinding;
pub use context::HookContext;
pub use domain::{DEFAULT_DOMAIN, DomainHandle};
pub use engine::{HookEngine, HookKind};
pub use handler::{Hook, HookFn, SyncHook, SyncHookFn};
pub use order::HookOrder;
