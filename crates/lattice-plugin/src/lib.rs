//! # lattice-plugin
//!
//! Plugin lifecycle layer for Lattice. Provides:
//!
//! - The [`Plugin`] trait with explicit `activate`/`deactivate` entry points
//!   invoked by the host in a defined bootstrap order
//! - [`AppContext`], the runtime context constructed once at startup and
//!   injected into every plugin
//! - [`PluginRegistry`], an audited registry of loaded plugins built on the
//!   generic registry contract (protect, ban, history)
//! - [`PluginManager`], which loads plugins, fires the lifecycle hooks, and
//!   tears down a plugin's hook registrations with one domain-scoped
//!   unregister

pub mod context;
pub mod lifecycle;
pub mod manager;
pub mod plugin;
pub mod registry;

pub use context::AppContext;
pub use manager::PluginManager;
pub use plugin::{Plugin, PluginInfo};
pub use registry::PluginRegistry;
