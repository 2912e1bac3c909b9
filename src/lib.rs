//! # Lattice
//!
//! Plugin application framework whose extensibility model rests on one
//! mechanism: a named, priority-ordered, domain-scoped hook dispatch engine
//! built alongside a generic ordered registry abstraction. Component
//! collections, route tables, middleware chains, and the plugin lifecycle
//! are all consumers of this core.
//!
//! This crate is the facade: it re-exports the public surface of the
//! workspace crates and provides tracing initialization for hosts.
//!
//! ```rust,ignore
//! use lattice::{AppConfig, AppContext, HookBinding, HookContext, HookFn, PluginManager};
//!
//! let config = AppConfig::load("development")?;
//! lattice::telemetry::init(&config.logging);
//!
//! let context = AppContext::new(config);
//! let manager = PluginManager::new(context.clone());
//! manager.bootstrap(plugins).await?;
//!
//! context.hooks().run(HookContext::new("routes-init")).await?;
//! ```

pub mod telemetry;

pub use lattice_core::config::{AppConfig, logging::LoggingConfig, plugin::PluginConfig};
pub use lattice_core::error::ErrorKind;
pub use lattice_core::{AppError, AppResult};

pub use lattice_hook::{
    DEFAULT_DOMAIN, DomainHandle, Hook, HookBinding, HookContext, HookEngine, HookFn, HookKind,
    HookOrder, SyncHook, SyncHookFn,
};

pub use lattice_registry::{
    HistoryRecord, Registry, RegistryAction, RegistryEntry, RetentionMode, SubscriberId,
};

pub use lattice_plugin::lifecycle;
pub use lattice_plugin::{AppContext, Plugin, PluginInfo, PluginManager, PluginRegistry};

pub use lattice_plugin_sdk::prelude;
