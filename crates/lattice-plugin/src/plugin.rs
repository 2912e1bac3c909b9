//! The plugin trait and its metadata.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use lattice_core::AppResult;

use crate::context::AppContext;

/// Metadata about a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier. Also the domain its hook registrations
    /// are grouped under.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// Load order (lower = activated first).
    pub order: i32,
}

/// Trait that all plugins implement.
///
/// Registration is an explicit entry point, not a load-time side effect:
/// the host calls [`activate`] in bootstrap order, and the plugin registers
/// its hooks there — under `domain = info().id`, so the manager can tear
/// every one of them down with a single domain-scoped unregister.
///
/// [`activate`]: Self::activate
#[async_trait]
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called when the plugin is loaded. Hook registrations happen here.
    async fn activate(&self, ctx: &AppContext) -> AppResult<()>;

    /// Called when the plugin is unloaded, before its hooks are torn down.
    async fn deactivate(&self, ctx: &AppContext) -> AppResult<()> {
        let _ = ctx;
        Ok(())
    }
}
