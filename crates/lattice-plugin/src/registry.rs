//! The plugin registry — an audited consumer of the generic registry.

use std::sync::Arc;

use parking_lot::RwLock;

use lattice_core::AppResult;
use lattice_registry::{HistoryRecord, Registry, RetentionMode, SubscriberId};

use crate::plugin::{Plugin, PluginInfo};

/// Registry of loaded plugins.
///
/// Built on [`Registry`] in History mode: core plugins can be protected
/// against unload, rejected plugin ids can be banned from re-registration,
/// and every lifecycle mutation lands in the audit log.
#[derive(Debug)]
pub struct PluginRegistry {
    inner: RwLock<Registry<Arc<dyn Plugin>>>,
}

impl PluginRegistry {
    /// Creates an empty plugin registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry::new("plugins", RetentionMode::History)),
        }
    }

    /// Registers a plugin under its own id, ordered by its load order.
    pub fn register(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        self.inner.write().register(info.id, plugin, info.order)
    }

    /// Removes a plugin. Fails if the plugin is protected.
    pub fn unregister(&self, plugin_id: &str) -> AppResult<()> {
        self.inner.write().unregister(plugin_id)
    }

    /// Gets a plugin by id.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<dyn Plugin>> {
        self.inner.read().get(plugin_id).map(|e| Arc::clone(&e.value))
    }

    /// Lists all registered plugin metadata in load order.
    pub fn list(&self) -> Vec<PluginInfo> {
        self.inner
            .read()
            .list()
            .iter()
            .map(|e| e.value.info())
            .collect()
    }

    /// Returns whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.inner.read().get(plugin_id).is_some()
    }

    /// Returns the number of registered plugins.
    pub fn count(&self) -> usize {
        self.inner.read().len()
    }

    /// Marks a plugin as immune to unload.
    pub fn protect(&self, plugin_id: &str) -> AppResult<()> {
        self.inner.write().protect(plugin_id)
    }

    /// Lifts unload immunity from a plugin.
    pub fn unprotect(&self, plugin_id: &str) -> AppResult<()> {
        self.inner.write().unprotect(plugin_id)
    }

    /// Bans a plugin id from any future registration.
    pub fn ban(&self, plugin_id: &str) -> AppResult<()> {
        self.inner.write().ban(plugin_id)
    }

    /// Subscribes to registry change notifications.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&Registry<Arc<dyn Plugin>>) + Send + Sync + 'static,
    {
        self.inner.write().subscribe(callback)
    }

    /// Removes a subscription.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.inner.write().unsubscribe(id)
    }

    /// The audit log of plugin lifecycle mutations.
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.inner.read().history().to_vec()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
