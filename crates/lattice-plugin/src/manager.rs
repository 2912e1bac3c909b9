//! Plugin manager — lifecycle orchestration for all plugins.

use std::sync::Arc;

use tracing::{error, info, warn};

use lattice_core::{AppError, AppResult};
use lattice_hook::{HookContext, HookKind};

use crate::context::AppContext;
use crate::lifecycle::{PLUGIN_INIT, PLUGIN_READY, PLUGIN_UNREGISTER};
use crate::plugin::Plugin;
use crate::registry::PluginRegistry;

/// Manages the full lifecycle of plugins: register, activate, ready,
/// deactivate, unload.
#[derive(Debug)]
pub struct PluginManager {
    context: AppContext,
    registry: PluginRegistry,
}

impl PluginManager {
    /// Creates a plugin manager over a runtime context.
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            registry: PluginRegistry::new(),
        }
    }

    /// The runtime context plugins are activated against.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The plugin registry.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Registers and activates one plugin, then fires `plugin-init`.
    ///
    /// On activation failure the plugin's partial hook registrations and its
    /// registry entry are rolled back.
    pub async fn load(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let plugin_id = info.id.clone();

        self.registry.register(Arc::clone(&plugin))?;

        if let Err(err) = plugin.activate(&self.context).await {
            self.teardown_domain(&plugin_id);
            if let Err(err) = self.registry.unregister(&plugin_id) {
                warn!(plugin_id = %plugin_id, error = %err, "Rollback unregister failed");
            }
            return Err(AppError::plugin(format!(
                "Plugin '{}' activation failed: {}",
                plugin_id, err
            )));
        }

        self.context
            .hooks()
            .run(HookContext::new(PLUGIN_INIT).with_str("plugin", &plugin_id))
            .await?;

        info!(
            plugin_id = %plugin_id,
            name = %info.name,
            version = %info.version,
            "Plugin loaded"
        );

        Ok(())
    }

    /// Fires `plugin-ready`, signalling that startup loading is complete.
    pub async fn ready(&self) -> AppResult<HookContext> {
        self.context.hooks().run(HookContext::new(PLUGIN_READY)).await
    }

    /// Deactivates and removes a plugin, then tears down every hook it
    /// registered under its domain.
    ///
    /// A protected plugin refuses unload before any teardown runs.
    pub async fn unload(&self, plugin_id: &str) -> AppResult<()> {
        let plugin = self
            .registry
            .get(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{}' not found", plugin_id)))?;

        self.registry.unregister(plugin_id)?;

        if let Err(err) = plugin.deactivate(&self.context).await {
            warn!(plugin_id = %plugin_id, error = %err, "Plugin deactivate returned error");
        }

        // Fired before teardown so the plugin's own subscribers observe it.
        self.context
            .hooks()
            .run(HookContext::new(PLUGIN_UNREGISTER).with_str("plugin", plugin_id))
            .await?;

        self.teardown_domain(plugin_id);

        info!(plugin_id = %plugin_id, "Plugin unloaded");
        Ok(())
    }

    /// Unloads all plugins in reverse load order.
    pub async fn unload_all(&self) -> AppResult<()> {
        for info in self.registry.list().into_iter().rev() {
            if let Err(err) = self.unload(&info.id).await {
                error!(plugin_id = %info.id, error = %err, "Error unloading plugin");
            }
        }

        info!("All plugins unloaded");
        Ok(())
    }

    /// Loads a set of plugins in ascending load order and fires
    /// `plugin-ready`.
    ///
    /// Honors `plugins.auto_activate` (skip entirely when disabled) and
    /// `plugins.fail_fast` (abort on the first failed load, or skip and
    /// continue).
    pub async fn bootstrap(&self, plugins: Vec<Arc<dyn Plugin>>) -> AppResult<()> {
        if !self.context.config().plugins.auto_activate {
            info!("Plugin auto-activation disabled, skipping bootstrap");
            return Ok(());
        }

        let mut plugins = plugins;
        // Stable sort: equal orders keep the caller's sequence.
        plugins.sort_by_key(|p| p.info().order);

        let fail_fast = self.context.config().plugins.fail_fast;
        for plugin in plugins {
            let plugin_id = plugin.info().id;
            if let Err(err) = self.load(plugin).await {
                if fail_fast {
                    return Err(err);
                }
                error!(plugin_id = %plugin_id, error = %err, "Plugin load failed, continuing");
            }
        }

        self.ready().await?;
        Ok(())
    }

    /// Removes every hook registered under `domain`, across all hook names
    /// in both namespaces.
    fn teardown_domain(&self, domain: &str) {
        let hooks = self.context.hooks();
        let mut names = hooks.list(HookKind::Async);
        names.extend(hooks.list(HookKind::Sync));
        names.sort();
        names.dedup();

        for name in names {
            hooks.unregister_domain(&name, domain);
        }
    }
}
