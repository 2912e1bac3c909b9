//! The runtime context injected into plugins and subsystems.

use std::sync::Arc;

use lattice_core::config::AppConfig;
use lattice_hook::{DomainHandle, HookEngine};

/// Runtime context for the framework.
///
/// Constructed once at startup and passed into every subsystem that needs
/// registration or dispatch — there is no hidden module-level singleton.
/// Cloning is cheap; all clones share the same engine.
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    hooks: Arc<HookEngine>,
}

impl AppContext {
    /// Creates a context owning a fresh hook engine.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            hooks: Arc::new(HookEngine::new()),
        }
    }

    /// The application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The hook dispatch engine.
    pub fn hooks(&self) -> &Arc<HookEngine> {
        &self.hooks
    }

    /// Creates a domain handle on the engine, scoped to `(name, domain)`.
    pub fn domain(&self, name: impl Into<String>, domain: impl Into<String>) -> DomainHandle {
        self.hooks.domain(name, domain)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("hooks", &self.hooks)
            .finish()
    }
}
