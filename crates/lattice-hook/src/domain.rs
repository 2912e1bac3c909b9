//! Domain-scoped registration handle.

use std::sync::Arc;

use crate::binding::HookBinding;
use crate::engine::HookEngine;
use crate::handler::{Hook, SyncHook};
use crate::order::HookOrder;

/// The reserved domain for registrations that opt out of group-scoped
/// cleanup.
pub const DEFAULT_DOMAIN: &str = "default";

/// A scoped token for one `(hook name, domain)` group.
///
/// Registrations made through the handle carry its domain; [`dispose`]
/// tears the whole group down with one call. This turns string-keyed
/// cleanup into a type-checked resource: a plugin or component instance
/// holds the handle instead of remembering domain strings and individual
/// subscriber ids.
///
/// [`dispose`]: Self::dispose
#[derive(Clone)]
pub struct DomainHandle {
    engine: Arc<HookEngine>,
    name: String,
    domain: String,
}

impl DomainHandle {
    pub(crate) fn new(engine: Arc<HookEngine>, name: String, domain: String) -> Self {
        Self {
            engine,
            name,
            domain,
        }
    }

    /// The hook name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain this handle is bound to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Registers an async subscriber under this handle's hook and domain.
    pub fn register(&self, handler: Arc<dyn Hook>, order: HookOrder) -> String {
        self.engine.register(
            HookBinding::new(&self.name, handler)
                .order(order)
                .domain(&self.domain),
        )
    }

    /// Registers a sync subscriber under this handle's hook and domain.
    pub fn register_sync(&self, handler: Arc<dyn SyncHook>, order: HookOrder) -> String {
        self.engine.register_sync(
            HookBinding::new(&self.name, handler)
                .order(order)
                .domain(&self.domain),
        )
    }

    /// Removes every subscriber registered under this handle's hook and
    /// domain, in both namespaces. Idempotent.
    pub fn dispose(&self) {
        self.engine.unregister_domain(&self.name, &self.domain);
    }
}

impl std::fmt::Debug for DomainHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainHandle")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish()
    }
}
