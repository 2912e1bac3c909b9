//! The hook engine — triple-indexed subscriber tables and dispatch.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use lattice_core::AppResult;

use crate::binding::HookBinding;
use crate::context::HookContext;
use crate::domain::DomainHandle;
use crate::handler::{Hook, SyncHook};
use crate::order::HookOrder;
use crate::sequence;

/// Selects which subscriber namespace an operation targets.
///
/// The namespaces are independent: an id registered as async does not
/// collide with a sync id of the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Subscribers dispatched by [`HookEngine::run`].
    Async,
    /// Subscribers dispatched by [`HookEngine::run_sync`].
    Sync,
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Async => write!(f, "async"),
            Self::Sync => write!(f, "sync"),
        }
    }
}

/// One registered subscriber.
struct Declaration<H> {
    name: String,
    domain: String,
    order: HookOrder,
    seq: u64,
    handler: H,
}

/// The triple index for one namespace.
///
/// Every mutation updates all three maps inside one writer-lock critical
/// section, so no partial index state is ever observable.
struct HookTable<H> {
    /// id -> declaration.
    by_id: HashMap<String, Declaration<H>>,
    /// name -> ids, kept sorted by (order, registration sequence).
    by_name: HashMap<String, Vec<String>>,
    /// name -> domain -> ids.
    by_domain: HashMap<String, HashMap<String, HashSet<String>>>,
    next_seq: u64,
}

impl<H: Clone> HookTable<H> {
    fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            by_domain: HashMap::new(),
            next_seq: 0,
        }
    }

    fn insert(
        &mut self,
        name: String,
        handler: H,
        order: HookOrder,
        id: Option<String>,
        domain: String,
    ) -> String {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

        // Last-write-wins: unindex any prior declaration under this id so it
        // can be re-indexed under its possibly-new name and domain.
        self.remove(&id);

        let seq = self.next_seq;
        self.next_seq += 1;

        self.by_id.insert(
            id.clone(),
            Declaration {
                name: name.clone(),
                domain: domain.clone(),
                order,
                seq,
                handler,
            },
        );

        let by_id = &self.by_id;
        let ids = self.by_name.entry(name.clone()).or_default();
        ids.push(id.clone());
        ids.sort_by_key(|entry| {
            by_id
                .get(entry)
                .map(|d| (d.order, d.seq))
                .unwrap_or((HookOrder(i32::MAX), u64::MAX))
        });

        self.by_domain
            .entry(name)
            .or_default()
            .entry(domain)
            .or_default()
            .insert(id.clone());

        id
    }

    fn remove(&mut self, id: &str) -> bool {
        let Some(decl) = self.by_id.remove(id) else {
            return false;
        };

        if let Some(ids) = self.by_name.get_mut(&decl.name) {
            ids.retain(|entry| entry != id);
            if ids.is_empty() {
                self.by_name.remove(&decl.name);
            }
        }

        if let Some(domains) = self.by_domain.get_mut(&decl.name) {
            if let Some(members) = domains.get_mut(&decl.domain) {
                members.remove(id);
                if members.is_empty() {
                    domains.remove(&decl.domain);
                }
            }
            if domains.is_empty() {
                self.by_domain.remove(&decl.name);
            }
        }

        true
    }

    fn remove_domain(&mut self, name: &str, domain: &str) -> usize {
        let ids: Vec<String> = self
            .by_domain
            .get(name)
            .and_then(|domains| domains.get(domain))
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default();

        for id in &ids {
            self.remove(id);
        }
        ids.len()
    }

    fn flush(&mut self, name: &str) -> usize {
        let ids = self.by_name.get(name).cloned().unwrap_or_default();
        for id in &ids {
            self.remove(id);
        }
        ids.len()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Subscribers for `name` in dispatch order. `by_name` is kept sorted,
    /// so this is a straight indexed walk.
    fn snapshot(&self, name: &str) -> Vec<H> {
        self.by_name
            .get(name)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.by_id.get(id))
                    .map(|decl| decl.handler.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn count(&self, name: &str) -> usize {
        self.by_name.get(name).map(Vec::len).unwrap_or(0)
    }
}

/// The process-wide hook dispatch engine.
///
/// Created once at startup, held by the runtime context, and shared via
/// `Arc`. Registration and teardown are synchronous and atomic per
/// operation; dispatch snapshots the sorted subscriber list before
/// invoking anything, so engine mutations made by a running subscriber
/// affect subsequent dispatches, never the in-flight sequence.
pub struct HookEngine {
    async_hooks: RwLock<HookTable<Arc<dyn Hook>>>,
    sync_hooks: RwLock<HookTable<Arc<dyn SyncHook>>>,
}

impl HookEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self {
            async_hooks: RwLock::new(HookTable::new()),
            sync_hooks: RwLock::new(HookTable::new()),
        }
    }

    /// Registers an async subscriber. Always succeeds; an id collision in
    /// the async namespace silently overwrites the prior declaration.
    ///
    /// Returns the subscriber id (generated unless the binding set one).
    pub fn register(&self, binding: HookBinding<Arc<dyn Hook>>) -> String {
        let HookBinding {
            name,
            handler,
            order,
            id,
            domain,
        } = binding;

        let id = self
            .async_hooks
            .write()
            .insert(name.clone(), handler, order, id, domain.clone());

        debug!(
            hook = %name,
            id = %id,
            domain = %domain,
            order = %order,
            kind = %HookKind::Async,
            "Hook subscriber registered"
        );
        id
    }

    /// Registers a sync subscriber. Identical contract to [`register`] for
    /// the sync namespace.
    ///
    /// [`register`]: Self::register
    pub fn register_sync(&self, binding: HookBinding<Arc<dyn SyncHook>>) -> String {
        let HookBinding {
            name,
            handler,
            order,
            id,
            domain,
        } = binding;

        let id = self
            .sync_hooks
            .write()
            .insert(name.clone(), handler, order, id, domain.clone());

        debug!(
            hook = %name,
            id = %id,
            domain = %domain,
            order = %order,
            kind = %HookKind::Sync,
            "Hook subscriber registered"
        );
        id
    }

    /// Removes the declaration owning `id` from every namespace that holds
    /// it. Idempotent no-op for unknown ids.
    pub fn unregister(&self, id: &str) {
        let removed_async = self.async_hooks.write().remove(id);
        let removed_sync = self.sync_hooks.write().remove(id);

        if removed_async || removed_sync {
            debug!(id = %id, "Hook subscriber unregistered");
        }
    }

    /// Removes every subscriber registered under `(name, domain)` in both
    /// namespaces. Idempotent no-op if the domain holds nothing; other
    /// domains for the same name (including `"default"`) are untouched.
    pub fn unregister_domain(&self, name: &str, domain: &str) {
        let removed = self.async_hooks.write().remove_domain(name, domain)
            + self.sync_hooks.write().remove_domain(name, domain);

        if removed > 0 {
            debug!(hook = %name, domain = %domain, removed, "Hook domain unregistered");
        }
    }

    /// Removes every subscriber for `name` in the given namespace, across
    /// all domains.
    pub fn flush(&self, name: &str, kind: HookKind) {
        let removed = match kind {
            HookKind::Async => self.async_hooks.write().flush(name),
            HookKind::Sync => self.sync_hooks.write().flush(name),
        };

        if removed > 0 {
            debug!(hook = %name, kind = %kind, removed, "Hook flushed");
        }
    }

    /// Alphabetically sorted hook names currently holding at least one
    /// subscriber in the given namespace.
    pub fn list(&self, kind: HookKind) -> Vec<String> {
        match kind {
            HookKind::Async => self.async_hooks.read().names(),
            HookKind::Sync => self.sync_hooks.read().names(),
        }
    }

    /// Number of subscribers attached to `name` in the given namespace.
    pub fn count(&self, name: &str, kind: HookKind) -> usize {
        match kind {
            HookKind::Async => self.async_hooks.read().count(name),
            HookKind::Sync => self.sync_hooks.read().count(name),
        }
    }

    /// Dispatches the async subscribers of `ctx.hook` sequentially over the
    /// context, awaiting each before advancing, and returns the final
    /// context. Fail-fast on subscriber error.
    pub async fn run(&self, mut ctx: HookContext) -> AppResult<HookContext> {
        let handlers = self.async_hooks.read().snapshot(&ctx.hook);
        sequence::drive(handlers, &mut ctx).await?;
        Ok(ctx)
    }

    /// Synchronous analogue of [`run`] over the sync namespace.
    ///
    /// [`run`]: Self::run
    pub fn run_sync(&self, mut ctx: HookContext) -> AppResult<HookContext> {
        let handlers = self.sync_hooks.read().snapshot(&ctx.hook);
        sequence::drive_sync(handlers, &mut ctx)?;
        Ok(ctx)
    }

    /// Creates a [`DomainHandle`] bound to `(name, domain)`.
    pub fn domain(
        self: &Arc<Self>,
        name: impl Into<String>,
        domain: impl Into<String>,
    ) -> DomainHandle {
        DomainHandle::new(Arc::clone(self), name.into(), domain.into())
    }
}

impl Default for HookEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HookEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookEngine")
            .field("async_hooks", &self.async_hooks.read().by_id.len())
            .field("sync_hooks", &self.sync_hooks.read().by_id.len())
            .finish()
    }
}
