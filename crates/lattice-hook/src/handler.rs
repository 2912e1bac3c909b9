//! Subscriber traits and closure adapters.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use lattice_core::AppResult;

use crate::context::HookContext;

/// An async hook subscriber.
///
/// Implementations receive exclusive access to the dispatch context and may
/// mutate it in place. Returning an error aborts the remaining sequence.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Handles one dispatch of the hook this subscriber is attached to.
    async fn run(&self, ctx: &mut HookContext) -> AppResult<()>;
}

/// A sync hook subscriber, for the synchronous namespace.
pub trait SyncHook: Send + Sync {
    /// Handles one dispatch of the hook this subscriber is attached to.
    fn run(&self, ctx: &mut HookContext) -> AppResult<()>;
}

type BoxedAsyncFn =
    Box<dyn for<'a> Fn(&'a mut HookContext) -> BoxFuture<'a, AppResult<()>> + Send + Sync>;

/// A closure-based async subscriber for quick registration.
pub struct HookFn {
    handler: BoxedAsyncFn,
}

impl HookFn {
    /// Wraps an async handler function into a subscriber.
    ///
    /// The handler returns a boxed future borrowing the context. Named
    /// functions coerce to the higher-ranked signature directly:
    ///
    /// ```rust,ignore
    /// fn enrich(ctx: &mut HookContext) -> BoxFuture<'_, AppResult<()>> {
    ///     Box::pin(async move {
    ///         ctx.set("stage", serde_json::json!("enriched"));
    ///         Ok(())
    ///     })
    /// }
    /// engine.register(HookBinding::new("init", HookFn::wrap(enrich)));
    /// ```
    pub fn wrap<F>(handler: F) -> Arc<dyn Hook>
    where
        F: for<'a> Fn(&'a mut HookContext) -> BoxFuture<'a, AppResult<()>>
            + Send
            + Sync
            + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
        })
    }

    /// Wraps a non-awaiting closure into an async subscriber.
    ///
    /// Most subscribers only mutate the context; this spares them the
    /// boxed-future ceremony.
    pub fn from_sync<F>(handler: F) -> Arc<dyn Hook>
    where
        F: Fn(&mut HookContext) -> AppResult<()> + Send + Sync + 'static,
    {
        Arc::new(SyncAdapter { handler })
    }
}

/// Adapter running a non-awaiting closure in the async namespace.
struct SyncAdapter<F> {
    handler: F,
}

#[async_trait]
impl<F> Hook for SyncAdapter<F>
where
    F: Fn(&mut HookContext) -> AppResult<()> + Send + Sync,
{
    async fn run(&self, ctx: &mut HookContext) -> AppResult<()> {
        (self.handler)(ctx)
    }
}

impl std::fmt::Debug for HookFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookFn").field("handler", &"<closure>").finish()
    }
}

#[async_trait]
impl Hook for HookFn {
    async fn run(&self, ctx: &mut HookContext) -> AppResult<()> {
        (self.handler)(ctx).await
    }
}

type BoxedSyncFn = Box<dyn Fn(&mut HookContext) -> AppResult<()> + Send + Sync>;

/// A closure-based sync subscriber for quick registration.
pub struct SyncHookFn {
    handler: BoxedSyncFn,
}

impl SyncHookFn {
    /// Wraps a closure into a sync subscriber.
    pub fn wrap<F>(handler: F) -> Arc<dyn SyncHook>
    where
        F: Fn(&mut HookContext) -> AppResult<()> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
        })
    }
}

impl std::fmt::Debug for SyncHookFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncHookFn")
            .field("handler", &"<closure>")
            .finish()
    }
}

impl SyncHook for SyncHookFn {
    fn run(&self, ctx: &mut HookContext) -> AppResult<()> {
        (self.handler)(ctx)
    }
}
