//! The action sequence — the ordered, sequential execution shared by
//! `run` and `run_sync`.

use std::sync::Arc;

use tracing::{debug, error};

use lattice_core::AppResult;

use crate::context::HookContext;
use crate::handler::{Hook, SyncHook};

/// Drives the async subscriber chain over one context.
///
/// Fail-fast: the first subscriber error aborts the sequence and propagates;
/// remaining subscribers are not invoked.
pub(crate) async fn drive(handlers: Vec<Arc<dyn Hook>>, ctx: &mut HookContext) -> AppResult<()> {
    debug!(hook = %ctx.hook, subscribers = handlers.len(), "Dispatching hook");

    for handler in handlers {
        if let Err(err) = handler.run(ctx).await {
            error!(hook = %ctx.hook, error = %err, "Hook subscriber failed, aborting sequence");
            return Err(err);
        }
    }

    Ok(())
}

/// Drives the sync subscriber chain over one context. Same fail-fast policy
/// as [`drive`].
pub(crate) fn drive_sync(handlers: Vec<Arc<dyn SyncHook>>, ctx: &mut HookContext) -> AppResult<()> {
    debug!(hook = %ctx.hook, subscribers = handlers.len(), "Dispatching sync hook");

    for handler in handlers {
        if let Err(err) = handler.run(ctx) {
            error!(hook = %ctx.hook, error = %err, "Hook subscriber failed, aborting sequence");
            return Err(err);
        }
    }

    Ok(())
}
