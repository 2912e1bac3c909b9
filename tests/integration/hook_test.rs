//! Dispatch ordering, flush, and failure propagation.

use futures::future::BoxFuture;

use lattice::{
    AppError, AppResult, ErrorKind, HookBinding, HookContext, HookEngine, HookFn, HookKind,
    HookOrder,
};

use crate::helpers::{recorded, tag, trace};

#[tokio::test]
async fn negative_order_runs_before_neutral() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("init", tag(&trace, "cbA")).id("a"));
    engine.register(
        HookBinding::new("init", tag(&trace, "cbB"))
            .id("b")
            .order(HookOrder::HIGH),
    );

    engine.run(HookContext::new("init")).await.unwrap();
    assert_eq!(recorded(&trace), vec!["cbB", "cbA"]);
}

#[tokio::test]
async fn distinct_orders_dispatch_ascending() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("boot", tag(&trace, "low")).order(HookOrder::LOW));
    engine.register(HookBinding::new("boot", tag(&trace, "core")).order(HookOrder::CORE));
    engine.register(HookBinding::new("boot", tag(&trace, "neutral")));
    engine.register(HookBinding::new("boot", tag(&trace, "highest")).order(HookOrder::HIGHEST));

    engine.run(HookContext::new("boot")).await.unwrap();
    assert_eq!(recorded(&trace), vec!["core", "highest", "neutral", "low"]);
}

#[tokio::test]
async fn flush_leaves_zero_invocations() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("init", tag(&trace, "a")).domain("PluginX"));
    engine.register(HookBinding::new("init", tag(&trace, "b")).domain("PluginY"));
    engine.register(HookBinding::new("init", tag(&trace, "c")));

    engine.flush("init", HookKind::Async);
    engine.run(HookContext::new("init")).await.unwrap();

    assert!(recorded(&trace).is_empty());
    assert!(engine.list(HookKind::Async).is_empty());
}

#[test]
fn list_reflects_current_subscribers_only() {
    let engine = HookEngine::new();
    let trace = trace();

    let id = engine.register(HookBinding::new("beta", tag(&trace, "b")));
    engine.register(HookBinding::new("alpha", tag(&trace, "a")));

    assert_eq!(engine.list(HookKind::Async), vec!["alpha", "beta"]);

    engine.unregister(&id);
    assert_eq!(engine.list(HookKind::Async), vec!["alpha"]);
}

#[tokio::test]
async fn failing_subscriber_stops_the_chain() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("init", tag(&trace, "ran")).order(-1));
    engine.register(HookBinding::new(
        "init",
        HookFn::from_sync(|_| Err(AppError::hook("subscriber refused"))),
    ));
    engine.register(HookBinding::new("init", tag(&trace, "skipped")).order(1));

    let err = engine.run(HookContext::new("init")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(recorded(&trace), vec!["ran"]);
}

fn slow_increment(ctx: &mut HookContext) -> BoxFuture<'_, AppResult<()>> {
    Box::pin(async move {
        tokio::task::yield_now().await;
        let n = ctx.get_i64("n").unwrap_or(0);
        tokio::task::yield_now().await;
        ctx.set("n", serde_json::json!(n + 1));
        Ok(())
    })
}

#[tokio::test]
async fn concurrent_runs_thread_independent_contexts() {
    let engine = HookEngine::new();
    engine.register(HookBinding::new("tick", HookFn::wrap(slow_increment)));
    engine.register(HookBinding::new("tick", HookFn::wrap(slow_increment)));

    let (left, right) = tokio::join!(
        engine.run(HookContext::new("tick").with_i64("n", 100)),
        engine.run(HookContext::new("tick")),
    );

    assert_eq!(left.unwrap().get_i64("n"), Some(102));
    assert_eq!(right.unwrap().get_i64("n"), Some(2));
}

#[test]
fn sync_namespace_dispatches_synchronously() {
    let engine = HookEngine::new();

    engine.register_sync(HookBinding::new(
        "before-config",
        lattice::SyncHookFn::wrap(|ctx| {
            ctx.set("validated", serde_json::json!(true));
            Ok(())
        }),
    ));

    let ctx = engine
        .run_sync(HookContext::new("before-config"))
        .unwrap();
    assert_eq!(ctx.get_bool("validated"), Some(true));
}
