//! Domain-scoped bulk teardown.

use std::sync::Arc;

use lattice::{HookBinding, HookContext, HookEngine, HookOrder};

use crate::helpers::{recorded, tag, trace};

#[tokio::test]
async fn unregister_domain_removes_exactly_one_group() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("init", tag(&trace, "cb1")).domain("PluginX"));
    engine.register(HookBinding::new("cleanup", tag(&trace, "cb2")).domain("PluginX"));

    engine.unregister_domain("init", "PluginX");

    engine.run(HookContext::new("init")).await.unwrap();
    engine.run(HookContext::new("cleanup")).await.unwrap();
    assert_eq!(recorded(&trace), vec!["cb2"]);
}

#[tokio::test]
async fn default_domain_survives_group_teardown() {
    let engine = HookEngine::new();
    let trace = trace();

    engine.register(HookBinding::new("init", tag(&trace, "plugin")).domain("PluginX"));
    engine.register(HookBinding::new("init", tag(&trace, "default")));

    engine.unregister_domain("init", "PluginX");
    engine.unregister_domain("init", "PluginX");

    engine.run(HookContext::new("init")).await.unwrap();
    assert_eq!(recorded(&trace), vec!["default"]);
}

#[tokio::test]
async fn domain_handle_disposes_both_namespaces() {
    let engine = Arc::new(HookEngine::new());
    let trace = trace();

    let handle = engine.domain("init", "widget-7");
    handle.register(tag(&trace, "async"), HookOrder::NEUTRAL);
    handle.register_sync(
        lattice::SyncHookFn::wrap(|_| Ok(())),
        HookOrder::NEUTRAL,
    );

    assert_eq!(engine.count("init", lattice::HookKind::Async), 1);
    assert_eq!(engine.count("init", lattice::HookKind::Sync), 1);

    handle.dispose();

    assert_eq!(engine.count("init", lattice::HookKind::Async), 0);
    assert_eq!(engine.count("init", lattice::HookKind::Sync), 0);
}
