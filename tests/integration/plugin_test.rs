//! Full plugin lifecycle through the facade: bootstrap, dispatch, teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lattice_plugin_sdk::plugin_info;

use lattice::{
    AppConfig, AppContext, AppResult, ErrorKind, HookBinding, HookContext, HookFn, HookOrder,
    Plugin, PluginInfo, PluginManager, RegistryAction, lifecycle,
};

/// A plugin contributing one route to the `routes-init` dispatch.
#[derive(Debug)]
struct RoutePlugin {
    id: &'static str,
    route: &'static str,
    hook_order: HookOrder,
}

impl RoutePlugin {
    fn new(id: &'static str, route: &'static str, hook_order: HookOrder) -> Arc<Self> {
        Arc::new(Self {
            id,
            route,
            hook_order,
        })
    }
}

#[async_trait]
impl Plugin for RoutePlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: self.id,
            name: self.id,
            version: "1.0.0",
            description: "contributes one route",
            author: "tests"
        )
    }

    async fn activate(&self, ctx: &AppContext) -> AppResult<()> {
        let route = self.route;
        ctx.hooks().register(
            HookBinding::new(
                "routes-init",
                HookFn::from_sync(move |hook_ctx| {
                    let mut routes = hook_ctx
                        .get("routes")
                        .and_then(|v| v.as_array().cloned())
                        .unwrap_or_default();
                    routes.push(serde_json::json!(route));
                    hook_ctx.set("routes", serde_json::Value::Array(routes));
                    Ok(())
                }),
            )
            .order(self.hook_order)
            .domain(self.id),
        );
        Ok(())
    }
}

fn collected_routes(ctx: &HookContext) -> Vec<String> {
    ctx.get("routes")
        .and_then(|v| v.as_array())
        .map(|routes| {
            routes
                .iter()
                .filter_map(|r| r.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn bootstrap_then_dispatch_collects_routes_in_order() {
    let manager = PluginManager::new(AppContext::new(AppConfig::default()));

    let ready_count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&ready_count);
    manager.context().hooks().register(HookBinding::new(
        lifecycle::PLUGIN_READY,
        HookFn::from_sync(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    ));

    manager
        .bootstrap(vec![
            RoutePlugin::new("files", "/files", HookOrder::NEUTRAL),
            RoutePlugin::new("admin", "/admin", HookOrder::HIGH),
        ])
        .await
        .unwrap();

    assert_eq!(ready_count.load(Ordering::SeqCst), 1);

    let ctx = manager
        .context()
        .hooks()
        .run(HookContext::new("routes-init"))
        .await
        .unwrap();
    assert_eq!(collected_routes(&ctx), vec!["/admin", "/files"]);
}

#[tokio::test]
async fn unloading_one_plugin_removes_only_its_contribution() {
    let manager = PluginManager::new(AppContext::new(AppConfig::default()));

    manager
        .bootstrap(vec![
            RoutePlugin::new("files", "/files", HookOrder::NEUTRAL),
            RoutePlugin::new("admin", "/admin", HookOrder::HIGH),
        ])
        .await
        .unwrap();

    manager.unload("admin").await.unwrap();

    let ctx = manager
        .context()
        .hooks()
        .run(HookContext::new("routes-init"))
        .await
        .unwrap();
    assert_eq!(collected_routes(&ctx), vec!["/files"]);
}

#[tokio::test]
async fn protected_plugin_survives_unload_attempt() {
    let manager = PluginManager::new(AppContext::new(AppConfig::default()));

    manager
        .load(RoutePlugin::new("files", "/files", HookOrder::NEUTRAL))
        .await
        .unwrap();
    manager.registry().protect("files").unwrap();

    let err = manager.unload("files").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Protected);

    let ctx = manager
        .context()
        .hooks()
        .run(HookContext::new("routes-init"))
        .await
        .unwrap();
    assert_eq!(collected_routes(&ctx), vec!["/files"]);
}

#[tokio::test]
async fn plugin_registry_audits_the_lifecycle() {
    let manager = PluginManager::new(AppContext::new(AppConfig::default()));

    manager
        .load(RoutePlugin::new("files", "/files", HookOrder::NEUTRAL))
        .await
        .unwrap();
    manager.unload("files").await.unwrap();

    let actions: Vec<RegistryAction> = manager
        .registry()
        .history()
        .iter()
        .map(|r| r.action)
        .collect();
    assert_eq!(
        actions,
        vec![RegistryAction::Register, RegistryAction::Unregister]
    );
}

#[tokio::test]
async fn unload_all_tears_everything_down() {
    let manager = PluginManager::new(AppContext::new(AppConfig::default()));

    manager
        .bootstrap(vec![
            RoutePlugin::new("files", "/files", HookOrder::NEUTRAL),
            RoutePlugin::new("admin", "/admin", HookOrder::HIGH),
        ])
        .await
        .unwrap();

    manager.unload_all().await.unwrap();

    assert_eq!(manager.registry().count(), 0);
    let ctx = manager
        .context()
        .hooks()
        .run(HookContext::new("routes-init"))
        .await
        .unwrap();
    assert!(collected_routes(&ctx).is_empty());
}
