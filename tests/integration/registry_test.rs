//! Registry retention modes and guards.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lattice::{ErrorKind, Registry, RegistryAction, RetentionMode};

#[test]
fn clean_mode_forgets_history_mode_remembers() {
    let mut clean: Registry<&str> = Registry::new("components", RetentionMode::Clean);
    clean.register("sidebar", "sidebar", 0).unwrap();
    clean.unregister("sidebar").unwrap();
    assert!(clean.list().is_empty());
    assert!(clean.history().is_empty());

    let mut audited: Registry<&str> = Registry::new("components", RetentionMode::History);
    audited.register("sidebar", "sidebar", 0).unwrap();
    audited.unregister("sidebar").unwrap();
    assert!(audited.list().is_empty());

    let actions: Vec<RegistryAction> = audited.history().iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![RegistryAction::Register, RegistryAction::Unregister]
    );
}

#[test]
fn protected_entry_refuses_removal() {
    let mut registry: Registry<&str> = Registry::new("components", RetentionMode::Clean);
    registry.register("core-id", "core", 0).unwrap();
    registry.protect("core-id").unwrap();

    let err = registry.unregister("core-id").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Protected);
    assert_eq!(registry.list().len(), 1);
}

#[test]
fn banned_id_never_holds_an_entry() {
    let mut registry: Registry<&str> = Registry::new("components", RetentionMode::Clean);
    registry.register("rogue", "rogue", 0).unwrap();
    registry.ban("rogue").unwrap();

    assert!(registry.get("rogue").is_none());
    let err = registry.register("rogue", "rogue", 0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Banned);
}

#[test]
fn list_orders_ascending_with_stable_ties() {
    let mut registry: Registry<&str> = Registry::new("zones", RetentionMode::Clean);
    registry.register("footer", "footer", 1000).unwrap();
    registry.register("header-a", "a", 0).unwrap();
    registry.register("header-b", "b", 0).unwrap();
    registry.register("banner", "banner", -500).unwrap();

    let ids: Vec<&str> = registry.list().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["banner", "header-a", "header-b", "footer"]);
}

#[test]
fn subscribers_see_each_mutation() {
    let notified = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&notified);

    let mut registry: Registry<&str> = Registry::new("routes", RetentionMode::Clean);
    let subscription = registry.subscribe(move |r| {
        seen.store(r.len() + 1, Ordering::SeqCst);
    });

    registry.register("home", "/", 0).unwrap();
    assert_eq!(notified.load(Ordering::SeqCst), 2);

    registry.unsubscribe(subscription);
    registry.register("admin", "/admin", 0).unwrap();
    assert_eq!(notified.load(Ordering::SeqCst), 2);
}
