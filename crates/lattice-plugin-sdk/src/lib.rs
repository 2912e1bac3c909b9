//! # lattice-plugin-sdk
//!
//! SDK for developing Lattice plugins.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lattice_plugin_sdk::prelude::*;
//!
//! #[derive(Debug)]
//! struct MyPlugin;
//!
//! #[async_trait]
//! impl Plugin for MyPlugin {
//!     fn info(&self) -> PluginInfo {
//!         plugin_info!(
//!             id: "my-plugin",
//!             name: "My Plugin",
//!             version: "1.0.0",
//!             description: "Does things",
//!             author: "Dev"
//!         )
//!     }
//!
//!     async fn activate(&self, ctx: &AppContext) -> AppResult<()> {
//!         ctx.hooks().register(
//!             HookBinding::new("routes-init", HookFn::from_sync(|ctx| {
//!                 ctx.set("route", serde_json::json!("/my-plugin"));
//!                 Ok(())
//!             }))
//!             .domain("my-plugin"),
//!         );
//!         Ok(())
//!     }
//! }
//! ```

pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use lattice_core::{AppError, AppResult};
    pub use lattice_hook::{
        DomainHandle, Hook, HookBinding, HookContext, HookEngine, HookFn, HookKind, HookOrder,
        SyncHook, SyncHookFn,
    };
    pub use lattice_plugin::lifecycle::{PLUGIN_INIT, PLUGIN_READY, PLUGIN_UNREGISTER};
    pub use lattice_plugin::{AppContext, Plugin, PluginInfo, PluginManager, PluginRegistry};
}
