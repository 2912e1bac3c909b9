//! Lifecycle dispatch points fired by the plugin manager.

/// Fired after each plugin activates, with `"plugin"` set to its id.
pub const PLUGIN_INIT: &str = "plugin-init";

/// Fired once after the bootstrap sequence has loaded every plugin.
pub const PLUGIN_READY: &str = "plugin-ready";

/// Fired while a plugin unloads, before its hook registrations are torn
/// down, with `"plugin"` set to its id. A plugin's own subscribers still
/// run for this dispatch.
pub const PLUGIN_UNREGISTER: &str = "plugin-unregister";
