//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Whether `bootstrap` activates registered plugins on startup.
    #[serde(default = "default_true")]
    pub auto_activate: bool,
    /// Whether a plugin activation failure aborts the remaining bootstrap
    /// sequence. When `false` the failed plugin is skipped and logged.
    #[serde(default = "default_true")]
    pub fail_fast: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auto_activate: default_true(),
            fail_fast: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
