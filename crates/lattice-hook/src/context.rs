//! The shared context threaded through a hook's subscriber chain.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Mutable context passed to every subscriber of a dispatch.
///
/// Each `run`/`run_sync` call threads one context through its subscriber
/// chain; subscribers receive exclusive access and mutate it in place. The
/// common pattern is one payload value enriched by every subscriber in turn.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// The hook name being dispatched.
    pub hook: String,
    /// Arbitrary data keyed by string.
    pub data: HashMap<String, serde_json::Value>,
    /// When the context was created.
    pub started_at: DateTime<Utc>,
}

impl HookContext {
    /// Creates a new context for a hook name.
    pub fn new(hook: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            data: HashMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Inserts a typed data value (builder form).
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value (builder form).
    pub fn with_str(self, key: &str, value: &str) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts an integer value (builder form).
    pub fn with_i64(self, key: &str, value: i64) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts a boolean value (builder form).
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Sets a data value in place. Subscribers use this to enrich the
    /// context mid-sequence.
    pub fn set(&mut self, key: &str, value: serde_json::Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Gets a data value by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a string data value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 data value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool data value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }
}
