//! Request-scoped context shared by every hook of one page request.
//!
//! Plugins keep no fields of their own between hooks. Whatever a plugin
//! learns in an early hook (the normalized base URL, the request path, a
//! meta flag) is returned as handler output and stored here under the
//! plugin's id. A fresh context is built for every request, so nothing
//! leaks from one request into the next.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Per-request state threaded through all hook invocations.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Identifier used to correlate log lines of one request.
    pub request_id: Uuid,
    /// When the request entered the pipeline.
    pub started_at: DateTime<Utc>,
    /// Plugin ID → captured state.
    state: HashMap<String, Map<String, Value>>,
}

impl HookContext {
    /// Creates an empty context for a new request.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: HashMap::new(),
        }
    }

    /// Milliseconds since the request entered the pipeline.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }

    /// Merges handler output into a plugin's state.
    ///
    /// Object fields replace existing fields of the same name. Non-object
    /// output is ignored.
    pub fn merge_state(&mut self, plugin_id: &str, output: Value) {
        match output {
            Value::Object(fields) => {
                self.state
                    .entry(plugin_id.to_string())
                    .or_default()
                    .extend(fields);
            }
            other => {
                tracing::warn!(
                    plugin_id = %plugin_id,
                    output = %other,
                    "Ignoring non-object handler output"
                );
            }
        }
    }

    /// Returns the state captured for a plugin.
    pub fn state(&self, plugin_id: &str) -> Option<&Map<String, Value>> {
        self.state.get(plugin_id)
    }

    /// Gets a state value for a plugin.
    pub fn get(&self, plugin_id: &str, key: &str) -> Option<&Value> {
        self.state(plugin_id).and_then(|s| s.get(key))
    }

    /// Gets a string state value, or the empty string.
    pub fn get_string(&self, plugin_id: &str, key: &str) -> &str {
        self.get(plugin_id, key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Gets a bool state value, `false` when absent.
    pub fn get_bool(&self, plugin_id: &str, key: &str) -> bool {
        self.get(plugin_id, key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Gets a list of strings, skipping non-string entries.
    pub fn get_strings(&self, plugin_id: &str, key: &str) -> Vec<String> {
        self.get(plugin_id, key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for HookContext {
    fn default() -> Self {
        Self::new()
    }
}
