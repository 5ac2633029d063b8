//! All hook point definitions with their payloads and results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pagehook_core::types::Redirect;

/// Payload keys for hooks that carry a single value.
pub mod keys {
    /// Request path, for `on_request_url`.
    pub const URL: &str = "url";
    /// Requested file path, for `on_404_content_loading`.
    pub const FILE: &str = "file";
    /// Parsed page body, for `on_content_parsed`.
    pub const CONTENT: &str = "content";
    /// Rendered document, for `on_page_rendered`.
    pub const OUTPUT: &str = "output";
}

/// Enumeration of all hook points of the page-build pipeline, in firing
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Fired once the site configuration is loaded. Payload: config map.
    OnConfigLoaded,
    /// Fired once the request path is resolved. Payload: `url`.
    OnRequestUrl,
    /// Fired before not-found content is loaded. Payload: `file`. Can halt.
    #[serde(rename = "on_404_content_loading")]
    On404ContentLoading,
    /// Fired to collect meta headers. Payload: meta key → label.
    OnMetaHeaders,
    /// Fired after the front matter is parsed. Payload: meta key → value.
    OnMetaParsed,
    /// Fired after the page body is parsed. Payload: `content`.
    OnContentParsed,
    /// Fired before the template is rendered. Payload: template variables.
    OnPageRendering,
    /// Fired after the page is rendered. Payload: `output`.
    OnPageRendered,
}

impl HookPoint {
    /// Every hook point in the order the pipeline fires them.
    pub const ALL: [HookPoint; 8] = [
        Self::OnConfigLoaded,
        Self::OnRequestUrl,
        Self::On404ContentLoading,
        Self::OnMetaHeaders,
        Self::OnMetaParsed,
        Self::OnContentParsed,
        Self::OnPageRendering,
        Self::OnPageRendered,
    ];

    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnConfigLoaded => "on_config_loaded",
            Self::OnRequestUrl => "on_request_url",
            Self::On404ContentLoading => "on_404_content_loading",
            Self::OnMetaHeaders => "on_meta_headers",
            Self::OnMetaParsed => "on_meta_parsed",
            Self::OnContentParsed => "on_content_parsed",
            Self::OnPageRendering => "on_page_rendering",
            Self::OnPageRendered => "on_page_rendered",
        }
    }

    /// Returns whether a handler may end the request from this hook.
    pub fn can_halt(&self) -> bool {
        matches!(self, Self::On404ContentLoading)
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload passed to hook handlers: a flexible key-value map.
///
/// Mapping-style hooks (config, meta headers, parsed meta, template
/// variables) use the whole map as their value. Single-value hooks store
/// their value under one of the [`keys`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPayload {
    /// The hook point being fired.
    pub hook: HookPoint,
    /// Arbitrary data keyed by string.
    pub data: BTreeMap<String, Value>,
}

impl HookPayload {
    /// Creates a new hook payload.
    pub fn new(hook: HookPoint) -> Self {
        Self {
            hook,
            data: BTreeMap::new(),
        }
    }

    /// Creates a payload from a string mapping.
    pub fn from_strings<'a, I>(hook: HookPoint, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self { hook, data }
    }

    /// Inserts a typed data value.
    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, Value::String(value.to_string()))
    }

    /// Gets a data value by key.
    pub fn get_data(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Gets a string data value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets a string data value, or the empty string.
    pub fn string_or_empty(&self, key: &str) -> &str {
        self.get_string(key).unwrap_or_default()
    }

    /// Merges handler modifications into the payload.
    pub fn merge(&mut self, modifications: BTreeMap<String, Value>) {
        self.data.extend(modifications);
    }

    /// Returns the string entries of the payload, skipping other values.
    pub fn string_entries(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.data
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
    }
}

/// Action returned by a hook handler telling the dispatcher what to do next.
#[derive(Debug, Clone)]
pub enum HookAction {
    /// Continue to the next handler.
    Continue,
    /// Continue with modified payload data. The modifications are merged
    /// into the payload before the next handler runs.
    ContinueWith(BTreeMap<String, Value>),
    /// Halt: no further handlers or hooks run; the request ends with the
    /// given redirect.
    Halt {
        /// Reason for halting.
        reason: String,
        /// Response that replaces the page.
        redirect: Redirect,
    },
}

/// Result returned from a hook handler invocation.
#[derive(Debug, Clone)]
pub struct HookResult {
    /// The action the handler wants the dispatcher to take.
    pub action: HookAction,
    /// Optional request-scoped state to store for the handler's plugin.
    /// Must be a JSON object; its fields are merged into the plugin's state.
    pub output: Option<Value>,
    /// Plugin ID that produced this result.
    pub plugin_id: String,
}

impl HookResult {
    /// Creates a continue result.
    pub fn continue_execution(plugin_id: &str) -> Self {
        Self {
            action: HookAction::Continue,
            output: None,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a continue-with-modification result.
    pub fn continue_with(plugin_id: &str, modifications: BTreeMap<String, Value>) -> Self {
        Self {
            action: HookAction::ContinueWith(modifications),
            output: None,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a continue-with-modification result setting a single key.
    pub fn continue_with_value(plugin_id: &str, key: &str, value: Value) -> Self {
        let mut modifications = BTreeMap::new();
        modifications.insert(key.to_string(), value);
        Self::continue_with(plugin_id, modifications)
    }

    /// Creates a halt result.
    pub fn halt(plugin_id: &str, reason: &str, redirect: Redirect) -> Self {
        Self {
            action: HookAction::Halt {
                reason: reason.to_string(),
                redirect,
            },
            output: None,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a continue result with output data.
    pub fn continue_with_output(plugin_id: &str, output: Value) -> Self {
        Self {
            action: HookAction::Continue,
            output: Some(output),
            plugin_id: plugin_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_not_found_hook_can_halt() {
        let haltable: Vec<HookPoint> = HookPoint::ALL
            .into_iter()
            .filter(HookPoint::can_halt)
            .collect();
        assert_eq!(haltable, vec![HookPoint::On404ContentLoading]);
    }

    #[test]
    fn test_hook_names_match_serde() {
        for hook in HookPoint::ALL {
            let encoded = serde_json::to_value(hook).expect("serialize");
            assert_eq!(encoded, json!(hook.as_str()));
        }
    }

    #[test]
    fn test_payload_merge_overrides() {
        let mut payload = HookPayload::new(HookPoint::OnPageRendered)
            .with_string(keys::OUTPUT, "<html></html>");
        let mut mods = BTreeMap::new();
        mods.insert(keys::OUTPUT.to_string(), json!("<html>!</html>"));
        payload.merge(mods);
        assert_eq!(payload.get_string(keys::OUTPUT), Some("<html>!</html>"));
    }

    #[test]
    fn test_string_entries_skip_non_strings() {
        let payload = HookPayload::new(HookPoint::OnPageRendering)
            .with_string("fb_comments", "")
            .with_data("meta", json!({"title": "x"}));
        let entries: Vec<_> = payload.string_entries().collect();
        assert_eq!(entries, vec![("fb_comments".to_string(), String::new())]);
    }
}
