//! Flag-gated markup injection shared by the widget plugins.
//!
//! A widget plugin declares one front-matter header, reads it back as an
//! on/off flag, and then either exposes a fragment as a template variable,
//! splices it into the rendered document, or both.

use serde_json::json;
use tracing::debug;

use pagehook_core::splice::splice_before;
use pagehook_core::types::is_truthy;

use crate::context::HookContext;
use crate::hooks::definitions::{HookPayload, HookResult, keys};

/// State key holding the captured flag.
const ENABLED: &str = "enabled";

/// A meta flag and the plugin that owns it.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalMarkup {
    plugin_id: &'static str,
    meta_key: &'static str,
    label: &'static str,
}

impl ConditionalMarkup {
    /// Creates a flag bound to `meta_key`, written as `label` in front matter.
    pub const fn new(plugin_id: &'static str, meta_key: &'static str, label: &'static str) -> Self {
        Self {
            plugin_id,
            meta_key,
            label,
        }
    }

    /// Declares the header. Used at `on_meta_headers`.
    pub fn declare_header(&self) -> HookResult {
        HookResult::continue_with_value(self.plugin_id, self.meta_key, json!(self.label))
    }

    /// Captures the flag from parsed metadata. Used at `on_meta_parsed`.
    pub fn capture_flag(&self, payload: &HookPayload) -> HookResult {
        let enabled = is_truthy(payload.get_string(self.meta_key));
        HookResult::continue_with_output(self.plugin_id, json!({ ENABLED: enabled }))
    }

    /// Whether the flag was captured as on for this request.
    pub fn is_enabled(&self, ctx: &HookContext) -> bool {
        ctx.get_bool(self.plugin_id, ENABLED)
    }

    /// Sets template variable `var` to `markup` when the flag is on, and to
    /// the empty string otherwise.
    pub fn expose(&self, ctx: &HookContext, var: &str, markup: &str) -> HookResult {
        let value = if self.is_enabled(ctx) { markup } else { "" };
        HookResult::continue_with_value(self.plugin_id, var, json!(value))
    }

    /// Inserts `fragment` before the first `anchor` of the rendered document
    /// when the flag is on. A missing anchor leaves the document unchanged.
    pub fn splice(
        &self,
        ctx: &HookContext,
        payload: &HookPayload,
        anchor: &str,
        fragment: &str,
    ) -> HookResult {
        if !self.is_enabled(ctx) {
            return HookResult::continue_execution(self.plugin_id);
        }

        match splice_before(payload.string_or_empty(keys::OUTPUT), anchor, fragment) {
            Some(output) => {
                HookResult::continue_with_value(self.plugin_id, keys::OUTPUT, json!(output))
            }
            None => {
                debug!(plugin_id = %self.plugin_id, anchor = %anchor, "Anchor not found, skipping splice");
                HookResult::continue_execution(self.plugin_id)
            }
        }
    }
}
