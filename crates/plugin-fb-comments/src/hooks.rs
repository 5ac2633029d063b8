//! Hook handler for the comments plugin.

use serde_json::json;

use pagehook_core::config::site::keys as config_keys;
use pagehook_core::result::AppResult;
use pagehook_core::splice::BODY_CLOSE;
use pagehook_plugin::prelude::*;

use crate::markup::{SDK_SCRIPT, normalize_base_url, widget};

/// Plugin identifier.
pub const PLUGIN_ID: &str = "fb-comments";

/// Template variable receiving the widget.
pub const TEMPLATE_VAR: &str = "fb_comments";

/// Front-matter flag that turns comments on.
pub const FLAG: ConditionalMarkup = ConditionalMarkup::new(PLUGIN_ID, "fbcomments", "FB-Comments");

/// Hook points the handler listens on.
pub const HOOKS: [HookPoint; 6] = [
    HookPoint::OnConfigLoaded,
    HookPoint::OnRequestUrl,
    HookPoint::OnMetaHeaders,
    HookPoint::OnMetaParsed,
    HookPoint::OnPageRendering,
    HookPoint::OnPageRendered,
];

/// Captures the page URL and injects the comments markup.
#[derive(Debug)]
pub struct FbCommentsHandler {
    priority: i32,
}

impl FbCommentsHandler {
    /// Creates the handler.
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

impl HookHandler for FbCommentsHandler {
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
        let result = match payload.hook {
            HookPoint::OnConfigLoaded => {
                let base_url = normalize_base_url(payload.string_or_empty(config_keys::BASE_URL));
                HookResult::continue_with_output(PLUGIN_ID, json!({ "base_url": base_url }))
            }
            HookPoint::OnRequestUrl => HookResult::continue_with_output(
                PLUGIN_ID,
                json!({ "url": payload.string_or_empty(keys::URL) }),
            ),
            HookPoint::OnMetaHeaders => FLAG.declare_header(),
            HookPoint::OnMetaParsed => FLAG.capture_flag(payload),
            HookPoint::OnPageRendering => {
                let page_url = format!(
                    "{}{}",
                    ctx.get_string(PLUGIN_ID, "base_url"),
                    ctx.get_string(PLUGIN_ID, "url")
                );
                FLAG.expose(ctx, TEMPLATE_VAR, &widget(&page_url))
            }
            HookPoint::OnPageRendered => {
                FLAG.splice(ctx, payload, BODY_CLOSE, &format!("{SDK_SCRIPT}\n"))
            }
            _ => HookResult::continue_execution(PLUGIN_ID),
        };

        Ok(result)
    }

    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
