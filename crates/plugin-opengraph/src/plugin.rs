//! OpenGraph plugin and its hook handler.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::debug;

use pagehook_core::config::site::keys::{BASE_URL, OPENGRAPH_DEFAULT_IMAGE, SITE_TITLE};
use pagehook_core::result::AppResult;
use pagehook_core::splice::{HEAD_CLOSE, splice_before};
use pagehook_core::types::is_truthy;
use pagehook_plugin::prelude::*;

use crate::images;
use crate::tags::OpenGraph;

/// Plugin identifier.
pub const PLUGIN_ID: &str = "opengraph";

/// Meta key of the explicit share image.
pub const IMAGE_KEY: &str = "image";

const IMAGE_LABEL: &str = "Image";

const HOOKS: [HookPoint; 7] = [
    HookPoint::OnConfigLoaded,
    HookPoint::OnRequestUrl,
    HookPoint::On404ContentLoading,
    HookPoint::OnMetaHeaders,
    HookPoint::OnMetaParsed,
    HookPoint::OnContentParsed,
    HookPoint::OnPageRendered,
];

// Request-scoped state keys.
const URL: &str = "url";
const IS_ERROR: &str = "is_error";
const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const IMAGES: &str = "images";

/// Collects page data across hooks and writes the tags.
#[derive(Debug)]
pub struct OpenGraphHandler {
    priority: i32,
}

impl OpenGraphHandler {
    fn on_config_loaded(payload: &HookPayload) -> HookResult {
        let base_url = payload.string_or_empty(BASE_URL);
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
        let default_image = payload
            .get_string(OPENGRAPH_DEFAULT_IMAGE)
            .map_or(Value::Null, |image| json!(image));

        HookResult::continue_with_output(
            PLUGIN_ID,
            json!({
                BASE_URL: base_url,
                SITE_TITLE: payload.string_or_empty(SITE_TITLE),
                OPENGRAPH_DEFAULT_IMAGE: default_image,
            }),
        )
    }

    fn on_meta_parsed(payload: &HookPayload) -> HookResult {
        let image = payload.get_string(IMAGE_KEY);
        let image = if is_truthy(image) { json!(image) } else { Value::Null };

        HookResult::continue_with_output(
            PLUGIN_ID,
            json!({
                TITLE: payload.string_or_empty(TITLE),
                DESCRIPTION: payload.string_or_empty(DESCRIPTION),
                IMAGE_KEY: image,
            }),
        )
    }

    fn on_content_parsed(ctx: &HookContext, payload: &HookPayload) -> HookResult {
        let state = |key| ctx.get(PLUGIN_ID, key).and_then(Value::as_str);

        let candidates = images::candidates(
            ctx.get_string(PLUGIN_ID, BASE_URL),
            ctx.get_string(PLUGIN_ID, URL),
            state(IMAGE_KEY),
            payload.string_or_empty(keys::CONTENT),
            state(OPENGRAPH_DEFAULT_IMAGE),
        );

        HookResult::continue_with_output(PLUGIN_ID, json!({ IMAGES: candidates }))
    }

    fn on_page_rendered(ctx: &HookContext, payload: &HookPayload) -> HookResult {
        if ctx.get_bool(PLUGIN_ID, IS_ERROR) {
            debug!("Not-found page, no OpenGraph tags");
            return HookResult::continue_execution(PLUGIN_ID);
        }

        let og = OpenGraph {
            base_url: ctx.get_string(PLUGIN_ID, BASE_URL).to_string(),
            url: ctx.get_string(PLUGIN_ID, URL).to_string(),
            title: ctx.get_string(PLUGIN_ID, TITLE).to_string(),
            description: ctx.get_string(PLUGIN_ID, DESCRIPTION).to_string(),
            site_name: ctx.get_string(PLUGIN_ID, SITE_TITLE).to_string(),
            images: ctx.get_strings(PLUGIN_ID, IMAGES),
        };

        let block = format!("\n{}", og.render());
        match splice_before(payload.string_or_empty(keys::OUTPUT), HEAD_CLOSE, &block) {
            Some(output) => HookResult::continue_with_value(PLUGIN_ID, keys::OUTPUT, json!(output)),
            None => {
                debug!("No </head> in output, skipping OpenGraph tags");
                HookResult::continue_execution(PLUGIN_ID)
            }
        }
    }
}

impl HookHandler for OpenGraphHandler {
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
        Ok(match payload.hook {
            HookPoint::OnConfigLoaded => Self::on_config_loaded(payload),
            HookPoint::OnRequestUrl => HookResult::continue_with_output(
                PLUGIN_ID,
                json!({ URL: payload.string_or_empty(keys::URL) }),
            ),
            HookPoint::On404ContentLoading => {
                HookResult::continue_with_output(PLUGIN_ID, json!({ IS_ERROR: true }))
            }
            HookPoint::OnMetaHeaders => {
                HookResult::continue_with_value(PLUGIN_ID, IMAGE_KEY, json!(IMAGE_LABEL))
            }
            HookPoint::OnMetaParsed => Self::on_meta_parsed(payload),
            HookPoint::OnContentParsed => Self::on_content_parsed(ctx, payload),
            HookPoint::OnPageRendered => Self::on_page_rendered(ctx, payload),
            _ => HookResult::continue_execution(PLUGIN_ID),
        })
    }

    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// OpenGraph plugin.
#[derive(Debug, Clone)]
pub struct OpenGraphPlugin {
    priority: i32,
}

impl OpenGraphPlugin {
    /// Creates the plugin with the default priority.
    pub fn new() -> Self {
        Self::with_priority(100)
    }

    /// Creates the plugin running at `priority`.
    pub fn with_priority(priority: i32) -> Self {
        Self { priority }
    }
}

impl Default for OpenGraphPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for OpenGraphPlugin {
    fn info(&self) -> PluginInfo {
        let mut info = plugin_info!(
            id: PLUGIN_ID,
            name: "OpenGraph",
            version: env!("CARGO_PKG_VERSION"),
            description: "og:* meta tags for social previews",
            author: "pagehook",
            priority: self.priority
        );
        info.hooks = HOOKS.iter().map(ToString::to_string).collect();
        info
    }

    fn hook_handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)> {
        let handler: Arc<dyn HookHandler> = Arc::new(OpenGraphHandler {
            priority: self.priority,
        });
        HOOKS.iter().map(|hook| (*hook, handler.clone())).collect()
    }
}
