//! Share buttons plugin and its hook handler.

use std::sync::Arc;

use pagehook_core::result::AppResult;
use pagehook_plugin::prelude::*;

/// Plugin identifier.
pub const PLUGIN_ID: &str = "share-buttons";

/// Template variable receiving the buttons.
pub const TEMPLATE_VAR: &str = "share_buttons";

/// Front-matter flag that turns the buttons on.
pub const FLAG: ConditionalMarkup =
    ConditionalMarkup::new(PLUGIN_ID, "sharebuttons", "Share-Buttons");

/// The jiathis anchor and loader script.
pub const SHARE_BUTTONS: &str = r#"<a href="http://www.jiathis.com/share/" class="jiathis" target="_blank"><img src="http://v2.jiathis.com/code/images/jiathis2.gif" border="0" id="jiathis_a" /></a>
<script type="text/javascript" src="http://v2.jiathis.com/code/jia.js" charset="utf-8"></script>"#;

const HOOKS: [HookPoint; 3] = [
    HookPoint::OnMetaHeaders,
    HookPoint::OnMetaParsed,
    HookPoint::OnPageRendering,
];

#[derive(Debug)]
struct ShareButtonsHandler {
    priority: i32,
}

impl HookHandler for ShareButtonsHandler {
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
        Ok(match payload.hook {
            HookPoint::OnMetaHeaders => FLAG.declare_header(),
            HookPoint::OnMetaParsed => FLAG.capture_flag(payload),
            HookPoint::OnPageRendering => FLAG.expose(ctx, TEMPLATE_VAR, SHARE_BUTTONS),
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

/// Share buttons plugin.
#[derive(Debug, Clone)]
pub struct ShareButtonsPlugin {
    priority: i32,
}

impl ShareButtonsPlugin {
    /// Creates the plugin with the default priority.
    pub fn new() -> Self {
        Self::with_priority(100)
    }

    /// Creates the plugin running at `priority`.
    pub fn with_priority(priority: i32) -> Self {
        Self { priority }
    }
}

impl Default for ShareButtonsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ShareButtonsPlugin {
    fn info(&self) -> PluginInfo {
        let mut info = plugin_info!(
            id: PLUGIN_ID,
            name: "Share Buttons",
            version: env!("CARGO_PKG_VERSION"),
            description: "jiathis share buttons on pages flagged with Share-Buttons",
            author: "pagehook",
            priority: self.priority
        );
        info.hooks = HOOKS.iter().map(ToString::to_string).collect();
        info
    }

    fn hook_handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)> {
        let handler: Arc<dyn HookHandler> = Arc::new(ShareButtonsHandler {
            priority: self.priority,
        });
        HOOKS.iter().map(|hook| (*hook, handler.clone())).collect()
    }
}
