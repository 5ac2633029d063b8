//! Redirect plugin and its hook handler.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use pagehook_core::config::site::keys::{CONTENT_DIR, CONTENT_EXT, REDIRECT_FILE};
use pagehook_core::result::AppResult;
use pagehook_plugin::prelude::*;

use crate::key::derive_key;
use crate::table::RedirectTable;

/// Plugin identifier.
pub const PLUGIN_ID: &str = "old-links-redirect";

const HOOKS: [HookPoint; 2] = [HookPoint::OnConfigLoaded, HookPoint::On404ContentLoading];

/// Redirects not-found requests listed in the redirect table.
#[derive(Debug)]
pub struct RedirectHandler {
    priority: i32,
}

impl RedirectHandler {
    fn check(&self, ctx: &HookContext, file: &str) -> HookResult {
        let key = derive_key(
            file,
            ctx.get_string(PLUGIN_ID, CONTENT_DIR),
            ctx.get_string(PLUGIN_ID, CONTENT_EXT),
        );

        // Read on every not-found request; the table may change between requests.
        let table_path = ctx.get_string(PLUGIN_ID, REDIRECT_FILE);
        let table = RedirectTable::load_or_empty(Path::new(table_path));

        match table.resolve(key) {
            Some(redirect) => {
                info!(key = %key, location = %redirect.location, "Redirecting old link");
                HookResult::halt(PLUGIN_ID, &format!("'{key}' has moved"), redirect)
            }
            None => {
                debug!(key = %key, "No redirect for missing page");
                HookResult::continue_execution(PLUGIN_ID)
            }
        }
    }
}

impl HookHandler for RedirectHandler {
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
        Ok(match payload.hook {
            HookPoint::OnConfigLoaded => HookResult::continue_with_output(
                PLUGIN_ID,
                json!({
                    CONTENT_DIR: payload.string_or_empty(CONTENT_DIR),
                    CONTENT_EXT: payload.string_or_empty(CONTENT_EXT),
                    REDIRECT_FILE: payload.string_or_empty(REDIRECT_FILE),
                }),
            ),
            HookPoint::On404ContentLoading => self.check(ctx, payload.string_or_empty(keys::FILE)),
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

/// Old links redirect plugin.
#[derive(Debug, Clone)]
pub struct OldLinksRedirectPlugin {
    priority: i32,
}

impl OldLinksRedirectPlugin {
    /// Creates the plugin with the default priority.
    pub fn new() -> Self {
        Self::with_priority(100)
    }

    /// Creates the plugin running at `priority`.
    pub fn with_priority(priority: i32) -> Self {
        Self { priority }
    }
}

impl Default for OldLinksRedirectPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for OldLinksRedirectPlugin {
    fn info(&self) -> PluginInfo {
        let mut info = plugin_info!(
            id: PLUGIN_ID,
            name: "Old Links Redirect",
            version: env!("CARGO_PKG_VERSION"),
            description: "301 redirects for moved pages listed in the redirect table",
            author: "pagehook",
            priority: self.priority
        );
        info.hooks = HOOKS.iter().map(ToString::to_string).collect();
        info
    }

    fn hook_handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)> {
        let handler: Arc<dyn HookHandler> = Arc::new(RedirectHandler {
            priority: self.priority,
        });
        HOOKS.iter().map(|hook| (*hook, handler.clone())).collect()
    }
}
