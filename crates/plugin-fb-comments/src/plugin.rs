//! Comments plugin registration.

use std::sync::Arc;

use pagehook_plugin::prelude::*;

use crate::hooks::{FbCommentsHandler, HOOKS, PLUGIN_ID};

/// Facebook comments plugin.
#[derive(Debug, Clone)]
pub struct FbCommentsPlugin {
    priority: i32,
}

impl FbCommentsPlugin {
    /// Creates the plugin with the default priority.
    pub fn new() -> Self {
        Self::with_priority(100)
    }

    /// Creates the plugin running at `priority`.
    pub fn with_priority(priority: i32) -> Self {
        Self { priority }
    }
}

impl Default for FbCommentsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FbCommentsPlugin {
    fn info(&self) -> PluginInfo {
        let mut info = plugin_info!(
            id: PLUGIN_ID,
            name: "FB Comments",
            version: env!("CARGO_PKG_VERSION"),
            description: "Facebook comments widget on pages flagged with FB-Comments",
            author: "pagehook",
            priority: self.priority
        );
        info.hooks = HOOKS.iter().map(ToString::to_string).collect();
        info
    }

    fn hook_handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)> {
        let handler: Arc<dyn HookHandler> = Arc::new(FbCommentsHandler::new(self.priority));
        HOOKS.iter().map(|hook| (*hook, handler.clone())).collect()
    }
}
