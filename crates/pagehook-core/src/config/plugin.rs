//! Per-plugin enable switches.

use serde::{Deserialize, Serialize};

/// Enable flags for the bundled plugins.
///
/// Every plugin ships disabled; a site opts in per plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// Comments widget injection.
    #[serde(default)]
    pub fb_comments: PluginToggle,
    /// Share-button markup injection.
    #[serde(default)]
    pub share_buttons: PluginToggle,
    /// Legacy URL redirection on not-found pages.
    #[serde(default)]
    pub old_links_redirect: PluginToggle,
    /// OpenGraph preview tags.
    #[serde(default)]
    pub opengraph: PluginToggle,
}

/// Switch and ordering for a single plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginToggle {
    /// Whether the plugin is loaded.
    #[serde(default)]
    pub enabled: bool,
    /// Hook priority (lower = runs first).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl Default for PluginToggle {
    fn default() -> Self {
        Self {
            enabled: false,
            priority: default_priority(),
        }
    }
}

impl PluginToggle {
    /// An enabled toggle at the default priority.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

fn default_priority() -> i32 {
    100
}
