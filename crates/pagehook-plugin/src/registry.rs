//! Plugin registry: stores loaded plugin instances and metadata.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use pagehook_core::error::AppError;
use pagehook_core::result::AppResult;

use crate::hooks::definitions::HookPoint;
use crate::hooks::registry::HookHandler;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// List of hook points this plugin registers for.
    pub hooks: Vec<String>,
    /// Whether the plugin is currently enabled.
    pub enabled: bool,
    /// Hook priority (lower = runs first).
    pub priority: i32,
}

/// Trait that all plugins must implement.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Returns the handlers to register, keyed by hook point.
    fn hook_handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)>;

    /// Called once when the plugin is loaded.
    fn on_load(&self) -> AppResult<()> {
        Ok(())
    }

    /// Called when the plugin is started.
    fn on_start(&self) -> AppResult<()> {
        Ok(())
    }

    /// Called when the plugin is stopped.
    fn on_stop(&self) -> AppResult<()> {
        Ok(())
    }

    /// Called when the plugin is unloaded.
    fn on_unload(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Registry of all loaded plugins.
#[derive(Debug)]
pub struct PluginRegistry {
    /// Plugin ID → plugin instance.
    plugins: RwLock<HashMap<String, Arc<dyn Plugin>>>,
    /// Plugin ID → metadata.
    metadata: RwLock<HashMap<String, PluginInfo>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
            metadata: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a plugin.
    pub fn register(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let id = info.id.clone();

        let mut plugins = self.plugins.write();
        let mut metadata = self.metadata.write();

        if plugins.contains_key(&id) {
            return Err(AppError::plugin(format!(
                "Plugin '{id}' is already registered"
            )));
        }

        info!(plugin_id = %id, name = %info.name, version = %info.version, "Registering plugin");

        plugins.insert(id.clone(), plugin);
        metadata.insert(id, info);

        Ok(())
    }

    /// Unregisters a plugin by ID.
    pub fn unregister(&self, plugin_id: &str) -> AppResult<Arc<dyn Plugin>> {
        let mut plugins = self.plugins.write();
        let mut metadata = self.metadata.write();

        let plugin = plugins
            .remove(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{plugin_id}' not found")))?;

        metadata.remove(plugin_id);

        info!(plugin_id = %plugin_id, "Plugin unregistered");

        Ok(plugin)
    }

    /// Gets a plugin by ID.
    pub fn get(&self, plugin_id: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.read().get(plugin_id).cloned()
    }

    /// Lists all registered plugin metadata, ordered by priority then id.
    pub fn list(&self) -> Vec<PluginInfo> {
        let mut infos: Vec<PluginInfo> = self.metadata.read().values().cloned().collect();
        infos.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
        infos
    }

    /// Returns plugin count.
    pub fn count(&self) -> usize {
        self.plugins.read().len()
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.plugins.read().contains_key(plugin_id)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
