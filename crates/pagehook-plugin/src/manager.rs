//! Plugin manager: lifecycle management for all plugins.

use std::sync::Arc;

use tracing::{error, info, warn};

use pagehook_core::error::AppError;
use pagehook_core::result::AppResult;

use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::registry::HookRegistry;
use crate::registry::{Plugin, PluginInfo, PluginRegistry};

/// Manages the full lifecycle of plugins: load, start, stop, unload.
#[derive(Debug)]
pub struct PluginManager {
    /// Plugin registry.
    plugin_registry: Arc<PluginRegistry>,
    /// Hook registry.
    hook_registry: Arc<HookRegistry>,
    /// Hook dispatcher.
    hook_dispatcher: Arc<HookDispatcher>,
}

impl PluginManager {
    /// Creates a new plugin manager.
    pub fn new() -> Self {
        let hook_registry = Arc::new(HookRegistry::new());
        let hook_dispatcher = Arc::new(HookDispatcher::new(hook_registry.clone()));

        Self {
            plugin_registry: Arc::new(PluginRegistry::new()),
            hook_registry,
            hook_dispatcher,
        }
    }

    /// Loads and starts a compiled-in plugin.
    pub fn load_plugin(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let plugin_id = info.id.clone();

        plugin.on_load().map_err(|e| {
            AppError::plugin(format!("Plugin '{plugin_id}' load failed: {e}"))
        })?;

        self.plugin_registry.register(plugin.clone())?;

        for (hook_point, handler) in plugin.hook_handlers() {
            self.hook_registry.register(hook_point, handler);
        }

        if let Err(e) = plugin.on_start() {
            error!(plugin_id = %plugin_id, error = %e, "Plugin start failed");
            self.hook_registry.unregister_plugin(&plugin_id);
            self.plugin_registry.unregister(&plugin_id)?;
            return Err(AppError::plugin(format!(
                "Plugin '{plugin_id}' start failed: {e}"
            )));
        }

        info!(
            plugin_id = %plugin_id,
            name = %info.name,
            version = %info.version,
            hooks = info.hooks.len(),
            "Plugin loaded and started"
        );

        Ok(())
    }

    /// Stops and unloads a plugin.
    pub fn unload_plugin(&self, plugin_id: &str) -> AppResult<()> {
        let plugin = self
            .plugin_registry
            .get(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{plugin_id}' not found")))?;

        if let Err(e) = plugin.on_stop() {
            warn!(
                plugin_id = %plugin_id,
                error = %e,
                "Plugin stop returned error"
            );
        }

        self.hook_registry.unregister_plugin(plugin_id);
        self.plugin_registry.unregister(plugin_id)?;

        if let Err(e) = plugin.on_unload() {
            warn!(
                plugin_id = %plugin_id,
                error = %e,
                "Plugin unload returned error"
            );
        }

        info!(plugin_id = %plugin_id, "Plugin unloaded");

        Ok(())
    }

    /// Stops and unloads all plugins.
    pub fn unload_all(&self) {
        for info in self.plugin_registry.list() {
            if let Err(e) = self.unload_plugin(&info.id) {
                error!(
                    plugin_id = %info.id,
                    error = %e,
                    "Error unloading plugin"
                );
            }
        }

        info!("All plugins unloaded");
    }

    /// Returns the hook dispatcher for firing hooks.
    pub fn dispatcher(&self) -> &Arc<HookDispatcher> {
        &self.hook_dispatcher
    }

    /// Returns the hook registry.
    pub fn hook_registry(&self) -> &Arc<HookRegistry> {
        &self.hook_registry
    }

    /// Returns the plugin registry.
    pub fn plugin_registry(&self) -> &Arc<PluginRegistry> {
        &self.plugin_registry
    }

    /// Lists all loaded plugins.
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugin_registry.list()
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}
