//! Hook registry: plugins register handlers by hook point with priority ordering.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use pagehook_core::result::AppResult;

use super::definitions::{HookPayload, HookPoint, HookResult};
use crate::context::HookContext;

/// Trait for hook handler implementations.
///
/// Handlers are stateless between calls. Anything a handler needs in a
/// later hook is returned as [`HookResult::output`] and read back from the
/// [`HookContext`].
pub trait HookHandler: Send + Sync + std::fmt::Debug {
    /// Handles a hook invocation.
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult>;

    /// Returns the plugin ID owning this handler.
    fn plugin_id(&self) -> &str;

    /// Returns the priority (lower = runs first).
    fn priority(&self) -> i32 {
        100
    }
}

/// Entry in the hook registry.
#[derive(Debug)]
struct HookEntry {
    /// The handler.
    handler: Arc<dyn HookHandler>,
    /// Priority (lower = earlier execution).
    priority: i32,
    /// Plugin that registered this handler.
    plugin_id: String,
}

/// Registry of hook handlers organized by hook point.
#[derive(Debug)]
pub struct HookRegistry {
    /// Hook point → sorted list of handlers.
    handlers: RwLock<HashMap<HookPoint, Vec<HookEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for a specific hook point.
    ///
    /// Handlers with equal priority keep their registration order.
    pub fn register(&self, hook: HookPoint, handler: Arc<dyn HookHandler>) {
        let plugin_id = handler.plugin_id().to_string();
        let priority = handler.priority();

        let mut handlers = self.handlers.write();
        let entries = handlers.entry(hook).or_default();

        entries.push(HookEntry {
            handler,
            priority,
            plugin_id: plugin_id.clone(),
        });

        // Stable sort: ties stay in registration order
        entries.sort_by_key(|e| e.priority);

        info!(
            hook = %hook,
            plugin_id = %plugin_id,
            priority = priority,
            "Hook handler registered"
        );
    }

    /// Unregisters all handlers for a specific plugin.
    pub fn unregister_plugin(&self, plugin_id: &str) {
        let mut handlers = self.handlers.write();

        for entries in handlers.values_mut() {
            entries.retain(|e| e.plugin_id != plugin_id);
        }

        handlers.retain(|_, entries| !entries.is_empty());

        info!(plugin_id = %plugin_id, "All hooks unregistered for plugin");
    }

    /// Returns all handlers for a specific hook point, sorted by priority.
    pub fn get_handlers(&self, hook: HookPoint) -> Vec<Arc<dyn HookHandler>> {
        let handlers = self.handlers.read();
        handlers
            .get(&hook)
            .map(|entries| entries.iter().map(|e| e.handler.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for a hook point.
    pub fn has_handlers(&self, hook: HookPoint) -> bool {
        self.handler_count(hook) > 0
    }

    /// Returns the number of handlers registered for a hook point.
    pub fn handler_count(&self, hook: HookPoint) -> usize {
        let handlers = self.handlers.read();
        handlers.get(&hook).map(Vec::len).unwrap_or(0)
    }

    /// Returns all hook points with at least one handler, in firing order.
    pub fn registered_hooks(&self) -> Vec<HookPoint> {
        let handlers = self.handlers.read();
        HookPoint::ALL
            .into_iter()
            .filter(|hook| handlers.contains_key(hook))
            .collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
