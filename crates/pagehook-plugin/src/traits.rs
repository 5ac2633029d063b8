//! Closure-based hook handlers.

use std::fmt;
use std::sync::Arc;

use pagehook_core::result::AppResult;

use crate::context::HookContext;
use crate::hooks::definitions::{HookPayload, HookResult};
use crate::hooks::registry::HookHandler;

type HandlerFn = dyn Fn(&HookContext, &HookPayload) -> AppResult<HookResult> + Send + Sync;

/// A hook handler backed by a closure, for small hosts and tests.
pub struct FnHandler {
    /// Plugin ID.
    id: String,
    /// Priority.
    priority_val: i32,
    /// Handler function.
    handler: Arc<HandlerFn>,
}

impl FnHandler {
    /// Creates a closure handler with the default priority.
    pub fn new<F>(plugin_id: &str, handler: F) -> Self
    where
        F: Fn(&HookContext, &HookPayload) -> AppResult<HookResult> + Send + Sync + 'static,
    {
        Self {
            id: plugin_id.to_string(),
            priority_val: 100,
            handler: Arc::new(handler),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority_val = priority;
        self
    }

    /// Wraps the handler into an `Arc<dyn HookHandler>`.
    pub fn into_handler(self) -> Arc<dyn HookHandler> {
        Arc::new(self)
    }
}

impl fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("id", &self.id)
            .field("priority", &self.priority_val)
            .finish()
    }
}

impl HookHandler for FnHandler {
    fn handle(&self, ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
        (self.handler)(ctx, payload)
    }

    fn plugin_id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority_val
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::definitions::{HookPoint, keys};

    #[test]
    fn test_closure_is_invoked() {
        let handler = FnHandler::new("echo", |_ctx, payload| {
            Ok(HookResult::continue_with_value(
                "echo",
                keys::OUTPUT,
                serde_json::json!(payload.string_or_empty(keys::URL).to_uppercase()),
            ))
        })
        .with_priority(5);

        assert_eq!(handler.priority(), 5);
        assert_eq!(handler.plugin_id(), "echo");

        let payload = HookPayload::new(HookPoint::OnRequestUrl).with_string(keys::URL, "abc");
        let result = handler
            .handle(&HookContext::new(), &payload)
            .expect("handle");
        match result.action {
            crate::hooks::definitions::HookAction::ContinueWith(mods) => {
                assert_eq!(mods[keys::OUTPUT], serde_json::json!("ABC"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}
