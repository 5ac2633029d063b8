//! Hook dispatcher: fires hooks and aggregates results.
//!
//! - Handlers are called in priority order.
//! - `ContinueWith` modifications are merged into the payload before the
//!   next handler runs, so later handlers see earlier handlers' changes.
//! - Handler output is merged into the plugin's request-scoped state.
//! - `Halt` stops dispatch, but only on hooks that allow halting.
//! - A handler error is logged and treated as `Continue`; it never aborts
//!   the request.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use pagehook_core::types::Redirect;

use super::definitions::{HookAction, HookPayload, HookResult};
use super::registry::HookRegistry;
use crate::context::HookContext;

/// Aggregated result of dispatching a hook to all handlers.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    /// Whether execution was halted.
    pub halted: bool,
    /// Halt reason (if halted).
    pub halt_reason: Option<String>,
    /// Plugin that halted (if halted).
    pub halted_by: Option<String>,
    /// Response requested by the halting handler.
    pub redirect: Option<Redirect>,
    /// All individual handler results.
    pub results: Vec<HookResult>,
    /// The payload after all modifications were merged.
    pub payload: HookPayload,
}

impl DispatchResult {
    fn untouched(payload: HookPayload) -> Self {
        Self {
            halted: false,
            halt_reason: None,
            halted_by: None,
            redirect: None,
            results: Vec::new(),
            payload,
        }
    }
}

/// Dispatches hooks to all registered handlers.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatches a hook to all registered handlers.
    pub fn dispatch(&self, ctx: &mut HookContext, payload: HookPayload) -> DispatchResult {
        let handlers = self.registry.get_handlers(payload.hook);

        if handlers.is_empty() {
            return DispatchResult::untouched(payload);
        }

        debug!(
            hook = %payload.hook,
            handler_count = handlers.len(),
            request_id = %ctx.request_id,
            "Dispatching hook"
        );

        let mut dispatch = DispatchResult::untouched(payload);

        for handler in &handlers {
            let mut result = match handler.handle(ctx, &dispatch.payload) {
                Ok(r) => r,
                Err(e) => {
                    error!(
                        hook = %dispatch.payload.hook,
                        plugin_id = %handler.plugin_id(),
                        error = %e,
                        "Hook handler failed, continuing"
                    );
                    HookResult::continue_execution(handler.plugin_id())
                }
            };

            if let Some(output) = result.output.take() {
                ctx.merge_state(&result.plugin_id, output);
            }

            match &result.action {
                HookAction::Continue => {
                    debug!(
                        hook = %dispatch.payload.hook,
                        plugin_id = %result.plugin_id,
                        "Handler returned Continue"
                    );
                }
                HookAction::ContinueWith(mods) => {
                    debug!(
                        hook = %dispatch.payload.hook,
                        plugin_id = %result.plugin_id,
                        modifications = mods.len(),
                        "Handler returned ContinueWith"
                    );
                    dispatch.payload.merge(mods.clone());
                }
                HookAction::Halt { reason, redirect } => {
                    if dispatch.payload.hook.can_halt() {
                        info!(
                            hook = %dispatch.payload.hook,
                            plugin_id = %result.plugin_id,
                            reason = %reason,
                            location = %redirect.location,
                            "Handler halted execution"
                        );
                        dispatch.halted = true;
                        dispatch.halt_reason = Some(reason.clone());
                        dispatch.halted_by = Some(result.plugin_id.clone());
                        dispatch.redirect = Some(redirect.clone());
                        dispatch.results.push(result);
                        break;
                    } else {
                        warn!(
                            hook = %dispatch.payload.hook,
                            plugin_id = %result.plugin_id,
                            "Handler returned Halt for a hook that cannot halt, ignoring"
                        );
                    }
                }
            }

            dispatch.results.push(result);
        }

        dispatch
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::definitions::{HookPoint, keys};
    use crate::hooks::registry::HookHandler;
    use pagehook_core::error::AppError;
    use pagehook_core::result::AppResult;
    use serde_json::json;

    #[derive(Debug)]
    struct Append {
        plugin: &'static str,
        suffix: &'static str,
    }

    impl HookHandler for Append {
        fn handle(&self, _ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
            let current = payload.string_or_empty(keys::OUTPUT);
            Ok(HookResult::continue_with_value(
                self.plugin,
                keys::OUTPUT,
                json!(format!("{current}{}", self.suffix)),
            ))
        }

        fn plugin_id(&self) -> &str {
            self.plugin
        }
    }

    #[derive(Debug)]
    struct Halter;

    impl HookHandler for Halter {
        fn handle(&self, _ctx: &HookContext, _payload: &HookPayload) -> AppResult<HookResult> {
            Ok(HookResult::halt(
                "halter",
                "moved",
                Redirect::moved_permanently("new"),
            ))
        }

        fn plugin_id(&self) -> &str {
            "halter"
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl HookHandler for Failing {
        fn handle(&self, _ctx: &HookContext, _payload: &HookPayload) -> AppResult<HookResult> {
            Err(AppError::plugin("boom"))
        }

        fn plugin_id(&self) -> &str {
            "failing"
        }
    }

    #[derive(Debug)]
    struct Recorder;

    impl HookHandler for Recorder {
        fn handle(&self, _ctx: &HookContext, payload: &HookPayload) -> AppResult<HookResult> {
            Ok(HookResult::continue_with_output(
                "recorder",
                json!({ "seen": payload.string_or_empty(keys::URL) }),
            ))
        }

        fn plugin_id(&self) -> &str {
            "recorder"
        }
    }

    fn dispatcher() -> HookDispatcher {
        HookDispatcher::new(Arc::new(HookRegistry::new()))
    }

    #[test]
    fn test_modifications_chain_between_handlers() {
        let dispatcher = dispatcher();
        let hook = HookPoint::OnPageRendered;
        dispatcher
            .registry()
            .register(hook, Arc::new(Append { plugin: "a", suffix: "A" }));
        dispatcher
            .registry()
            .register(hook, Arc::new(Append { plugin: "b", suffix: "B" }));

        let mut ctx = HookContext::new();
        let payload = HookPayload::new(hook).with_string(keys::OUTPUT, "doc");
        let result = dispatcher.dispatch(&mut ctx, payload);

        assert!(!result.halted);
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.payload.get_string(keys::OUTPUT), Some("docAB"));
    }

    #[test]
    fn test_halt_stops_remaining_handlers() {
        let dispatcher = dispatcher();
        let hook = HookPoint::On404ContentLoading;
        dispatcher.registry().register(hook, Arc::new(Halter));
        dispatcher.registry().register(hook, Arc::new(Recorder));

        let mut ctx = HookContext::new();
        let result = dispatcher.dispatch(&mut ctx, HookPayload::new(hook));

        assert!(result.halted);
        assert_eq!(result.halted_by.as_deref(), Some("halter"));
        assert_eq!(
            result.redirect.map(|r| r.location),
            Some("/new".to_string())
        );
        assert_eq!(result.results.len(), 1);
        assert!(ctx.state("recorder").is_none());
    }

    #[test]
    fn test_halt_ignored_on_hooks_that_cannot_halt() {
        let dispatcher = dispatcher();
        let hook = HookPoint::OnRequestUrl;
        dispatcher.registry().register(hook, Arc::new(Halter));
        dispatcher.registry().register(hook, Arc::new(Recorder));

        let mut ctx = HookContext::new();
        let payload = HookPayload::new(hook).with_string(keys::URL, "blog");
        let result = dispatcher.dispatch(&mut ctx, payload);

        assert!(!result.halted);
        assert!(result.redirect.is_none());
        assert_eq!(ctx.get_string("recorder", "seen"), "blog");
    }

    #[test]
    fn test_failing_handler_does_not_abort() {
        let dispatcher = dispatcher();
        let hook = HookPoint::OnRequestUrl;
        dispatcher.registry().register(hook, Arc::new(Failing));
        dispatcher.registry().register(hook, Arc::new(Recorder));

        let mut ctx = HookContext::new();
        let payload = HookPayload::new(hook).with_string(keys::URL, "x");
        let result = dispatcher.dispatch(&mut ctx, payload);

        assert_eq!(result.results.len(), 2);
        assert_eq!(ctx.get_string("recorder", "seen"), "x");
    }

    #[test]
    fn test_no_handlers_returns_payload_unchanged() {
        let dispatcher = dispatcher();
        let mut ctx = HookContext::new();
        let payload = HookPayload::new(HookPoint::OnPageRendered).with_string(keys::OUTPUT, "doc");
        let result = dispatcher.dispatch(&mut ctx, payload);
        assert!(result.results.is_empty());
        assert_eq!(result.payload.get_string(keys::OUTPUT), Some("doc"));
    }
}
