//! # pagehook-plugin
//!
//! Plugin framework for pagehook. Provides:
//!
//! - Hook points for every stage of the page-build pipeline
//! - Hook registry with priority-ordered registration
//! - Hook dispatcher with Continue/Halt semantics
//! - A request-scoped context carrying per-plugin state
//! - Plugin lifecycle management (load, start, stop, unload)
//! - The page pipeline driver that fires hooks in fixed order

pub mod context;
pub mod frontmatter;
pub mod hooks;
pub mod inject;
pub mod macros;
pub mod manager;
pub mod pipeline;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use context::HookContext;
pub use hooks::definitions::{HookAction, HookPayload, HookPoint, HookResult};
pub use hooks::dispatcher::{DispatchResult, HookDispatcher};
pub use hooks::registry::{HookHandler, HookRegistry};
pub use inject::ConditionalMarkup;
pub use manager::PluginManager;
pub use pipeline::{PageHost, PagePipeline, PageRequest, PageResponse, RawPage};
pub use registry::{Plugin, PluginInfo, PluginRegistry};
pub use traits::FnHandler;
