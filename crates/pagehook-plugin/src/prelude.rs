//! Prelude for convenient imports.

pub use crate::context::HookContext;
pub use crate::hooks::definitions::{HookAction, HookPayload, HookPoint, HookResult, keys};
pub use crate::hooks::registry::HookHandler;
pub use crate::inject::ConditionalMarkup;
pub use crate::registry::{Plugin, PluginInfo};
pub use crate::traits::FnHandler;

pub use crate::plugin_info;
