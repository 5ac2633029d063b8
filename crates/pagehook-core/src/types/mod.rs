//! Page-level types shared by the host pipeline and every plugin.

pub mod meta;
pub mod response;

pub use meta::{MetaHeaders, PageMeta, is_truthy};
pub use response::Redirect;
