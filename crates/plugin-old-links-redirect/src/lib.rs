//! Legacy URL redirect plugin for pagehook.
//!
//! Not-found requests are checked against a table of old page keys. A hit
//! ends the request with `301 Moved Permanently` before the not-found page
//! is loaded.

pub mod error;
pub mod key;
pub mod plugin;
pub mod table;

pub use error::RedirectError;
pub use key::derive_key;
pub use plugin::OldLinksRedirectPlugin;
pub use table::RedirectTable;
