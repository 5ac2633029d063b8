//! Facebook comments plugin for pagehook.
//!
//! Pages opt in with an `FB-Comments` front-matter header. The comments
//! widget is exposed to templates as `{{ fb_comments }}` and the SDK
//! bootstrap script is appended before `</body>`.

pub mod hooks;
pub mod markup;
pub mod plugin;

pub use plugin::FbCommentsPlugin;
