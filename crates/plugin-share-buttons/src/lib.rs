//! Share buttons plugin for pagehook.
//!
//! Pages opt in with a `Share-Buttons` front-matter header; templates place
//! the buttons with `{{ share_buttons }}`.

pub mod plugin;

pub use plugin::{SHARE_BUTTONS, ShareButtonsPlugin};
