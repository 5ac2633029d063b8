//! OpenGraph plugin for pagehook.
//!
//! Builds `og:*` meta tags from the site config, the page metadata and the
//! images in the page body, and inserts them before `</head>`. Not-found
//! pages get no tags.

pub mod images;
pub mod plugin;
pub mod tags;

pub use plugin::OpenGraphPlugin;
