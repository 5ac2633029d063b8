//! pagehook: a flat-file page pipeline.
//!
//! Wires the content host, the template renderer and the bundled plugins
//! (comments, share buttons, old-link redirects, OpenGraph) into one
//! [`App`].

pub mod app;
pub mod render;
pub mod site;

pub use app::App;
