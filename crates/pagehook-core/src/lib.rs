//! # pagehook-core
//!
//! Core crate for pagehook. Contains the configuration schema and loader,
//! the page metadata and request types shared by every hook, the output
//! splicer, and the unified error system.
//!
//! This crate has **no** internal dependencies on other pagehook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod splice;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
