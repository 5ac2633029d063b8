//! Errors raised while loading the redirect table.

use std::path::PathBuf;

use pagehook_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Failure to load a redirect table.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The table file could not be read.
    #[error("Cannot read redirect table {path}: {source}")]
    Read {
        /// Table location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The table file is not a valid TOML table of strings.
    #[error("Invalid redirect table {path}: {source}")]
    Parse {
        /// Table location.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

impl From<RedirectError> for AppError {
    fn from(err: RedirectError) -> Self {
        let kind = match &err {
            RedirectError::Read { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ErrorKind::NotFound
            }
            RedirectError::Read { .. } => ErrorKind::Storage,
            RedirectError::Parse { .. } => ErrorKind::Configuration,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
