//! Redirect table: old page key → new site-relative path.
//!
//! Stored as TOML:
//!
//! ```toml
//! [redirects]
//! "old/url/one" = "new/url/one"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use pagehook_core::types::Redirect;

use crate::error::RedirectError;

/// Mapping of old page keys to their new locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RedirectTable {
    #[serde(default)]
    redirects: BTreeMap<String, String>,
}

impl RedirectTable {
    /// Loads a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RedirectError> {
        let source = fs::read_to_string(path).map_err(|source| RedirectError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&source).map_err(|source| RedirectError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a table, treating any failure as an empty table.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => {
                debug!(path = %path.display(), entries = table.len(), "Redirect table loaded");
                table
            }
            Err(RedirectError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "No redirect table");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable redirect table");
                Self::default()
            }
        }
    }

    /// Returns the new path for a key. Empty targets count as absent.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.redirects
            .get(key)
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }

    /// Returns the redirect for a key, if any.
    pub fn resolve(&self, key: &str) -> Option<Redirect> {
        self.lookup(key).map(Redirect::moved_permanently)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }
}

impl FromIterator<(String, String)> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            redirects: iter.into_iter().collect(),
        }
    }
}
