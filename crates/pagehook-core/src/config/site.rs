//! Site configuration: the values every hook sees at `on_config_loaded`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Keys of the string mapping delivered to `on_config_loaded`.
pub mod keys {
    /// Public base URL of the site.
    pub const BASE_URL: &str = "base_url";
    /// Directory holding the content files.
    pub const CONTENT_DIR: &str = "content_dir";
    /// Extension of content files, including the leading dot.
    pub const CONTENT_EXT: &str = "content_ext";
    /// Human-readable site title.
    pub const SITE_TITLE: &str = "site_title";
    /// Fallback share image for pages without images.
    pub const OPENGRAPH_DEFAULT_IMAGE: &str = "opengraph_default_image";
    /// Location of the legacy redirect table.
    pub const REDIRECT_FILE: &str = "redirect_file";
}

/// Site-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public base URL, e.g. `https://example.com/`.
    #[serde(default)]
    pub base_url: String,
    /// Content directory. Normalized to end with `/` on load.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// Content file extension.
    #[serde(default = "default_content_ext")]
    pub content_ext: String,
    /// Site title, used for `og:site_name`.
    #[serde(default)]
    pub site_title: String,
    /// Default share image appended after page images.
    #[serde(default)]
    pub opengraph_default_image: Option<String>,
    /// Redirect table location. Defaults to `<content_dir>/../redirects.toml`.
    #[serde(default)]
    pub redirect_file: Option<String>,
    /// Page template rendered by the host.
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            content_dir: default_content_dir(),
            content_ext: default_content_ext(),
            site_title: String::new(),
            opengraph_default_image: None,
            redirect_file: None,
            template: default_template(),
        }
    }
}

impl SiteConfig {
    /// Applies the host-side normalization: the content directory always
    /// ends with a slash so that stripping it from a file path leaves a
    /// bare page key.
    pub fn normalize(&mut self) {
        if !self.content_dir.is_empty() && !self.content_dir.ends_with('/') {
            self.content_dir.push('/');
        }
        if self
            .opengraph_default_image
            .as_deref()
            .is_some_and(str::is_empty)
        {
            self.opengraph_default_image = None;
        }
    }

    /// Location of the redirect table.
    pub fn redirect_path(&self) -> PathBuf {
        match &self.redirect_file {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(format!(
                "{}/../redirects.toml",
                self.content_dir.trim_end_matches('/')
            )),
        }
    }

    /// Flattens the configuration into the string mapping handed to
    /// `on_config_loaded`. Optional values are present only when set.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(keys::BASE_URL.to_string(), self.base_url.clone());
        map.insert(keys::CONTENT_DIR.to_string(), self.content_dir.clone());
        map.insert(keys::CONTENT_EXT.to_string(), self.content_ext.clone());
        map.insert(keys::SITE_TITLE.to_string(), self.site_title.clone());
        if let Some(image) = &self.opengraph_default_image {
            map.insert(keys::OPENGRAPH_DEFAULT_IMAGE.to_string(), image.clone());
        }
        map.insert(
            keys::REDIRECT_FILE.to_string(),
            self.redirect_path().to_string_lossy().into_owned(),
        );
        map
    }
}

fn default_content_dir() -> String {
    "content/".to_string()
}

fn default_content_ext() -> String {
    ".md".to_string()
}

fn default_template() -> String {
    "themes/default/index.html".to_string()
}
