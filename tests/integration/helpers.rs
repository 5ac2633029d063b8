//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use http::StatusCode;
use tempfile::TempDir;

use pagehook::App;
use pagehook_core::config::AppConfig;
use pagehook_plugin::PageResponse;

/// Base URL every test site is served from.
pub const BASE_URL: &str = "https://x.com";

/// A throwaway site on disk with every plugin enabled.
pub struct TestSite {
    dir: TempDir,
    default_image: Option<String>,
}

impl TestSite {
    /// Creates an empty site with a content directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("content")).expect("Failed to create content dir");
        Self {
            dir,
            default_image: None,
        }
    }

    /// Configures the fallback share image.
    pub fn with_default_image(mut self, image: &str) -> Self {
        self.default_image = Some(image.to_string());
        self
    }

    /// Site root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Content directory as configured, without a trailing slash.
    pub fn content_dir(&self) -> String {
        self.root().join("content").to_string_lossy().into_owned()
    }

    /// Writes `content/<key>.md` with a TOML front-matter block.
    pub fn page(&self, key: &str, front_matter: &str, body: &str) -> &Self {
        let path = self.root().join("content").join(format!("{key}.md"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create page dir");
        }
        fs::write(&path, format!("+++\n{front_matter}\n+++\n{body}"))
            .expect("Failed to write page");
        self
    }

    /// Writes the redirect table next to the content directory.
    pub fn redirects(&self, toml: &str) -> &Self {
        fs::write(self.root().join("redirects.toml"), toml).expect("Failed to write redirects");
        self
    }

    /// Writes the page template. Without one the built-in template is used.
    pub fn template(&self, html: &str) -> &Self {
        fs::write(self.root().join("template.html"), html).expect("Failed to write template");
        self
    }

    /// Configuration with every plugin enabled.
    pub fn config(&self) -> AppConfig {
        let default_image = self
            .default_image
            .as_deref()
            .map(|image| format!("opengraph_default_image = \"{image}\"\n"))
            .unwrap_or_default();

        let toml = format!(
            r#"
[site]
base_url = "{BASE_URL}"
content_dir = "{content_dir}"
content_ext = ".md"
site_title = "Example"
template = "{template}"
{default_image}
[plugins.fb_comments]
enabled = true

[plugins.share_buttons]
enabled = true

[plugins.old_links_redirect]
enabled = true
priority = 10

[plugins.opengraph]
enabled = true
"#,
            content_dir = self.content_dir(),
            template = self.root().join("template.html").display(),
        );

        AppConfig::from_toml_str(&toml).expect("Failed to parse test config")
    }

    /// Builds the application.
    pub fn app(&self) -> App {
        App::new(self.config()).expect("Failed to build app")
    }

    /// Renders one request.
    pub fn get(&self, url: &str) -> TestResponse {
        let response = self.app().render(url).expect("Render failed");
        TestResponse::from(response)
    }
}

/// Flattened page response.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Rendered document, empty for redirects
    pub body: String,
    /// `Location` header of a redirect
    pub location: Option<String>,
}

impl From<PageResponse> for TestResponse {
    fn from(response: PageResponse) -> Self {
        match response {
            PageResponse::Page { status, body } => Self {
                status,
                body,
                location: None,
            },
            PageResponse::Redirect(redirect) => Self {
                status: redirect.status,
                body: String::new(),
                location: Some(redirect.location),
            },
        }
    }
}

impl TestResponse {
    /// All `og:*` meta lines, in document order.
    pub fn og_tags(&self) -> Vec<(String, String)> {
        self.body
            .lines()
            .filter_map(|line| {
                let rest = line.trim().strip_prefix("<meta property=\"og:")?;
                let (property, rest) = rest.split_once('"')?;
                let content = rest.strip_prefix(" content=\"")?.strip_suffix("\" />")?;
                Some((format!("og:{property}"), content.to_string()))
            })
            .collect()
    }

    /// Values of one `og:*` property.
    pub fn og(&self, property: &str) -> Vec<String> {
        self.og_tags()
            .into_iter()
            .filter(|(p, _)| p == property)
            .map(|(_, content)| content)
            .collect()
    }
}
