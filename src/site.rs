//! Flat-file content host.
//!
//! Request paths map to files under the content directory:
//! `blog/post` reads `{content_dir}blog/post{ext}`, the empty path and
//! directories read their `index{ext}`. A missing file is served from
//! `{content_dir}404{ext}`, or a built-in page when that is missing too.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use pagehook_core::config::SiteConfig;
use pagehook_core::error::{AppError, ErrorKind};
use pagehook_core::result::AppResult;
use pagehook_plugin::frontmatter;
use pagehook_plugin::{PageHost, PageRequest, RawPage};

use crate::render::TemplateRenderer;

const INDEX: &str = "index";
const NOT_FOUND: &str = "404";

/// Built-in not-found page.
const NOT_FOUND_TITLE: &str = "Error 404";
const NOT_FOUND_BODY: &str = "<p>Woops. Looks like this page doesn't exist.</p>";

/// Serves pages from the content directory.
#[derive(Debug, Clone)]
pub struct ContentSite {
    site: SiteConfig,
    renderer: TemplateRenderer,
}

impl ContentSite {
    /// Creates a host for `site`.
    pub fn new(site: SiteConfig, renderer: TemplateRenderer) -> Self {
        Self { site, renderer }
    }

    /// Maps a request path to its content file.
    pub fn resolve(&self, url: &str) -> PageRequest {
        let url = url.trim_matches('/');
        let base = format!("{}{}", self.site.content_dir, url);

        if url.split('/').any(|segment| segment == "..") {
            debug!(url = %url, "Rejecting path outside the content directory");
            return PageRequest::not_found(url, format!("{base}{}", self.site.content_ext));
        }

        let file = if url.is_empty() {
            format!("{base}{INDEX}{}", self.site.content_ext)
        } else if Path::new(&base).is_dir() {
            format!("{base}/{INDEX}{}", self.site.content_ext)
        } else {
            format!("{base}{}", self.site.content_ext)
        };

        if Path::new(&file).is_file() {
            PageRequest::found(url, file)
        } else {
            debug!(url = %url, file = %file, "Content file not found");
            PageRequest::not_found(url, file)
        }
    }

    fn read_page(path: &Path) -> AppResult<RawPage> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Cannot read content file {}", path.display()),
                e,
            )
        })?;
        frontmatter::split(&text)
    }

    fn not_found_page(&self) -> AppResult<RawPage> {
        let path = format!(
            "{}{NOT_FOUND}{}",
            self.site.content_dir, self.site.content_ext
        );
        let path = Path::new(&path);

        if path.is_file() {
            return Self::read_page(path);
        }

        let mut front_matter = BTreeMap::new();
        front_matter.insert("Title".to_string(), NOT_FOUND_TITLE.to_string());
        Ok(RawPage::new(front_matter, NOT_FOUND_BODY))
    }
}

impl PageHost for ContentSite {
    fn load(&self, request: &PageRequest) -> AppResult<RawPage> {
        if request.not_found {
            self.not_found_page()
        } else {
            Self::read_page(Path::new(&request.file))
        }
    }

    fn render(&self, variables: &BTreeMap<String, Value>) -> AppResult<String> {
        self.renderer.render(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(dir: &Path) -> ContentSite {
        let mut config = SiteConfig {
            content_dir: dir.join("content").display().to_string(),
            ..SiteConfig::default()
        };
        config.normalize();
        ContentSite::new(config, TemplateRenderer::new(dir.join("index.html")))
    }

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join("content").join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(path, contents).expect("write");
    }

    #[test]
    fn test_parent_segments_are_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("content")).expect("content dir");
        fs::write(dir.path().join("secret.md"), "outside").expect("write");
        let site = site(dir.path());

        let request = site.resolve("../secret");
        assert!(request.not_found);

        let page = site.load(&request).expect("not-found page");
        assert!(!page.content.contains("outside"));
        assert!(site.resolve("blog/../../secret").not_found);
    }

    #[test]
    fn test_resolve_page_and_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "index.md", "home");
        write(dir.path(), "blog/post.md", "post");
        write(dir.path(), "blog/index.md", "blog");
        let site = site(dir.path());

        let home = site.resolve("/");
        assert!(!home.not_found);
        assert_eq!(home.url, "");
        assert!(home.file.ends_with("content/index.md"));

        let post = site.resolve("/blog/post");
        assert!(!post.not_found);
        assert_eq!(post.url, "blog/post");
        assert!(post.file.ends_with("content/blog/post.md"));

        let blog = site.resolve("blog/");
        assert!(!blog.not_found);
        assert!(blog.file.ends_with("content/blog/index.md"));
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let site = site(dir.path());
        let request = site.resolve("old/a");
        assert!(request.not_found);
        assert_eq!(
            request.file,
            format!("{}/content/old/a.md", dir.path().display())
        );
    }

    #[test]
    fn test_load_splits_front_matter() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "post.md", "+++\nTitle = \"Post\"\n+++\n<p>Body</p>");
        let site = site(dir.path());

        let page = site.load(&site.resolve("post")).expect("load");
        assert_eq!(page.front_matter["Title"], "Post");
        assert_eq!(page.content, "<p>Body</p>");
    }

    #[test]
    fn test_not_found_page_fallbacks() {
        let dir = tempfile::tempdir().expect("temp dir");
        let site = site(dir.path());
        let request = site.resolve("missing");

        let builtin = site.load(&request).expect("builtin 404");
        assert_eq!(builtin.front_matter["Title"], NOT_FOUND_TITLE);

        write(dir.path(), "404.md", "+++\nTitle = \"Gone\"\n+++\nNothing here");
        let custom = site.load(&request).expect("custom 404");
        assert_eq!(custom.front_matter["Title"], "Gone");
        assert_eq!(custom.content, "Nothing here");
    }
}
