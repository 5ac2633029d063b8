//! `og:*` meta tag rendering.

use std::fmt::Write;

/// Values for one page's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraph {
    /// Site base URL without trailing slash.
    pub base_url: String,
    /// Request path; empty for the home page.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Site title.
    pub site_name: String,
    /// Resolved image URLs.
    pub images: Vec<String>,
}

impl OpenGraph {
    /// `website` for the home page, `article` otherwise.
    pub fn og_type(&self) -> &'static str {
        if self.url.is_empty() { "website" } else { "article" }
    }

    /// Property/content pairs in emission order.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = vec![
            ("og:type", self.og_type().to_string()),
            ("og:title", self.title.clone()),
            ("og:description", self.description.clone()),
            ("og:url", format!("{}/{}", self.base_url, self.url)),
            ("og:site_name", self.site_name.clone()),
        ];
        properties.extend(self.images.iter().map(|image| ("og:image", image.clone())));
        properties
    }

    /// One tab-indented `<meta>` line per property. Values are written
    /// verbatim, without attribute escaping.
    pub fn render(&self) -> String {
        self.properties()
            .into_iter()
            .fold(String::new(), |mut out, (property, content)| {
                let _ = writeln!(out, "\t<meta property=\"{property}\" content=\"{content}\" />");
                out
            })
    }
}
