//! Image candidates for `og:image`.

use std::sync::LazyLock;

use regex::Regex;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]+>").expect("valid img tag pattern"));
static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src="([^"]*)""#).expect("valid src pattern"));

/// Makes an image reference absolute.
///
/// `base_url` carries no trailing slash. Relative references are appended
/// to the page path with no separator: `pic.jpg` on `blog/post1` becomes
/// `{base}/blog/post1pic.jpg`.
pub fn resolve(base_url: &str, url: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else if reference.starts_with('/') {
        format!("{base_url}{reference}")
    } else {
        format!("{base_url}/{url}{reference}")
    }
}

/// `src` values of every `<img>` tag in document order. Tags without a
/// double-quoted `src` are skipped.
pub fn scan(content: &str) -> Vec<&str> {
    IMG_TAG
        .find_iter(content)
        .filter_map(|tag| SRC_ATTR.captures(tag.as_str()))
        .filter_map(|caps| caps.get(1))
        .map(|src| src.as_str())
        .collect()
}

/// Ordered candidates for a page.
///
/// An explicit image wins and the body is not scanned. Otherwise every
/// body image is resolved and the default image, if any, is appended as is.
pub fn candidates(
    base_url: &str,
    url: &str,
    explicit: Option<&str>,
    content: &str,
    default_image: Option<&str>,
) -> Vec<String> {
    if let Some(image) = explicit {
        return vec![resolve(base_url, url, image)];
    }

    scan(content)
        .into_iter()
        .map(|src| resolve(base_url, url, src))
        .chain(default_image.map(str::to_string))
        .collect()
}
