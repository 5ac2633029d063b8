//! Output splicing: literal insertion of a fragment before a fixed anchor.
//!
//! The rendered document is treated as an opaque string. There is no HTML
//! parsing here; callers rely on the anchor occurring at most once.

/// Closing head tag, anchor for metadata tags.
pub const HEAD_CLOSE: &str = "</head>";

/// Closing body tag, anchor for trailing scripts.
pub const BODY_CLOSE: &str = "</body>";

/// Inserts `fragment` immediately before the first occurrence of `anchor`.
///
/// Returns `None` when the anchor does not occur in `document`.
pub fn splice_before(document: &str, anchor: &str, fragment: &str) -> Option<String> {
    let at = document.find(anchor)?;

    let mut out = String::with_capacity(document.len() + fragment.len());
    out.push_str(&document[..at]);
    out.push_str(fragment);
    out.push_str(&document[at..]);
    Some(out)
}
