//! Page key derivation for not-found file paths.

/// Derives the page key of a content file path.
///
/// The content directory is stripped when it prefixes the path, then the
/// content extension when it ends what is left. Nothing else is
/// normalized: leading and trailing slashes are kept as they are.
pub fn derive_key<'a>(file: &'a str, content_dir: &str, content_ext: &str) -> &'a str {
    let key = file.strip_prefix(content_dir).unwrap_or(file);
    key.strip_suffix(content_ext).unwrap_or(key)
}
