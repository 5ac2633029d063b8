//! Page metadata parsed from a content file's front matter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declared meta headers: meta key → front-matter label.
///
/// The key is how plugins and templates address the value (`fbcomments`);
/// the label is what authors write in the front matter (`FB-Comments`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaHeaders(BTreeMap<String, String>);

impl MetaHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The headers every page understands without plugins.
    pub fn defaults() -> Self {
        let mut headers = Self::new();
        for (key, label) in [
            ("title", "Title"),
            ("description", "Description"),
            ("author", "Author"),
            ("date", "Date"),
            ("robots", "Robots"),
            ("template", "Template"),
        ] {
            headers.insert(key, label);
        }
        headers
    }

    /// Declares a header. Re-declaring a key replaces its label.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.0.insert(key.into(), label.into());
    }

    /// Returns the label for a meta key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over `(key, label)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of declared headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no header is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for MetaHeaders {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parsed page metadata: meta key → value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageMeta(BTreeMap<String, String>);

impl PageMeta {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves declared headers against raw front matter.
    ///
    /// Labels are matched case-insensitively. Declared keys without a value
    /// in the front matter are present with an empty string, so templates
    /// can reference every declared key.
    pub fn resolve(headers: &MetaHeaders, front_matter: &BTreeMap<String, String>) -> Self {
        let lowered: BTreeMap<String, &str> = front_matter
            .iter()
            .map(|(label, value)| (label.to_lowercase(), value.as_str()))
            .collect();

        headers
            .iter()
            .map(|(key, label)| {
                let value = lowered
                    .get(&label.to_lowercase())
                    .copied()
                    .unwrap_or_default();
                (key.to_string(), value.to_string())
            })
            .collect()
    }

    /// Sets a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns a value by meta key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PageMeta {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Flag semantics for header values: missing, empty, and `"0"` are off,
/// anything else is on.
pub fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0"))
}
