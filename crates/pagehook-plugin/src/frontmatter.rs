//! Front-matter reader for content files.
//!
//! A content file may start with a `+++`-delimited TOML block. Keys are the
//! labels authors write (`Title`, `FB-Comments`); scalar values are turned
//! into strings so every header reads the same way downstream.

use std::collections::BTreeMap;

use toml::Value;

use pagehook_core::error::AppError;
use pagehook_core::result::AppResult;

use crate::pipeline::RawPage;

const DELIMITER: &str = "+++";

/// Splits a content file into front matter and body.
///
/// Text without a leading `+++` line has no metadata and is returned as
/// the body unchanged. An opening delimiter with no closing one is an error.
pub fn split(text: &str) -> AppResult<RawPage> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(rest) = text
        .strip_prefix(DELIMITER)
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))
    else {
        return Ok(RawPage::new(BTreeMap::new(), text));
    };

    let (block, body) = if let Some(block) = rest.strip_prefix(DELIMITER) {
        // Empty block: "+++\n+++"
        ("", block)
    } else if let Some(end) = rest.find("\n+++") {
        // CRLF files leave the `\r` of the last header line behind.
        let block = &rest[..end];
        (
            block.strip_suffix('\r').unwrap_or(block),
            &rest[end + 1 + DELIMITER.len()..],
        )
    } else {
        return Err(AppError::validation("Unterminated front matter block"));
    };

    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    Ok(RawPage::new(parse_block(block)?, body))
}

/// Parses a TOML block into label → string value.
fn parse_block(block: &str) -> AppResult<BTreeMap<String, String>> {
    let table: toml::Table = block.parse()?;

    Ok(table
        .into_iter()
        .filter_map(|(label, value)| stringify(value).map(|v| (label, v)))
        .collect())
}

/// Arrays and tables have no string form and are skipped.
fn stringify(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Boolean(true) => Some("1".to_string()),
        Value::Boolean(false) => Some(String::new()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
