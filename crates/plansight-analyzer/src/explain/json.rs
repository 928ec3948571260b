//! Helpers shared by the JSON-based parsers (PostgreSQL and MySQL)

use serde_json::{Map, Value, error::Category};

/// Separator between the parts of a composed detail string
pub const DETAIL_SEPARATOR: &str = " • ";

/// Builds a `Key: value` detail string from the listed keys that are present
///
/// Missing, `null` and empty-string values are skipped. Returns `None` when
/// no key contributed.
pub fn compose_detail(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let parts: Vec<String> = keys
        .iter()
        .filter_map(|key| {
            let value = display_value(object.get(*key)?)?;
            Some(format!("{key}: {value}"))
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(DETAIL_SEPARATOR))
    }
}

/// Renders a JSON value as plain text, without quoting strings
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Returns true if `serde_json` gave up because the document nests too deep
///
/// The decoder stops at 128 levels of raw nesting before any plan mapping
/// runs, which is a depth failure and not a syntax one.
pub(crate) fn exceeds_nesting_limit(err: &serde_json::Error) -> bool {
    err.classify() == Category::Syntax && err.to_string().starts_with("recursion limit exceeded")
}
