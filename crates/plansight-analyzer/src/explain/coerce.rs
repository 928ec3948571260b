//! Numeric coercion for plan metrics
//!
//! Every metric a parser reads goes through here. MySQL reports costs as
//! JSON strings and ShowPlan XML attributes are always text, so a value is
//! accepted if it is a number or a string that parses as one. Anything else
//! becomes `None`; coercion never fails and never substitutes `0`.

use serde_json::Value;

/// Coerces a JSON value into a finite number
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_str(Some(s)),
        _ => None,
    }
}

/// Coerces an optional JSON field into a finite number
pub fn coerce_field(value: Option<&Value>) -> Option<f64> {
    value.and_then(coerce_number)
}

/// Coerces optional text (e.g. an XML attribute) into a finite number
pub fn coerce_str(text: Option<&str>) -> Option<f64> {
    let trimmed = trim_text(text?);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Trims whitespace and byte-order marks from both ends of pasted text
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests;
