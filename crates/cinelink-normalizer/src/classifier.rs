//! Canonicalization of free-text quality and size labels.

use cinelink_core::UNKNOWN;
use serde_json::Value;

/// Labels that carry no information, compared case-insensitively after trimming.
const SENTINELS: [&str; 6] = ["", "unknown", "n/a", "na", "none", "null"];

/// Normalizes a quality or size label.
///
/// Surrounding whitespace is trimmed. Empty and placeholder labels
/// (`"N/A"`, `"none"`, `"null"`, ...) map to [`UNKNOWN`]; anything else is
/// returned trimmed but otherwise unchanged. The function is idempotent.
///
/// ```
/// use cinelink_normalizer::classifier::normalize;
///
/// assert_eq!(normalize("  720p "), "720p");
/// assert_eq!(normalize("N/A"), "Unknown");
/// ```
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    if is_sentinel(trimmed) {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalizes a JSON label value.
///
/// Strings and numbers are accepted; `None` is returned for every other kind
/// and for labels that carry no information.
pub fn normalize_value(value: &Value) -> Option<String> {
    let normalized = match value {
        Value::String(text) => normalize(text),
        Value::Number(number) => normalize(&number.to_string()),
        _ => return None,
    };

    (normalized != UNKNOWN).then_some(normalized)
}

fn is_sentinel(trimmed: &str) -> bool {
    SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}
