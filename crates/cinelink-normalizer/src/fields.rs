//! Field names recognized in upstream payloads.

use serde_json::{Map, Value};

/// Fields naming the quality of the links below them, in priority order.
pub const QUALITY_FIELDS: [&str; 3] = ["quality", "label", "name"];

/// Fields holding a human readable file size, in priority order.
pub const SIZE_FIELDS: [&str; 2] = ["size", "fileSize"];

/// Fields holding a direct download URL, in priority order.
pub const URL_FIELDS: [&str; 6] = [
    "url",
    "link",
    "directLink",
    "download",
    "downloadUrl",
    "href",
];

/// Fields holding the link container of a details document or an episode.
///
/// `results` and `data` are the envelopes of wrapped magic-links responses
/// and are consulted last.
pub const LINK_CONTAINER_FIELDS: [&str; 6] = [
    "downloadLinks",
    "magicLinks",
    "links",
    "downloads",
    "results",
    "data",
];

pub const EPISODE_NUMBER_FIELDS: [&str; 2] = ["episodeNumber", "episode_number"];

pub const TITLE_FIELDS: [&str; 2] = ["title", "name"];

/// Descriptive fields copied onto the details payload, in `MediaInfo` order.
pub const INFO_FIELDS: [&str; 5] = ["year", "rating", "duration", "genre", "plot"];

/// Returns the first link container that holds something.
///
/// Null, blank strings and empty sequences or mappings are skipped so a later
/// alias can still supply the links.
pub fn link_container(map: &Map<String, Value>) -> Option<&Value> {
    LINK_CONTAINER_FIELDS
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|value| !is_empty(value))
}

/// Returns the first non-blank string among `fields`.
pub fn first_text<'a>(map: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| map.get(*field))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
