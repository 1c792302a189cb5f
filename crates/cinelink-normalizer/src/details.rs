use crate::classifier;
use crate::episode;
use crate::fields::{self, INFO_FIELDS, TITLE_FIELDS};
use crate::walker;
use cinelink_core::{DetailsPayload, MediaInfo, UNKNOWN};
use serde_json::{Map, Value};
use tracing::debug;

/// Normalizes an upstream details document into a [`DetailsPayload`].
///
/// Movie-level links come from the first non-empty link container
/// (`downloadLinks`, `magicLinks`, `links`, `downloads`, then the `results`
/// and `data` envelopes of wrapped magic-links responses); a bare sequence is
/// treated as a magic-links response and walked as a whole. Year, rating,
/// duration, genre and plot are carried over when meaningful. Episodes come
/// from the `episodes` array. The payload is a series exactly when at least
/// one episode has links; a declared `type` is never trusted.
pub fn normalize_details(raw: &Value) -> DetailsPayload {
    let Some(document) = raw.as_object() else {
        let links = walker::walk(raw);
        return DetailsPayload::new(UNKNOWN, links, Vec::new());
    };

    let title = fields::first_text(document, &TITLE_FIELDS).unwrap_or(UNKNOWN);
    let download_links = fields::link_container(document)
        .map(walker::walk)
        .unwrap_or_default();
    let episodes = document
        .get("episodes")
        .and_then(Value::as_array)
        .map(|raw_episodes| episode::aggregate(raw_episodes))
        .unwrap_or_default();

    let details =
        DetailsPayload::new(title, download_links, episodes).with_info(media_info(document));

    if let Some(declared) = document.get("type").and_then(Value::as_str) {
        if !declared.eq_ignore_ascii_case(&details.kind().to_string()) {
            debug!(
                title = details.title(),
                declared,
                derived = %details.kind(),
                "declared media type disagrees with episodes"
            );
        }
    }

    debug!(
        title = details.title(),
        kind = %details.kind(),
        links = details.link_count(),
        "normalized details"
    );
    details
}

fn media_info(document: &Map<String, Value>) -> MediaInfo {
    let [year, rating, duration, genre, plot] =
        INFO_FIELDS.map(|field| document.get(field).and_then(info_text));
    MediaInfo {
        year,
        rating,
        duration,
        genre,
        plot,
    }
}

/// Text of a descriptive field; lists such as `["Crime", "Drama"]` are joined.
fn info_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(classifier::normalize_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => classifier::normalize_value(other),
    }
}
