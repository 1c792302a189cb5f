//! Grouping of per-episode links into an ordered series.

use crate::fields::{self, EPISODE_NUMBER_FIELDS, TITLE_FIELDS};
use crate::walker;
use cinelink_core::EpisodeRecord;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// `E05`, `Ep.5`, `Episode 12`; the keyword must not follow another letter,
/// and a lone `e` must be followed directly by digits.
static EPISODE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^a-z])(?:(?:episode|ep)\s*[-._:#]?\s*|e)0*(\d+)")
        .expect("episode title pattern is valid")
});

/// Aggregates raw episode objects into episode records.
///
/// Each episode's number comes from its `episodeNumber` field, else from its
/// title (`"Episode 2"`, `"S01E05"`), else from its 1-based position in
/// `raw_episodes`. Its links are extracted from its own download-links field
/// with a fresh deduplication scope. Episodes without links are dropped, and
/// the result is sorted by episode number with ties kept in input order.
/// Colliding numbers are not renumbered.
pub fn aggregate(raw_episodes: &[Value]) -> Vec<EpisodeRecord> {
    let mut episodes: Vec<EpisodeRecord> = raw_episodes
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let Some(episode) = raw.as_object() else {
                trace!(index, "skipping non-object episode");
                return None;
            };
            let number = resolve_number(episode, index + 1)?;
            let links = fields::link_container(episode)
                .map(walker::walk)
                .unwrap_or_default();

            let record = EpisodeRecord::new(number, links);
            if record.is_none() {
                trace!(index, number, "dropping episode without links");
            }
            record
        })
        .collect();

    episodes.sort_by_key(EpisodeRecord::episode_number);

    debug!(
        raw = raw_episodes.len(),
        episodes = episodes.len(),
        "aggregated episodes"
    );
    episodes
}

/// Resolves the number of an episode found at the 1-based `position`.
pub fn resolve_number(episode: &Map<String, Value>, position: usize) -> Option<u32> {
    explicit_number(episode)
        .or_else(|| title_number(episode))
        .or_else(|| u32::try_from(position).ok().filter(|n| *n > 0))
}

fn explicit_number(episode: &Map<String, Value>) -> Option<u32> {
    EPISODE_NUMBER_FIELDS.iter().find_map(|field| {
        episode
            .get(*field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
    })
}

fn title_number(episode: &Map<String, Value>) -> Option<u32> {
    let title = fields::first_text(episode, &TITLE_FIELDS)?;
    parse_title_number(title)
}

/// Extracts an episode number from free text such as `"Episode 2"`.
pub fn parse_title_number(title: &str) -> Option<u32> {
    EPISODE_TITLE
        .captures_iter(title)
        .filter_map(|captures| captures.get(1))
        .filter_map(|digits| digits.as_str().parse::<u32>().ok())
        .find(|n| *n > 0)
}
