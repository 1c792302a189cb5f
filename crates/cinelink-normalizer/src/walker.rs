//! Depth-first extraction of download links from arbitrary JSON.
//!
//! Upstream scrapers describe links in many shapes: flat lists of
//! `{quality, size, url}` objects, objects keyed by resolution
//! (`{"720p": {...}}`), nested `links`/`files` arrays, or bare URL strings.
//! The walker visits every string, sequence and mapping, carrying the quality
//! and size inherited from the enclosing nodes, and records each distinct
//! `http`/`https` URL the first time it is seen.

use crate::classifier;
use crate::fields::{QUALITY_FIELDS, SIZE_FIELDS, URL_FIELDS};
use crate::node::Node;
use cinelink_core::{LinkRecord, UNKNOWN};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Keys that name a resolution or release quality, e.g. `720p`, `4K`, `Full HD`.
static QUALITY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:\d{3,4}p|4k|fhd|uhd|hdrip|webrip|hd|cam)\b")
        .expect("quality key pattern is valid")
});

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Extracts the links in `node` with no inherited quality or size.
///
/// ```
/// use cinelink_normalizer::walker::walk;
/// use serde_json::json;
///
/// let links = walk(&json!({"720p": {"url": "http://x/a.mp4"}}));
/// assert_eq!(links[0].quality, "720p");
/// assert_eq!(links[0].size, "Unknown");
/// ```
pub fn walk(node: &Value) -> Vec<LinkRecord> {
    walk_with(node, UNKNOWN, UNKNOWN)
}

/// Extracts the links in `node`, starting from the given quality and size.
///
/// Each call has its own deduplication scope. The result lists every accepted
/// URL once, in the order it was first discovered.
pub fn walk_with(node: &Value, quality: &str, size: &str) -> Vec<LinkRecord> {
    let mut walker = PayloadWalker::default();
    walker.visit(
        node,
        &classifier::normalize(quality),
        &classifier::normalize(size),
    );

    debug!(
        links = walker.links.len(),
        rejected = walker.rejected,
        "extracted payload links"
    );
    walker.links
}

/// Returns `true` if a mapping key names a quality, e.g. `1080p` or `Full HD`.
pub fn is_quality_key(key: &str) -> bool {
    QUALITY_KEY.is_match(key)
}

/// Returns `true` if `candidate` is an absolute `http`/`https` URL.
pub fn is_http_url(candidate: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| {
        candidate.len() > scheme.len()
            && candidate
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[derive(Debug, Default)]
struct PayloadWalker {
    seen: HashSet<String>,
    links: Vec<LinkRecord>,
    rejected: usize,
}

impl PayloadWalker {
    fn visit(&mut self, value: &Value, quality: &str, size: &str) {
        match Node::from(value) {
            Node::Scalar(text) => self.add_candidate(text, quality, size),
            Node::Sequence(items) => {
                for item in items {
                    self.visit(item, quality, size);
                }
            }
            Node::Mapping(map) => self.visit_mapping(map, quality, size),
            Node::Ignored => {}
        }
    }

    fn visit_mapping(&mut self, map: &Map<String, Value>, quality: &str, size: &str) {
        let own_quality = first_label(map, &QUALITY_FIELDS).unwrap_or_else(|| quality.to_string());
        let own_size = first_label(map, &SIZE_FIELDS).unwrap_or_else(|| size.to_string());

        let direct = direct_url(map);
        if let Some((_, url)) = direct {
            self.add_candidate(url, &own_quality, &own_size);
        }

        for (key, value) in map {
            if direct.is_some_and(|(field, _)| field == key.as_str()) {
                continue;
            }
            if !Node::from(value).is_traversable() {
                continue;
            }

            // a quality-like key overrides the quality for its own branch only
            if is_quality_key(key) {
                let label = classifier::normalize(key);
                self.visit(value, &label, &own_size);
            } else {
                self.visit(value, &own_quality, &own_size);
            }
        }
    }

    fn add_candidate(&mut self, candidate: &str, quality: &str, size: &str) {
        let url = candidate.trim();
        if !is_http_url(url) {
            self.rejected += 1;
            return;
        }
        if !self.seen.insert(url.to_string()) {
            trace!(url, "skipping duplicate link");
            return;
        }

        trace!(url, quality, size, "accepted link");
        self.links.push(LinkRecord::new(quality, size, url));
    }
}

/// Returns the first meaningful label among `fields`.
fn first_label(map: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| map.get(*field))
        .find_map(classifier::normalize_value)
}

/// Returns the first direct URL field holding a non-blank string.
fn direct_url(map: &Map<String, Value>) -> Option<(&'static str, &str)> {
    URL_FIELDS.iter().find_map(|field| {
        map.get(*field)
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
            .map(|url| (*field, url))
    })
}
