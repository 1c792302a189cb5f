use crate::link::{EpisodeRecord, LinkRecord};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Whether a title is a single movie or an episodic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => f.write_str("movie"),
            MediaKind::Series => f.write_str("series"),
        }
    }
}

/// Descriptive fields of a title, each present only when upstream supplied a
/// meaningful value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
}

/// The normalized view of one upstream details document.
///
/// The kind is derived from the episodes: a payload is a [`MediaKind::Series`]
/// exactly when it has at least one episode, and `episodes` is only present
/// for series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsPayload {
    title: String,
    #[serde(rename = "type")]
    kind: MediaKind,
    download_links: Vec<LinkRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episodes: Option<Vec<EpisodeRecord>>,
    #[serde(flatten)]
    info: MediaInfo,
}

impl DetailsPayload {
    /// Assembles a payload, deriving its kind from `episodes`.
    pub fn new(
        title: impl Into<String>,
        download_links: Vec<LinkRecord>,
        episodes: Vec<EpisodeRecord>,
    ) -> Self {
        let (kind, episodes) = if episodes.is_empty() {
            (MediaKind::Movie, None)
        } else {
            (MediaKind::Series, Some(episodes))
        };

        Self {
            title: title.into(),
            kind,
            download_links,
            episodes,
            info: MediaInfo::default(),
        }
    }

    pub fn with_info(mut self, info: MediaInfo) -> Self {
        self.info = info;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn download_links(&self) -> &[LinkRecord] {
        &self.download_links
    }

    /// Returns the episodes of a series, or `None` for a movie.
    pub fn episodes(&self) -> Option<&[EpisodeRecord]> {
        self.episodes.as_deref()
    }

    pub fn info(&self) -> &MediaInfo {
        &self.info
    }

    /// Total number of links across the movie-level list and all episodes.
    pub fn link_count(&self) -> usize {
        let episode_links: usize = self
            .episodes()
            .unwrap_or_default()
            .iter()
            .map(|episode| episode.download_links().len())
            .sum();
        self.download_links.len() + episode_links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::UNKNOWN;

    fn link(url: &str) -> LinkRecord {
        LinkRecord::new(UNKNOWN, UNKNOWN, url)
    }

    #[test]
    fn no_episodes_is_movie() {
        let details = DetailsPayload::new("Inception", vec![link("http://x/a.mp4")], vec![]);

        assert_eq!(details.kind(), MediaKind::Movie);
        assert!(details.episodes().is_none());
    }

    #[test]
    fn episodes_force_series() {
        let episode = EpisodeRecord::new(1, vec![link("http://x/e1.mp4")]).unwrap();
        let details = DetailsPayload::new("Dark", vec![], vec![episode]);

        assert_eq!(details.kind(), MediaKind::Series);
        assert_eq!(details.episodes().map(<[_]>::len), Some(1));
        assert_eq!(details.link_count(), 1);
    }

    #[test]
    fn serializes_upstream_vocabulary() {
        let details = DetailsPayload::new("Inception", vec![link("http://x/a.mp4")], vec![]);
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["type"], "movie");
        assert_eq!(json["downloadLinks"][0]["url"], "http://x/a.mp4");
        assert!(json.get("episodes").is_none());
        assert!(json.get("year").is_none());
    }

    #[test]
    fn info_fields_sit_beside_links() {
        let info = MediaInfo {
            year: Some("2010".to_string()),
            genre: Some("Sci-Fi".to_string()),
            ..MediaInfo::default()
        };
        let details = DetailsPayload::new("Inception", vec![], vec![]).with_info(info);
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["year"], "2010");
        assert_eq!(json["genre"], "Sci-Fi");
        assert!(json.get("rating").is_none());
        assert_eq!(details.info().year.as_deref(), Some("2010"));
    }
}
