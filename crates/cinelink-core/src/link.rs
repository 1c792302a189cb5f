use serde::{Deserialize, Serialize};

/// Sentinel used for a quality or size label that is missing or meaningless.
pub const UNKNOWN: &str = "Unknown";

/// A single downloadable link discovered in an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Quality label such as `720p` or `Full HD`, or [`UNKNOWN`].
    pub quality: String,
    /// Human readable size such as `1.2GB`, or [`UNKNOWN`].
    pub size: String,
    /// Absolute `http`/`https` URL of the file.
    pub url: String,
}

impl LinkRecord {
    pub fn new(
        quality: impl Into<String>,
        size: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            quality: quality.into(),
            size: size.into(),
            url: url.into(),
        }
    }

    /// Returns `true` when the record carries a known size label.
    pub fn has_size(&self) -> bool {
        self.size != UNKNOWN
    }
}

/// The links belonging to one episode of a series.
///
/// An episode always has a positive number and at least one link; empty
/// episodes are never materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRecord {
    episode_number: u32,
    download_links: Vec<LinkRecord>,
}

impl EpisodeRecord {
    /// Creates an episode record.
    ///
    /// Returns `None` if `episode_number` is zero or `download_links` is empty.
    pub fn new(episode_number: u32, download_links: Vec<LinkRecord>) -> Option<Self> {
        if episode_number == 0 || download_links.is_empty() {
            return None;
        }
        Some(Self {
            episode_number,
            download_links,
        })
    }

    pub fn episode_number(&self) -> u32 {
        self.episode_number
    }

    pub fn download_links(&self) -> &[LinkRecord] {
        &self.download_links
    }
}
