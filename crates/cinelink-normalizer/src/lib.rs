//! Payload normalization for upstream download-link documents.
//!
//! Scraper APIs describe the same thing, "where can this title be
//! downloaded", in many inconsistent JSON shapes. This crate turns any of
//! them into canonical, deduplicated [`LinkRecord`]s and assembles them into
//! a [`DetailsPayload`].
//!
//! Everything here is pure and synchronous: it works on already-decoded
//! [`serde_json::Value`]s, performs no I/O, and never fails. Malformed input
//! degrades to a smaller or empty result.
//!
//! # Example
//!
//! ```
//! use cinelink_core::MediaKind;
//! use cinelink_normalizer::normalize_details;
//! use serde_json::json;
//!
//! let details = normalize_details(&json!({
//!     "title": "Inception",
//!     "downloadLinks": {
//!         "720p": [{"url": "https://cdn.example/inception-720.mkv", "size": "1.1GB"}],
//!         "1080p": [{"url": "https://cdn.example/inception-1080.mkv", "size": "2.4GB"}]
//!     }
//! }));
//!
//! assert_eq!(details.kind(), MediaKind::Movie);
//! assert_eq!(details.download_links()[1].quality, "1080p");
//! ```
//!
//! [`LinkRecord`]: cinelink_core::LinkRecord
//! [`DetailsPayload`]: cinelink_core::DetailsPayload

pub mod classifier;
pub mod details;
pub mod episode;
pub mod fields;
pub mod node;
pub mod walker;

pub use details::normalize_details;
pub use episode::aggregate;
pub use walker::{walk, walk_with};
