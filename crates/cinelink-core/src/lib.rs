//! Core types shared by the Cinelink crates.
//!
//! This crate holds the value objects produced by payload normalization
//! ([`LinkRecord`], [`EpisodeRecord`], [`DetailsPayload`]) and the
//! [`Token`] type used by the redirect store and the HTTP gateway.

pub mod details;
pub mod error;
pub mod link;
pub mod token;

pub use details::{DetailsPayload, MediaInfo, MediaKind};
pub use error::CoreError;
pub use link::{EpisodeRecord, LinkRecord, UNKNOWN};
pub use token::Token;
