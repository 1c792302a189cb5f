use std::time::Duration;
use thiserror::Error;

/// Result type for redirect store construction.
pub type Result<T> = std::result::Result<T, RedirectError>;

/// Errors returned when a redirect store is misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("invalid redirect ttl {ttl:?}: {reason}")]
    InvalidTtl { ttl: Duration, reason: &'static str },
    #[error("token entropy of {bytes} bytes is outside {min}..={max}")]
    InvalidTokenLength {
        bytes: usize,
        min: usize,
        max: usize,
    },
}
