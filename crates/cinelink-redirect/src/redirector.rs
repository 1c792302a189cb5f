use cinelink_core::Token;

/// Outcome of looking up a redirect token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The token is live and maps to this URL.
    Found(String),
    /// The token was never issued, or its expiry was already observed.
    NotFound,
    /// The token existed but its TTL has elapsed.
    Expired,
}

pub trait Redirector: Send + Sync + 'static {
    /// Stores a target URL and returns the token that resolves to it.
    fn issue(&self, target_url: &str) -> Token;

    /// Resolves a token to its stored URL, reporting expiry separately from
    /// absence.
    fn resolve(&self, token: &Token) -> Resolution;
}
