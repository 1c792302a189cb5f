use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 64;

/// Path segment under which redirect tokens are served.
pub const REDIRECT_PATH: &str = "r";

/// An opaque redirect token.
///
/// Tokens are either generated from random bytes (base58 encoded) or parsed
/// from an incoming request path, in which case they must be 8-64 characters
/// long and contain only alphanumeric characters, hyphens, or underscores.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Creates a token by encoding the given bytes as base58.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinelink_core::Token;
    ///
    /// let token = Token::generated([7u8; 16]);
    /// assert!(!token.as_str().is_empty());
    /// ```
    pub fn generated<T: AsRef<[u8]>>(bytes: T) -> Self {
        Self(bs58::encode(bytes).into_string())
    }

    /// Parses a token received from an untrusted source.
    pub fn parse(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        Self::validate(&token)?;
        Ok(Self(token))
    }

    /// Creates a `Token` without validation.
    ///
    /// Use this only for tokens produced by trusted internal sources.
    pub fn new_unchecked(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the public redirect URL for this token under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            REDIRECT_PATH,
            self.0
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(token: &str) -> Result<()> {
        if token.len() < MIN_LENGTH || token.len() > MAX_LENGTH {
            return Err(CoreError::InvalidToken(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                token.len()
            )));
        }

        if !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidToken(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                token
            )));
        }

        Ok(())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
