use crate::error::{RedirectError, Result};
use cinelink_core::Token;
use rand::RngCore;

pub const MIN_TOKEN_BYTES: usize = 8;
pub const MAX_TOKEN_BYTES: usize = 32;
pub const DEFAULT_TOKEN_BYTES: usize = 16;

/// Generates redirect tokens from cryptographically strong random bytes.
///
/// The generator is pure: it never consults the store, and collisions are
/// treated as negligible rather than checked.
#[derive(Debug, Clone, Copy)]
pub struct TokenGenerator {
    byte_len: usize,
}

impl TokenGenerator {
    /// Creates a generator drawing `byte_len` random bytes per token.
    pub fn new(byte_len: usize) -> Result<Self> {
        if !(MIN_TOKEN_BYTES..=MAX_TOKEN_BYTES).contains(&byte_len) {
            return Err(RedirectError::InvalidTokenLength {
                bytes: byte_len,
                min: MIN_TOKEN_BYTES,
                max: MAX_TOKEN_BYTES,
            });
        }
        Ok(Self { byte_len })
    }

    /// Generates a fresh base58 token.
    pub fn generate(&self) -> Token {
        let mut bytes = vec![0u8; self.byte_len];
        rand::rng().fill_bytes(&mut bytes);
        Token::generated(bytes)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self {
            byte_len: DEFAULT_TOKEN_BYTES,
        }
    }
}
