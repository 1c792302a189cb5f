use crate::clock::{Clock, SystemClock};
use crate::error::{RedirectError, Result};
use crate::generator::{TokenGenerator, DEFAULT_TOKEN_BYTES};
use crate::redirector::{Redirector, Resolution};
use cinelink_core::Token;
use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);
pub const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StoreSettings {
    /// How long an issued token stays resolvable
    #[builder(default = DEFAULT_TTL)]
    pub ttl: Duration,
    /// Random bytes drawn per token
    #[builder(default = DEFAULT_TOKEN_BYTES)]
    pub token_bytes: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    pub target_url: String,
    pub expires_at: Timestamp,
}

impl RedirectEntry {
    /// An entry is still valid at the instant it expires.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

/// In-process map from opaque tokens to target URLs.
///
/// Expired entries are removed lazily, on the first resolve that observes
/// them past their deadline.
#[derive(Debug)]
pub struct RedirectStore<C = SystemClock> {
    entries: DashMap<Token, RedirectEntry>,
    ttl: SignedDuration,
    generator: TokenGenerator,
    clock: C,
}

impl RedirectStore<SystemClock> {
    pub fn new(settings: StoreSettings) -> Result<Self> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> RedirectStore<C> {
    pub fn with_clock(settings: StoreSettings, clock: C) -> Result<Self> {
        let ttl = validate_ttl(settings.ttl)?;
        let generator = TokenGenerator::new(settings.token_bytes)?;
        Ok(Self {
            entries: DashMap::new(),
            ttl,
            generator,
            clock,
        })
    }

    /// Stores `target_url` under a fresh token that expires one TTL from now.
    ///
    /// The URL is stored as given; callers decide what is worth redirecting.
    pub fn issue(&self, target_url: impl Into<String>) -> Token {
        let token = self.generator.generate();
        let entry = RedirectEntry {
            target_url: target_url.into(),
            expires_at: self.clock.now() + self.ttl,
        };
        trace!(token = %token, expires_at = %entry.expires_at, "issued redirect token");
        self.entries.insert(token.clone(), entry);
        token
    }

    pub fn resolve(&self, token: &Token) -> Resolution {
        let now = self.clock.now();

        let Some(entry) = self.entries.get(token) else {
            trace!(token = %token, "redirect token not found");
            return Resolution::NotFound;
        };

        if entry.is_expired_at(now) {
            // release the read guard before taking the write lock on the shard
            drop(entry);
            self.entries.remove_if(token, |_, entry| entry.is_expired_at(now));
            debug!(token = %token, "redirect token expired");
            return Resolution::Expired;
        }

        trace!(token = %token, url = %entry.target_url, "resolved redirect token");
        Resolution::Found(entry.target_url.clone())
    }

    /// Number of stored entries, including expired ones not yet observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Clock + 'static> Redirector for RedirectStore<C> {
    fn issue(&self, target_url: &str) -> Token {
        RedirectStore::issue(self, target_url)
    }

    fn resolve(&self, token: &Token) -> Resolution {
        RedirectStore::resolve(self, token)
    }
}

fn validate_ttl(ttl: Duration) -> Result<SignedDuration> {
    if ttl.is_zero() {
        return Err(RedirectError::InvalidTtl {
            ttl,
            reason: "must be positive",
        });
    }
    if ttl > MAX_TTL {
        return Err(RedirectError::InvalidTtl {
            ttl,
            reason: "must not exceed one year",
        });
    }
    SignedDuration::try_from(ttl).map_err(|_| RedirectError::InvalidTtl {
        ttl,
        reason: "out of range",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::collections::HashSet;
    use std::sync::Arc;

    const TARGET: &str = "https://cdn.example/movie-1080.mkv";

    fn manual_store(ttl: Duration) -> (RedirectStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Timestamp::from_second(1_700_000_000).unwrap());
        let settings = StoreSettings::builder().ttl(ttl).build();
        let store = RedirectStore::with_clock(settings, clock.clone()).unwrap();
        (store, clock)
    }

    #[test]
    fn default_settings() {
        let settings = StoreSettings::default();
        assert_eq!(settings.ttl, Duration::from_secs(21_600));
        assert_eq!(settings.token_bytes, 16);
    }

    #[test]
    fn rejects_invalid_settings() {
        let zero = StoreSettings::builder().ttl(Duration::ZERO).build();
        assert!(matches!(
            RedirectStore::new(zero),
            Err(RedirectError::InvalidTtl { .. })
        ));

        let too_long = StoreSettings::builder()
            .ttl(MAX_TTL + Duration::from_secs(1))
            .build();
        assert!(RedirectStore::new(too_long).is_err());

        let short_token = StoreSettings::builder().token_bytes(4).build();
        assert!(matches!(
            RedirectStore::new(short_token),
            Err(RedirectError::InvalidTokenLength { bytes: 4, .. })
        ));
    }

    #[test]
    fn issue_then_resolve() {
        let store = RedirectStore::new(StoreSettings::default()).unwrap();
        assert!(store.is_empty());

        let token = store.issue(TARGET);
        assert!(token.as_str().len() >= 8);
        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve(&token), Resolution::Found(TARGET.to_string()));
    }

    #[test]
    fn resolve_is_repeatable_within_ttl() {
        let (store, clock) = manual_store(Duration::from_secs(60));
        let token = store.issue(TARGET);

        for _ in 0..3 {
            assert_eq!(store.resolve(&token), Resolution::Found(TARGET.to_string()));
            clock.advance(SignedDuration::from_secs(10));
        }
    }

    #[test]
    fn resolve_unknown_token() {
        let store = RedirectStore::new(StoreSettings::default()).unwrap();
        let token = Token::new_unchecked("nonexistent-token");
        assert_eq!(store.resolve(&token), Resolution::NotFound);
    }

    #[test]
    fn expired_token_is_reported_then_removed() {
        let (store, clock) = manual_store(Duration::from_secs(60));
        let token = store.issue(TARGET);

        clock.advance(SignedDuration::from_secs(61));
        assert_eq!(store.resolve(&token), Resolution::Expired);
        assert!(store.is_empty());
        assert_eq!(store.resolve(&token), Resolution::NotFound);
    }

    #[test]
    fn token_is_valid_at_its_deadline() {
        let (store, clock) = manual_store(Duration::from_secs(60));
        let token = store.issue(TARGET);

        clock.advance(SignedDuration::from_secs(60));
        assert_eq!(store.resolve(&token), Resolution::Found(TARGET.to_string()));

        clock.advance(SignedDuration::from_nanos(1));
        assert_eq!(store.resolve(&token), Resolution::Expired);
    }

    #[test]
    fn expiry_only_touches_the_stale_entry() {
        let (store, clock) = manual_store(Duration::from_secs(60));
        let stale = store.issue("https://a.example/old");
        clock.advance(SignedDuration::from_secs(30));
        let fresh = store.issue("https://a.example/new");
        clock.advance(SignedDuration::from_secs(40));

        assert_eq!(store.resolve(&stale), Resolution::Expired);
        assert_eq!(
            store.resolve(&fresh),
            Resolution::Found("https://a.example/new".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_url_gets_distinct_tokens() {
        let store = RedirectStore::new(StoreSettings::default()).unwrap();
        let first = store.issue(TARGET);
        let second = store.issue(TARGET);

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn system_clock_expiry() {
        let settings = StoreSettings::builder()
            .ttl(Duration::from_millis(20))
            .build();
        let store = RedirectStore::new(settings).unwrap();
        let token = store.issue(TARGET);

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(store.resolve(&token), Resolution::Expired);
    }

    #[test]
    fn concurrent_issue_and_resolve() {
        let store = Arc::new(RedirectStore::new(StoreSettings::default()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..100)
                        .map(|i| {
                            let url = format!("https://cdn.example/{worker}/{i}");
                            let token = store.issue(url.clone());
                            assert_eq!(store.resolve(&token), Resolution::Found(url));
                            token
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let tokens: HashSet<Token> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(tokens.len(), 800);
        assert_eq!(store.len(), 800);
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Arc<dyn Redirector> =
            Arc::new(RedirectStore::new(StoreSettings::default()).unwrap());
        let token = store.issue(TARGET);
        assert_eq!(store.resolve(&token), Resolution::Found(TARGET.to_string()));
    }
}
