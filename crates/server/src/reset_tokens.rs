//! In-process store for password-reset tokens.
//!
//! Tokens live for a fixed window and a second request for the same user
//! overwrites the first (last write wins). Expired entries are dropped
//! lazily on access.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Reset links are valid for 15 minutes.
pub const RESET_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
struct StoredToken {
    token: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ResetTokenCache {
    entries: RwLock<HashMap<i32, StoredToken>>,
}

impl ResetTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token for a user, replacing any previous one.
    pub fn insert(&self, user_id: i32, token: String, ttl: Duration) {
        let entry = StoredToken {
            token,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().insert(user_id, entry);
    }

    /// Check a presented token against the stored one. Expired entries are
    /// removed and never match.
    pub fn verify(&self, user_id: i32, token: &str) -> bool {
        let expired = {
            let entries = self.entries.read();
            match entries.get(&user_id) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return entry.token == token;
                }
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.entries.write().remove(&user_id);
        }
        false
    }

    /// Invalidate a user's token once it has been used.
    pub fn remove(&self, user_id: i32) {
        self.entries.write().remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_verify() {
        let cache = ResetTokenCache::new();
        cache.insert(7, "abc".to_string(), RESET_TOKEN_TTL);

        assert!(cache.verify(7, "abc"));
        assert!(!cache.verify(7, "wrong"));
        assert!(!cache.verify(8, "abc"));
    }

    #[test]
    fn expired_tokens_never_match() {
        let cache = ResetTokenCache::new();
        cache.insert(7, "abc".to_string(), Duration::ZERO);

        assert!(!cache.verify(7, "abc"));
    }

    #[test]
    fn removed_tokens_cannot_be_reused() {
        let cache = ResetTokenCache::new();
        cache.insert(7, "abc".to_string(), RESET_TOKEN_TTL);

        assert!(cache.verify(7, "abc"));
        cache.remove(7);
        assert!(!cache.verify(7, "abc"));
    }

    #[test]
    fn second_request_overwrites_first() {
        let cache = ResetTokenCache::new();
        cache.insert(7, "first".to_string(), RESET_TOKEN_TTL);
        cache.insert(7, "second".to_string(), RESET_TOKEN_TTL);

        assert!(!cache.verify(7, "first"));
        assert!(cache.verify(7, "second"));
    }
}
