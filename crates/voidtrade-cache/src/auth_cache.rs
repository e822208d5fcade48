// crates/voidtrade-cache/src/auth_cache.rs
// ============================================================================
// Module: Auth User Cache
// Description: Short-lived cache of the authenticated user record.
// Purpose: Let session restore skip the auth/me round-trip when a recent
//          user record is on hand.
// Dependencies: voidtrade-types, serde, serde_json
// ============================================================================

//! ## Overview
//! The authenticated user is cached for five minutes alongside the moment it
//! was written. A read past the TTL, or one that no longer parses, behaves as
//! a miss; the next successful auth/me call rewrites the entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use voidtrade_types::Clock;
use voidtrade_types::User;

use crate::store::KeyValueStore;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Storage key for the cached user.
const AUTH_CACHE_KEY: &str = "auth_user_cache";

/// How long a cached user stays valid.
pub const AUTH_CACHE_TTL_MILLIS: i64 = 5 * 60 * 1000;

// ============================================================================
// SECTION: Auth User Cache
// ============================================================================

/// Persisted user record with its write time.
#[derive(Debug, Serialize, Deserialize)]
struct CachedUser {
    /// The cached user.
    user: User,
    /// Write time in unix milliseconds.
    cached_at: i64,
}

/// Five-minute cache of the authenticated user.
pub struct AuthUserCache {
    /// Host-supplied storage backend.
    store: Arc<dyn KeyValueStore>,
    /// Host-supplied time source.
    clock: Arc<dyn Clock>,
}

impl AuthUserCache {
    /// Binds the cache to a store and clock.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns the cached user when the entry is fresh.
    #[must_use]
    pub fn get(&self) -> Option<User> {
        let raw = self.store.get(AUTH_CACHE_KEY)?;
        let entry = match serde_json::from_str::<CachedUser>(&raw) {
            Ok(entry) => entry,
            Err(error) => {
                debug!(%error, "discarding malformed auth user cache entry");
                return None;
            }
        };
        let age = self.clock.now_millis() - entry.cached_at;
        if age < AUTH_CACHE_TTL_MILLIS {
            Some(entry.user)
        } else {
            None
        }
    }

    /// Caches the user with the current time.
    pub fn put(&self, user: &User) {
        let entry = CachedUser {
            user: user.clone(),
            cached_at: self.clock.now_millis(),
        };
        if let Ok(raw) = serde_json::to_string(&entry) {
            self.store.set(AUTH_CACHE_KEY, &raw);
        }
    }

    /// Drops the cached user.
    pub fn clear(&self) {
        self.store.remove(AUTH_CACHE_KEY);
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use voidtrade_types::ManualClock;

    use super::*;
    use crate::store::MemoryStore;

    fn user() -> User {
        User {
            id: 7,
            name: "tala".to_owned(),
            email: "tala@example.com".to_owned(),
            is_admin: None,
        }
    }

    #[test]
    fn fresh_entry_hits_and_stale_entry_misses() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_000));
        let cache = AuthUserCache::new(store, Arc::clone(&clock) as Arc<dyn Clock>);

        cache.put(&user());
        assert_eq!(cache.get().map(|u| u.id), Some(7));

        clock.advance_millis(AUTH_CACHE_TTL_MILLIS - 1);
        assert!(cache.get().is_some());

        clock.advance_millis(1);
        assert!(cache.get().is_none());
    }

    #[test]
    fn clear_forgets_the_user() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(0));
        let cache = AuthUserCache::new(store, clock);
        cache.put(&user());
        cache.clear();
        assert!(cache.get().is_none());
    }
}
