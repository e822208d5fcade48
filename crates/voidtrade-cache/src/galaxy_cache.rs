// crates/voidtrade-cache/src/galaxy_cache.rs
// ============================================================================
// Module: Galaxy List Cache
// Description: Versioned cache of the galaxy list split into my/open games.
// Purpose: Serve the galaxy browser instantly while a refresh is in flight
//          and answer single-galaxy lookups without a round-trip.
// Dependencies: voidtrade-cache::versioned, voidtrade-types, serde
// ============================================================================

//! ## Overview
//! The galaxy list is cached at schema version 3 with the `cached_at` stamp
//! the server (or the client, when the server omits it) attached. Lookups by
//! UUID search `my_games` before `open_games` so a galaxy the player belongs
//! to wins over its open-game listing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use voidtrade_types::GalaxyListResponse;
use voidtrade_types::GalaxySummary;

use crate::store::KeyValueStore;
use crate::versioned::VersionedCache;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Storage key for the galaxy list.
const GALAXY_CACHE_KEY: &str = "galaxy_list_cache";

/// Schema version of the persisted galaxy list.
const GALAXY_CACHE_VERSION: u32 = 3;

// ============================================================================
// SECTION: Galaxy List Cache
// ============================================================================

/// Persisted galaxy list payload.
#[derive(Debug, Serialize, Deserialize)]
struct StoredGalaxyList {
    /// Galaxies the player has joined.
    my_games: Vec<GalaxySummary>,
    /// Galaxies open to join.
    open_games: Vec<GalaxySummary>,
    /// When the list was fetched.
    cached_at: String,
}

/// Versioned cache of the split galaxy list.
pub struct GalaxyListCache {
    /// Host-supplied storage backend.
    store: Arc<dyn KeyValueStore>,
    /// Versioned persistence binding.
    cache: VersionedCache<StoredGalaxyList>,
}

impl GalaxyListCache {
    /// Binds the cache to a store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cache: VersionedCache::new(GALAXY_CACHE_KEY, GALAXY_CACHE_VERSION),
        }
    }

    /// Returns the cached galaxy list, if a current-version entry exists.
    #[must_use]
    pub fn get(&self) -> Option<GalaxyListResponse> {
        let stored = self.cache.load(self.store.as_ref())?;
        Some(GalaxyListResponse {
            my_games: stored.my_games,
            open_games: stored.open_games,
            cached_at: stored.cached_at,
        })
    }

    /// Caches the galaxy list.
    pub fn put(&self, list: &GalaxyListResponse) {
        let stored = StoredGalaxyList {
            my_games: list.my_games.clone(),
            open_games: list.open_games.clone(),
            cached_at: list.cached_at.clone(),
        };
        self.cache.store(self.store.as_ref(), &stored);
    }

    /// Drops the cached galaxy list.
    pub fn clear(&self) {
        self.cache.clear(self.store.as_ref());
    }

    /// Looks up one galaxy by UUID, preferring the joined-games list.
    #[must_use]
    pub fn galaxy_by_uuid(&self, uuid: &str) -> Option<GalaxySummary> {
        let stored = self.cache.load(self.store.as_ref())?;
        stored
            .my_games
            .into_iter()
            .find(|galaxy| galaxy.uuid == uuid)
            .or_else(|| {
                stored
                    .open_games
                    .into_iter()
                    .find(|galaxy| galaxy.uuid == uuid)
            })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use super::*;
    use crate::store::MemoryStore;

    fn summary(uuid: &str, name: &str) -> GalaxySummary {
        serde_json::from_value(serde_json::json!({
            "uuid": uuid,
            "name": name,
            "size": "medium",
            "players": 3,
            "mode": "multiplayer",
        }))
        .unwrap()
    }

    fn list() -> GalaxyListResponse {
        GalaxyListResponse {
            my_games: vec![summary("g-1", "Mine")],
            open_games: vec![summary("g-1", "OpenDuplicate"), summary("g-2", "Open")],
            cached_at: "2026-08-24T12:00:00Z".to_owned(),
        }
    }

    #[test]
    fn round_trips_the_list() {
        let cache = GalaxyListCache::new(Arc::new(MemoryStore::new()));
        assert!(cache.get().is_none());
        cache.put(&list());
        let got = cache.get().unwrap();
        assert_eq!(got.my_games.len(), 1);
        assert_eq!(got.open_games.len(), 2);
        assert_eq!(got.cached_at, "2026-08-24T12:00:00Z");
        cache.clear();
        assert!(cache.get().is_none());
    }

    #[test]
    fn lookup_prefers_joined_games() {
        let cache = GalaxyListCache::new(Arc::new(MemoryStore::new()));
        cache.put(&list());
        assert_eq!(cache.galaxy_by_uuid("g-1").unwrap().name, "Mine");
        assert_eq!(cache.galaxy_by_uuid("g-2").unwrap().name, "Open");
        assert!(cache.galaxy_by_uuid("g-9").is_none());
    }
}
