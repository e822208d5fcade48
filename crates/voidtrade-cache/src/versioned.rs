// crates/voidtrade-cache/src/versioned.rs
// ============================================================================
// Module: Versioned Cache Wrapper
// Description: Schema-versioned JSON persistence over a key-value store.
// Purpose: Give every cache the same load/store/clear discipline: stale
//          schema versions and malformed entries read as empty.
// Dependencies: serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! A [`VersionedCache`] binds a storage key to a schema version. Loading an
//! entry whose version differs from the expected one, or whose JSON no longer
//! parses, yields `None` as if the entry never existed; the next store
//! overwrites it. The version number is serialized inline with the payload
//! fields, so bumping the version invalidates every older entry at once.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::marker::PhantomData;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::store::KeyValueStore;

// ============================================================================
// SECTION: Versioned Cache
// ============================================================================

/// Inline version wrapper read back around a payload.
#[derive(Deserialize)]
struct VersionedEntry<T> {
    /// Schema version of the persisted payload.
    version: u32,
    /// The payload fields, flattened beside the version.
    #[serde(flatten)]
    payload: T,
}

/// Borrowing twin of [`VersionedEntry`] used on the write path.
#[derive(Serialize)]
struct VersionedEntryRef<'payload, T> {
    /// Schema version of the persisted payload.
    version: u32,
    /// The payload fields, flattened beside the version.
    #[serde(flatten)]
    payload: &'payload T,
}

/// Schema-versioned JSON cache bound to one storage key.
///
/// # Invariants
/// - `load` never fails: missing, malformed, and version-mismatched entries
///   all read as `None`.
#[derive(Debug, Clone, Copy)]
pub struct VersionedCache<T> {
    /// Storage key the cache occupies.
    key: &'static str,
    /// Expected schema version.
    version: u32,
    /// Payload type marker.
    _marker: PhantomData<fn() -> T>,
}

impl<T> VersionedCache<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Binds a cache to a storage key and schema version.
    #[must_use]
    pub const fn new(key: &'static str, version: u32) -> Self {
        Self {
            key,
            version,
            _marker: PhantomData,
        }
    }

    /// Loads the cached payload, treating any defect as an empty cache.
    pub fn load(&self, store: &dyn KeyValueStore) -> Option<T> {
        let raw = store.get(self.key)?;
        match serde_json::from_str::<VersionedEntry<T>>(&raw) {
            Ok(entry) if entry.version == self.version => Some(entry.payload),
            Ok(entry) => {
                debug!(
                    key = self.key,
                    found = entry.version,
                    expected = self.version,
                    "discarding cache entry with stale schema version"
                );
                None
            }
            Err(error) => {
                debug!(key = self.key, %error, "discarding malformed cache entry");
                None
            }
        }
    }

    /// Stores the payload with the inline schema version.
    ///
    /// Returns `false` when serialization or the backend write fails; the
    /// cache stays best-effort either way.
    pub fn store(&self, store: &dyn KeyValueStore, payload: &T) -> bool {
        let entry = VersionedEntryRef {
            version: self.version,
            payload,
        };
        match serde_json::to_string(&entry) {
            Ok(raw) => store.set(self.key, &raw),
            Err(error) => {
                debug!(key = self.key, %error, "failed to serialize cache entry");
                false
            }
        }
    }

    /// Removes the cached entry.
    pub fn clear(&self, store: &dyn KeyValueStore) {
        store.remove(self.key);
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde::Serialize;

    use super::*;
    use crate::store::MemoryStore;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Payload {
        label: String,
    }

    #[test]
    fn round_trips_matching_version() {
        let store = MemoryStore::new();
        let cache = VersionedCache::<Payload>::new("entry", 3);
        assert!(cache.load(&store).is_none());
        assert!(cache.store(
            &store,
            &Payload {
                label: "kept".to_owned(),
            },
        ));
        assert_eq!(
            cache.load(&store),
            Some(Payload {
                label: "kept".to_owned(),
            })
        );
        cache.clear(&store);
        assert!(cache.load(&store).is_none());
    }

    #[test]
    fn stale_version_reads_as_empty() {
        let store = MemoryStore::new();
        let old = VersionedCache::<Payload>::new("entry", 2);
        assert!(old.store(
            &store,
            &Payload {
                label: "stale".to_owned(),
            },
        ));
        let current = VersionedCache::<Payload>::new("entry", 3);
        assert!(current.load(&store).is_none());
    }

    #[test]
    fn malformed_entry_reads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.set("entry", "not json"));
        let cache = VersionedCache::<Payload>::new("entry", 1);
        assert!(cache.load(&store).is_none());
    }
}
