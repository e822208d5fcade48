// crates/voidtrade-cache/src/store.rs
// ============================================================================
// Module: Key-Value Storage Capability
// Description: Storage trait for best-effort string persistence and an
//              in-memory reference implementation.
// Purpose: Decouple the cache layer from the host's storage backend.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Hosts supply storage through [`KeyValueStore`]; the cache layer never
//! assumes a backend. All operations are best-effort and fail open: a
//! backend that cannot read answers `None`, a backend that cannot write
//! answers `false`, and callers carry on either way.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// SECTION: Storage Trait
// ============================================================================

/// Best-effort string storage supplied by the host.
///
/// # Invariants
/// - Implementations never panic and never surface backend failures as
///   errors; they degrade to `None`/`false`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Returns `false` when the write was lost.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory [`KeyValueStore`] backed by a mutex-guarded map.
///
/// The reference implementation for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Guarded key-value entries.
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries.lock().is_ok_and(|mut entries| {
            entries.insert(key.to_owned(), value.to_owned());
            true
        })
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
        assert!(store.set("k", "v"));
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert!(store.get("k").is_none());
    }
}
