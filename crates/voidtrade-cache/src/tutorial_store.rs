// crates/voidtrade-cache/src/tutorial_store.rs
// ============================================================================
// Module: Tutorial Persistence
// Description: Versioned persistence of tutorial progress.
// Purpose: Let a tutorial resume mid-run across sessions and stay finished
//          once completed or skipped.
// Dependencies: voidtrade-cache::versioned, serde
// ============================================================================

//! ## Overview
//! Tutorial progress persists as `{version, completed, step_id}` at schema
//! version 2. Entries from older versions read as absent, which restarts the
//! tutorial from the beginning.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::store::KeyValueStore;
use crate::versioned::VersionedCache;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Storage key for tutorial progress.
const TUTORIAL_KEY: &str = "tutorial_state";

/// Schema version of the persisted progress.
const TUTORIAL_VERSION: u32 = 2;

// ============================================================================
// SECTION: Tutorial Store
// ============================================================================

/// Persisted tutorial progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialProgress {
    /// Whether the tutorial finished or was skipped.
    pub completed: bool,
    /// Step the player was on when progress was saved.
    pub step_id: String,
}

/// Versioned store for tutorial progress.
pub struct TutorialStore {
    /// Host-supplied storage backend.
    store: Arc<dyn KeyValueStore>,
    /// Versioned persistence binding.
    cache: VersionedCache<TutorialProgress>,
}

impl TutorialStore {
    /// Binds the store to a storage backend.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cache: VersionedCache::new(TUTORIAL_KEY, TUTORIAL_VERSION),
        }
    }

    /// Returns the saved progress, if any current-version entry exists.
    #[must_use]
    pub fn load(&self) -> Option<TutorialProgress> {
        self.cache.load(self.store.as_ref())
    }

    /// Saves the progress.
    pub fn save(&self, progress: &TutorialProgress) {
        self.cache.store(self.store.as_ref(), progress);
    }

    /// Drops the saved progress.
    pub fn clear(&self) {
        self.cache.clear(self.store.as_ref());
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

    #[test]
    fn round_trips_progress() {
        let store = TutorialStore::new(Arc::new(MemoryStore::new()));
        assert!(store.load().is_none());
        let progress = TutorialProgress {
            completed: false,
            step_id: "buy_minerals".to_owned(),
        };
        store.save(&progress);
        assert_eq!(store.load(), Some(progress));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn older_schema_reads_as_absent() {
        let backend = Arc::new(MemoryStore::new());
        assert!(backend.set(
            "tutorial_state",
            r#"{"version":1,"completed":false,"step_id":"enter_game"}"#,
        ));
        let store = TutorialStore::new(backend);
        assert!(store.load().is_none());
    }
}
