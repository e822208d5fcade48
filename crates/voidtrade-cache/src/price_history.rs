// crates/voidtrade-cache/src/price_history.rs
// ============================================================================
// Module: Price History
// Description: Per-galaxy, per-mineral price snapshot log with dedup and a
//              bounded window.
// Purpose: Let the trading screens chart recent prices without a server-side
//          history endpoint.
// Dependencies: voidtrade-cache::versioned, voidtrade-types, serde
// ============================================================================

//! ## Overview
//! Every hub inventory fetch records one snapshot per listed mineral. Two
//! rules bound the log:
//! - a mineral keeps at most twenty snapshots; the oldest fall off first;
//! - a snapshot from the same hub within one minute of the previous one is
//!   skipped entirely, keeping the earlier entry.
//! The log is scoped to one galaxy; reading or writing under a different
//! galaxy UUID starts a fresh log.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use voidtrade_types::Clock;
use voidtrade_types::clock::millis_from_rfc3339;
use voidtrade_types::trading::HubInventoryItem;

use crate::store::KeyValueStore;
use crate::versioned::VersionedCache;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Storage key for the price history log.
const PRICE_HISTORY_KEY: &str = "price_history";

/// Schema version of the persisted log.
const PRICE_HISTORY_VERSION: u32 = 1;

/// Most snapshots retained per mineral.
pub const MAX_SNAPSHOTS_PER_MINERAL: usize = 20;

/// Window within which a repeat snapshot from the same hub is skipped.
pub const DEDUP_WINDOW_MILLIS: i64 = 60_000;

// ============================================================================
// SECTION: Price History
// ============================================================================

/// One recorded price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Hub the prices were observed at.
    pub hub_uuid: String,
    /// Hub display name at observation time.
    pub hub_name: String,
    /// Price the hub charged per unit.
    pub buy_price: f64,
    /// Price the hub paid per unit.
    pub sell_price: f64,
    /// Observation time, RFC 3339.
    pub timestamp: String,
}

/// Persisted log payload.
#[derive(Debug, Serialize, Deserialize)]
struct StoredHistory {
    /// Galaxy the log belongs to.
    galaxy_uuid: String,
    /// Snapshots keyed by mineral UUID.
    history: HashMap<String, Vec<PriceSnapshot>>,
}

/// Bounded per-galaxy price snapshot log.
pub struct PriceHistory {
    /// Host-supplied storage backend.
    store: Arc<dyn KeyValueStore>,
    /// Host-supplied time source.
    clock: Arc<dyn Clock>,
    /// Versioned persistence binding.
    cache: VersionedCache<StoredHistory>,
}

impl PriceHistory {
    /// Binds the log to a store and clock.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            cache: VersionedCache::new(PRICE_HISTORY_KEY, PRICE_HISTORY_VERSION),
        }
    }

    /// Loads the log for a galaxy, starting fresh on any mismatch.
    fn load_for(&self, galaxy_uuid: &str) -> StoredHistory {
        self.cache
            .load(self.store.as_ref())
            .filter(|stored| stored.galaxy_uuid == galaxy_uuid)
            .unwrap_or_else(|| StoredHistory {
                galaxy_uuid: galaxy_uuid.to_owned(),
                history: HashMap::new(),
            })
    }

    /// Records one snapshot per listed mineral from a hub inventory fetch.
    pub fn record_prices(
        &self,
        galaxy_uuid: &str,
        hub_uuid: &str,
        hub_name: &str,
        items: &[HubInventoryItem],
    ) {
        let mut stored = self.load_for(galaxy_uuid);
        let now_millis = self.clock.now_millis();
        let now = self.clock.now_rfc3339();

        for item in items {
            let snapshots = stored
                .history
                .entry(item.mineral.uuid.clone())
                .or_default();

            // Same hub within the window keeps the earlier entry.
            if let Some(last) = snapshots.last() {
                if last.hub_uuid == hub_uuid {
                    let within_window = millis_from_rfc3339(&last.timestamp)
                        .is_some_and(|last_millis| now_millis - last_millis < DEDUP_WINDOW_MILLIS);
                    if within_window {
                        continue;
                    }
                }
            }

            snapshots.push(PriceSnapshot {
                hub_uuid: hub_uuid.to_owned(),
                hub_name: hub_name.to_owned(),
                buy_price: item.buy_price,
                sell_price: item.sell_price,
                timestamp: now.clone(),
            });

            if snapshots.len() > MAX_SNAPSHOTS_PER_MINERAL {
                let overflow = snapshots.len() - MAX_SNAPSHOTS_PER_MINERAL;
                snapshots.drain(..overflow);
            }
        }

        self.cache.store(self.store.as_ref(), &stored);
    }

    /// Returns the recorded snapshots for one mineral, oldest first.
    #[must_use]
    pub fn history(&self, galaxy_uuid: &str, mineral_uuid: &str) -> Vec<PriceSnapshot> {
        let mut stored = self.load_for(galaxy_uuid);
        stored.history.remove(mineral_uuid).unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use proptest::prelude::*;
    use voidtrade_types::ManualClock;
    use voidtrade_types::trading::Mineral;

    use super::*;
    use crate::store::MemoryStore;

    fn item(mineral_uuid: &str, buy: f64, sell: f64) -> HubInventoryItem {
        HubInventoryItem {
            mineral: Mineral {
                uuid: mineral_uuid.to_owned(),
                name: format!("mineral {mineral_uuid}"),
                rarity: None,
            },
            buy_price: buy,
            sell_price: sell,
            quantity: None,
        }
    }

    fn history_under(clock_start: i64) -> (PriceHistory, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(clock_start));
        let history = PriceHistory::new(
            Arc::new(MemoryStore::new()),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        (history, clock)
    }

    #[test]
    fn same_hub_within_window_keeps_earlier_entry() {
        let (history, clock) = history_under(0);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 10.0, 8.0)]);
        clock.advance_millis(DEDUP_WINDOW_MILLIS - 1);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 99.0, 77.0)]);

        let snapshots = history.history("g-1", "m-1");
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].buy_price, 10.0);
    }

    #[test]
    fn same_hub_past_window_appends() {
        let (history, clock) = history_under(0);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 10.0, 8.0)]);
        clock.advance_millis(DEDUP_WINDOW_MILLIS);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 12.0, 9.0)]);
        assert_eq!(history.history("g-1", "m-1").len(), 2);
    }

    #[test]
    fn different_hub_within_window_appends() {
        let (history, clock) = history_under(0);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 10.0, 8.0)]);
        clock.advance_millis(5);
        history.record_prices("g-1", "hub-2", "Hub Two", &[item("m-1", 11.0, 9.0)]);
        assert_eq!(history.history("g-1", "m-1").len(), 2);
    }

    #[test]
    fn other_galaxy_starts_a_fresh_log() {
        let (history, _clock) = history_under(0);
        history.record_prices("g-1", "hub-1", "Hub One", &[item("m-1", 10.0, 8.0)]);
        assert!(history.history("g-2", "m-1").is_empty());
        history.record_prices("g-2", "hub-1", "Hub One", &[item("m-1", 20.0, 15.0)]);
        assert!(history.history("g-1", "m-1").is_empty());
    }

    proptest! {
        #[test]
        fn snapshot_count_never_exceeds_cap(writes in 1usize..60) {
            let (history, clock) = history_under(0);
            for round in 0..writes {
                // Alternate hubs so dedup never suppresses a write.
                let hub = if round % 2 == 0 { "hub-a" } else { "hub-b" };
                history.record_prices("g-1", hub, "Hub", &[item("m-1", 1.0, 1.0)]);
                clock.advance_millis(1);
            }
            let snapshots = history.history("g-1", "m-1");
            prop_assert!(snapshots.len() <= MAX_SNAPSHOTS_PER_MINERAL);
            prop_assert_eq!(snapshots.len(), writes.min(MAX_SNAPSHOTS_PER_MINERAL));
        }
    }
}
