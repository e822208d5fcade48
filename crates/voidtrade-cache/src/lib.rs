// crates/voidtrade-cache/src/lib.rs
// ============================================================================
// Module: Voidtrade Cache
// Description: Best-effort client-side caches over a host-supplied key-value
//              store.
// Purpose: Keep auth, galaxy-list, price-history, and tutorial data warm
//          across sessions without ever blocking on storage failures.
// Dependencies: voidtrade-types, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Hosts supply storage via [`KeyValueStore`]; every cache in this crate is
//! best-effort on top of it. Schema-versioned entries invalidate themselves
//! on version bumps, malformed entries read as empty, and write failures are
//! swallowed after a debug log.
//! Invariants:
//! - No cache operation fails; defects degrade to cache misses.
//! - The auth user cache expires after five minutes.
//! - Price history keeps at most twenty snapshots per mineral and skips
//!   same-hub repeats within one minute.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth_cache;
pub mod galaxy_cache;
pub mod price_history;
pub mod store;
pub mod tutorial_store;
pub mod versioned;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth_cache::AuthUserCache;
pub use auth_cache::AUTH_CACHE_TTL_MILLIS;
pub use galaxy_cache::GalaxyListCache;
pub use price_history::PriceHistory;
pub use price_history::PriceSnapshot;
pub use price_history::DEDUP_WINDOW_MILLIS;
pub use price_history::MAX_SNAPSHOTS_PER_MINERAL;
pub use store::KeyValueStore;
pub use store::MemoryStore;
pub use tutorial_store::TutorialProgress;
pub use tutorial_store::TutorialStore;
pub use versioned::VersionedCache;
