// crates/voidtrade-types/src/clock.rs
// ============================================================================
// Module: Clock Seam
// Description: Wall-clock access behind a trait for TTL and dedup logic.
// Purpose: Keep time-dependent cache and state logic deterministic in tests.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Cache TTLs, price-history deduplication, and travel-floor timing all need
//! the current time. Logic never reads the wall clock directly; it goes
//! through [`Clock`] so tests can drive time manually.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Clock Trait
// ============================================================================

/// Source of current time for caches and state containers.
pub trait Clock: Send + Sync {
    /// Returns the current time as unix epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// Returns the current time as an RFC 3339 string.
    fn now_rfc3339(&self) -> String {
        rfc3339_from_millis(self.now_millis())
    }
}

/// Formats unix epoch milliseconds as an RFC 3339 string.
///
/// Out-of-range values fall back to the unix epoch rather than failing; the
/// string is display metadata, not a correctness input.
#[must_use]
pub fn rfc3339_from_millis(millis: i64) -> String {
    let nanos = i128::from(millis) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// Parses an RFC 3339 string back into unix epoch milliseconds.
#[must_use]
pub fn millis_from_rfc3339(value: &str) -> Option<i64> {
    let parsed = OffsetDateTime::parse(value, &Rfc3339).ok()?;
    i64::try_from(parsed.unix_timestamp_nanos() / 1_000_000).ok()
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
    }
}

/// Manually driven clock for tests.
///
/// # Invariants
/// - Time only changes through [`ManualClock::set_millis`] and
///   [`ManualClock::advance_millis`].
#[derive(Debug, Default)]
pub struct ManualClock {
    /// Current time in unix epoch milliseconds.
    millis: AtomicI64,
}

impl ManualClock {
    /// Creates a manual clock starting at the given epoch milliseconds.
    #[must_use]
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Sets the current time.
    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Advances the current time by the given amount.
    pub fn advance_millis(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_round_trip() {
        let millis = 1_700_000_000_123_i64;
        let text = rfc3339_from_millis(millis);
        assert_eq!(millis_from_rfc3339(&text), Some(millis));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        clock.advance_millis(500);
        assert_eq!(clock.now_millis(), 1_500);
    }

    #[test]
    fn malformed_rfc3339_is_none() {
        assert_eq!(millis_from_rfc3339("not a timestamp"), None);
    }
}
