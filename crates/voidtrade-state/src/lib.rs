// crates/voidtrade-state/src/lib.rs
// ============================================================================
// Module: Voidtrade State
// Description: Reactive session containers for the Voidtrade client.
// Purpose: Hold the authoritative client-side view of auth, player, and
//          tutorial state, driving the API client and caches underneath.
// Dependencies: voidtrade-api, voidtrade-cache, voidtrade-types, thiserror,
//               tokio, tracing
// ============================================================================

//! ## Overview
//! Three containers cover the client's session: [`AuthState`] owns the signed-in
//! user and token, [`PlayerState`] owns everything about one player in one
//! galaxy (including travel), and [`TutorialState`] owns the guided tour. Each
//! container is the single writer for its slice of state; UIs read the public
//! fields and accessors after awaiting an operation.
//! Invariants:
//! - The server is authoritative; containers adopt responses rather than
//!   predicting them.
//! - Loader failures are logged and leave prior state in place.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod player;
pub mod travel;
pub mod tutorial;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthState;
pub use player::PlayerState;
pub use player::ShipInfo;
pub use player::ShipStats;
pub use player::SystemInfo;
pub use player::TradeError;
pub use travel::TravelConfig;
pub use tutorial::TutorialState;
pub use tutorial::TutorialStep;
