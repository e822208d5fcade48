// crates/voidtrade-api/src/lib.rs
// ============================================================================
// Module: Voidtrade API
// Description: Typed async HTTP client for the Voidtrade game server.
// Purpose: Give the state layer one strongly typed surface over the server's
//          JSON envelope protocol.
// Dependencies: voidtrade-types, reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! The client groups endpoints the way the server routes them: auth,
//! galaxies, NPCs, players, trading hubs, locations, and catalog data. All
//! calls return [`ApiResult`] around the shared [`voidtrade_types::ApiResponse`]
//! envelope. Server responses are untrusted input; the client decodes them
//! strictly and never retries.
//! Invariants:
//! - A client-side timeout resolves to a `TIMEOUT` envelope, not an error.
//! - Only the galaxy list endpoints fold other transport failures into
//!   `NETWORK_ERROR` envelopes; everywhere else they propagate as
//!   [`ApiClientError::Transport`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod catalog;
pub mod client;
pub mod galaxies;
pub mod location;
pub mod npcs;
pub mod players;
pub mod trading;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthEndpoints;
pub use catalog::CatalogEndpoints;
pub use client::ApiClient;
pub use client::ApiClientConfig;
pub use client::ApiClientError;
pub use client::ApiResult;
pub use client::TokenStore;
pub use client::DEFAULT_TIMEOUT;
pub use client::LONG_TIMEOUT;
pub use galaxies::GalaxyEndpoints;
pub use location::LocationEndpoints;
pub use npcs::NpcEndpoints;
pub use players::PlayerEndpoints;
pub use trading::TradingHubEndpoints;
