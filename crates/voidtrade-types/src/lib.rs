// crates/voidtrade-types/src/lib.rs
// ============================================================================
// Module: Voidtrade Types
// Description: Wire types, response envelope, and knowledge projection shared
//              across the Voidtrade client crates.
// Purpose: Provide one canonical vocabulary for server payloads so the cache,
//          API, and state layers never re-parse raw JSON shapes.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! This crate defines the typed surface of the Voidtrade game server: the
//! `ApiResponse` envelope every endpoint wraps its payload in, the domain
//! payloads (auth, galaxies, players, ships, trading, travel, scanning), and
//! the knowledge projection used by the galaxy map.
//! Invariants:
//! - Envelope decoding is total: any combination of `success`/`data`/`error`
//!   resolves to exactly one [`ApiOutcome`] variant.
//! - Knowledge normalization is idempotent and tolerant of legacy field
//!   spellings.
//! - The 0-4 knowledge scale and the legacy 0-9 scan scale stay separate
//!   types and separate color tables.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod clock;
pub mod envelope;
pub mod galaxy;
pub mod geometry;
pub mod knowledge;
pub mod location;
pub mod player;
pub mod scanning;
pub mod ship;
pub mod trading;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use auth::AuthData;
pub use auth::LoginRequest;
pub use auth::RegisterRequest;
pub use auth::User;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use envelope::ApiError;
pub use envelope::ApiOutcome;
pub use envelope::ApiResponse;
pub use envelope::ResponseMeta;
pub use envelope::CODE_NETWORK_ERROR;
pub use envelope::CODE_TIMEOUT;
pub use envelope::CODE_UNKNOWN;
pub use galaxy::Galaxy;
pub use galaxy::GalaxyListResponse;
pub use galaxy::GalaxyStatus;
pub use galaxy::GalaxySummary;
pub use galaxy::JoinGalaxyErrorCode;
pub use geometry::GridPosition;
pub use geometry::Position;
pub use knowledge::KnowledgeLevel;
pub use knowledge::KnowledgeMapResponse;
pub use knowledge::KnownLane;
pub use knowledge::KnownSystem;
pub use location::CurrentSystemResponse;
pub use location::GenerationMarker;
pub use location::TravelResponse;
pub use location::GENERATING_MARKER;
pub use player::MyPlayerResponse;
pub use player::PlayerProfile;
pub use scanning::ScanSystemResponse;
pub use ship::MyShipResponse;
pub use trading::CargoResponse;
pub use trading::HubInventoryResponse;
