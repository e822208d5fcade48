// crates/voidtrade-types/src/galaxy.rs
// ============================================================================
// Module: Galaxy Payloads
// Description: Wire types for galaxy listing, creation, NPCs, and membership.
// Purpose: Model the galaxy endpoint group's request and response bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Galaxy summaries, hydrated galaxy records, creation workflow payloads, NPC
//! management, and the join/membership flow. The list endpoint has two wire
//! shapes (split `{my_games, open_games}` and a flat array); normalization
//! into [`GalaxyListResponse`] happens in the API client.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::player::PlayerData;

// ============================================================================
// SECTION: Enumerations
// ============================================================================

/// Galaxy game mode.
///
/// # Invariants
/// - Variants are stable for serialization and cache compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Open multiplayer galaxy.
    Multiplayer,
    /// Single-player galaxy.
    SinglePlayer,
    /// Mixed human/NPC galaxy.
    Mixed,
}

/// Galaxy size tier.
///
/// # Invariants
/// - Variants are stable for serialization and cache compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    /// Small galaxy.
    Small,
    /// Medium galaxy.
    Medium,
    /// Large galaxy.
    Large,
    /// Massive galaxy.
    Massive,
}

/// NPC behavioral archetype.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcArchetype {
    /// General trader.
    Trader,
    /// Station merchant.
    Merchant,
    /// Explorer.
    Explorer,
    /// Asteroid miner.
    Miner,
    /// Pirate hunter.
    PirateHunter,
}

/// NPC difficulty setting.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcDifficulty {
    /// Easy NPCs.
    Easy,
    /// Medium NPCs.
    Medium,
    /// Hard NPCs.
    Hard,
    /// Expert NPCs.
    Expert,
}

/// Galaxy lifecycle status as reported by the server.
///
/// Older server versions report a numeric code, newer ones a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalaxyStatus {
    /// Numeric status code.
    Code(i64),
    /// Status label.
    Label(String),
}

// ============================================================================
// SECTION: Listing Types
// ============================================================================

/// Dehydrated galaxy summary for the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxySummary {
    /// Galaxy identifier.
    pub uuid: String,
    /// Galaxy name.
    pub name: String,
    /// Size tier.
    pub size: SizeTier,
    /// Current player count.
    pub players: u32,
    /// Game mode.
    pub mode: GameMode,
}

/// Canonical galaxy list shape after client normalization.
///
/// # Invariants
/// - `cached_at` is always populated; the client fills missing server
///   timestamps with the current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyListResponse {
    /// Galaxies the authenticated user has joined.
    #[serde(default)]
    pub my_games: Vec<GalaxySummary>,
    /// Galaxies open for joining.
    #[serde(default)]
    pub open_games: Vec<GalaxySummary>,
    /// Timestamp the list was produced, RFC 3339.
    pub cached_at: String,
}

/// Axis-aligned bounds of the galactic core region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreBounds {
    /// Minimum x coordinate.
    pub x_min: f64,
    /// Maximum x coordinate.
    pub x_max: f64,
    /// Minimum y coordinate.
    pub y_min: f64,
    /// Maximum y coordinate.
    pub y_max: f64,
}

/// Hydrated galaxy record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    /// Galaxy identifier.
    pub uuid: String,
    /// Galaxy name.
    pub name: String,
    /// Map width.
    pub width: f64,
    /// Map height.
    pub height: f64,
    /// Total star count.
    pub stars: u32,
    /// Game mode.
    pub game_mode: GameMode,
    /// Whether the galaxy is a mirrored layout.
    pub is_mirror: bool,
    /// Size tier when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_tier: Option<SizeTier>,
    /// Core region bounds when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_bounds: Option<CoreBounds>,
    /// Lifecycle status when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GalaxyStatus>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Aggregate statistics for a galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyStatistics {
    /// Total players in the galaxy.
    pub player_count: u32,
    /// Players active recently.
    pub active_players: u32,
    /// Total sector count.
    pub total_sectors: u32,
    /// Sectors with inhabited systems.
    pub inhabited_sectors: u32,
    /// Total trade volume in credits.
    pub total_trade_volume: i64,
}

/// Victory-path leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VictoryLeader {
    /// Player identifier.
    pub player_uuid: String,
    /// Player call sign.
    pub call_sign: String,
    /// Victory path name.
    pub victory_path: String,
    /// Progress fraction along the path.
    pub progress: f64,
    /// Leaderboard rank.
    pub rank: u32,
}

// ============================================================================
// SECTION: Creation Types
// ============================================================================

/// Galaxy creation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGalaxyRequest {
    /// Requested size tier.
    pub size_tier: SizeTier,
    /// Requested game mode.
    pub game_mode: GameMode,
    /// Optional galaxy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Skip mirror-layout generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_mirror: Option<bool>,
    /// Skip precursor-site generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_precursors: Option<bool>,
    /// Number of NPCs to seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npc_count: Option<u32>,
    /// Difficulty of seeded NPCs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npc_difficulty: Option<NpcDifficulty>,
}

/// Per-generator timing and counts from galaxy creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorMetrics {
    /// Whether the generator completed.
    pub success: bool,
    /// Timing and entity counts.
    pub metrics: GeneratorTimings,
    /// Generator-specific extra payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Error message when the generator failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Timing block inside [`GeneratorMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorTimings {
    /// Elapsed milliseconds.
    pub elapsed_ms: u64,
    /// Elapsed seconds when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
    /// Entity counts by kind.
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
}

/// Entity statistics from a completed galaxy generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxyCreationStatistics {
    /// Total points of interest.
    pub total_pois: u64,
    /// Total stars.
    pub total_stars: u64,
    /// Stars in the core region.
    pub core_stars: u64,
    /// Stars outside the core region.
    pub outer_stars: u64,
    /// Inhabited systems.
    pub inhabited_systems: u64,
    /// Fortified systems.
    pub fortified_systems: u64,
    /// Warp gates.
    pub warp_gates: u64,
    /// Active warp gates.
    pub active_gates: u64,
    /// Dormant warp gates.
    pub dormant_gates: u64,
    /// Trading hubs.
    pub trading_hubs: u64,
}

/// Full galaxy creation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyCreationResult {
    /// Created galaxy identity.
    pub galaxy: CreatedGalaxy,
    /// Entity statistics.
    pub statistics: GalaxyCreationStatistics,
    /// Aggregate and per-generator timings.
    pub metrics: CreationMetrics,
    /// Echo of the effective configuration.
    pub config: CreationConfig,
}

/// Identity block of a freshly created galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedGalaxy {
    /// Numeric database identifier.
    pub id: i64,
    /// Galaxy identifier.
    pub uuid: String,
    /// Galaxy name.
    pub name: String,
    /// Lifecycle status label.
    pub status: String,
}

/// Aggregate timing block in [`GalaxyCreationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationMetrics {
    /// Total elapsed milliseconds.
    pub total_elapsed_ms: u64,
    /// Total elapsed seconds.
    pub total_elapsed_seconds: f64,
    /// Per-generator metrics keyed by generator name.
    #[serde(default)]
    pub generators: BTreeMap<String, GeneratorMetrics>,
}

/// Effective configuration echoed by galaxy creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationConfig {
    /// Size tier used.
    pub tier: SizeTier,
    /// Game mode used.
    pub game_mode: GameMode,
    /// Map dimensions.
    pub dimensions: CreationDimensions,
    /// Star counts per region.
    pub star_counts: CreationStarCounts,
}

/// Map dimensions inside [`CreationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreationDimensions {
    /// Map width.
    pub width: f64,
    /// Map height.
    pub height: f64,
}

/// Star counts inside [`CreationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationStarCounts {
    /// Core-region stars.
    pub core: u64,
    /// Outer-region stars.
    pub outer: u64,
    /// Total stars.
    pub total: u64,
}

/// Size tier descriptor from the size-tiers endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTierInfo {
    /// Tier value.
    pub value: SizeTier,
    /// Human-readable label.
    pub label: String,
    /// Outer region bounds.
    pub outer_bounds: f64,
    /// Core region bounds.
    pub core_bounds: f64,
    /// Core star count.
    pub core_stars: u64,
    /// Outer star count.
    pub outer_stars: u64,
    /// Total star count.
    pub total_stars: u64,
}

/// Size tiers listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTiersResponse {
    /// Available size tiers.
    pub tiers: Vec<SizeTierInfo>,
}

/// Status of a single creation step.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStepStatus {
    /// Step has not started.
    Pending,
    /// Step is running.
    Running,
    /// Step finished successfully.
    Completed,
    /// Step failed.
    Failed,
}

/// One step of the creation progress report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationStatusStep {
    /// Step ordinal.
    pub step: u32,
    /// Step name.
    pub name: String,
    /// Completion percentage.
    pub percentage: f64,
    /// Step status.
    pub status: CreationStepStatus,
}

/// Creation progress report for an in-flight galaxy generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationStatus {
    /// Numeric galaxy identifier.
    pub galaxy_id: i64,
    /// Galaxy identifier.
    pub galaxy_uuid: String,
    /// Galaxy name.
    pub galaxy_name: String,
    /// Lifecycle status label.
    pub status: String,
    /// Size tier when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_tier: Option<SizeTier>,
    /// Overall progress percentage.
    pub current_progress: f64,
    /// Whether generation is complete.
    pub is_complete: bool,
    /// Generation start timestamp.
    pub generation_started_at: String,
    /// Generation completion timestamp when finished.
    pub generation_completed_at: Option<String>,
    /// Per-step progress keyed by step name.
    #[serde(default)]
    pub steps: BTreeMap<String, CreationStatusStep>,
}

// ============================================================================
// SECTION: NPC Types
// ============================================================================

/// NPC archetype descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcArchetypeInfo {
    /// Archetype identifier.
    pub id: NpcArchetype,
    /// Human-readable name.
    pub name: String,
    /// Archetype description.
    pub description: String,
}

/// NPC record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    /// NPC identifier.
    pub uuid: String,
    /// Galaxy the NPC belongs to.
    pub galaxy_uuid: String,
    /// NPC call sign.
    pub call_sign: String,
    /// Behavioral archetype.
    pub archetype: NpcArchetype,
    /// NPC level.
    pub level: u32,
    /// NPC credits.
    pub credits: i64,
    /// Creation timestamp.
    pub created_at: String,
}

/// Request body for adding NPCs to a galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddNpcsRequest {
    /// Archetypes to spawn.
    pub archetypes: Vec<NpcArchetype>,
    /// Number of NPCs to spawn per archetype.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

// ============================================================================
// SECTION: Membership Types
// ============================================================================

/// Galaxy join request body.
///
/// # Invariants
/// - `call_sign` is required only when the join creates a new player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGalaxyRequest {
    /// Call sign for a newly created player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
}

/// Galaxy join response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinGalaxyResponse {
    /// The player record (existing or freshly created).
    pub player: PlayerData,
    /// Whether the join created a new player.
    pub created: bool,
}

/// Known business error codes returned by the join endpoint.
///
/// # Invariants
/// - Variants are matched by literal string; unrecognized codes fall back to
///   the server-supplied message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinGalaxyErrorCode {
    /// Galaxy is not accepting new players.
    GalaxyNotActive,
    /// Galaxy is at maximum capacity.
    GalaxyFull,
    /// Galaxy is single-player only.
    SinglePlayerGalaxy,
    /// Call sign already taken in this galaxy.
    DuplicateCallSign,
    /// No starting location could be assigned.
    NoStartingLocation,
}

impl JoinGalaxyErrorCode {
    /// Parses a wire error code, returning `None` for unrecognized codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GALAXY_NOT_ACTIVE" => Some(Self::GalaxyNotActive),
            "GALAXY_FULL" => Some(Self::GalaxyFull),
            "SINGLE_PLAYER_GALAXY" => Some(Self::SinglePlayerGalaxy),
            "DUPLICATE_CALL_SIGN" => Some(Self::DuplicateCallSign),
            "NO_STARTING_LOCATION" => Some(Self::NoStartingLocation),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use super::*;

    #[test]
    fn game_mode_uses_snake_case() {
        let json = serde_json::to_string(&GameMode::SinglePlayer).unwrap();
        assert_eq!(json, "\"single_player\"");
    }

    #[test]
    fn galaxy_status_accepts_both_wire_shapes() {
        let code: GalaxyStatus = serde_json::from_str("3").unwrap();
        assert_eq!(code, GalaxyStatus::Code(3));
        let label: GalaxyStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(label, GalaxyStatus::Label("active".to_string()));
    }

    #[test]
    fn join_error_codes_parse() {
        assert_eq!(
            JoinGalaxyErrorCode::from_code("GALAXY_FULL"),
            Some(JoinGalaxyErrorCode::GalaxyFull)
        );
        assert_eq!(JoinGalaxyErrorCode::from_code("SOMETHING_ELSE"), None);
    }
}
