// crates/voidtrade-types/src/player.rs
// ============================================================================
// Module: Player Payloads
// Description: Wire types for player CRUD, status, stats, and the my-player
//              membership probe.
// Purpose: Model the player endpoint group's request and response bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Player records come in two nesting styles: the CRUD endpoints return
//! [`PlayerData`] directly, while the galaxy `my-player` probe may wrap the
//! profile together with sector context or return it bare.
//! [`MyPlayerResponse`] absorbs both shapes so the state layer sees one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::geometry::GridPosition;

// ============================================================================
// SECTION: Core Records
// ============================================================================

/// Gauge with a current and maximum value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Current value.
    pub current: f64,
    /// Maximum value.
    pub max: f64,
}

/// Shield gauge with an optional grade label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldGauge {
    /// Current value.
    pub current: f64,
    /// Maximum value.
    pub max: f64,
    /// Shield grade when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Embedded ship block inside [`PlayerData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    /// Hull gauge.
    pub hull: Gauge,
    /// Shield gauge.
    pub shield: ShieldGauge,
    /// Fuel gauge.
    pub fuel: Gauge,
    /// Cargo capacity in units.
    pub cargo_capacity: u32,
    /// Cargo currently used in units.
    pub cargo_used: u32,
}

/// Full player record from the player CRUD endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    /// Player identifier.
    pub uuid: String,
    /// Galaxy the player belongs to.
    pub galaxy_uuid: String,
    /// Player call sign.
    pub call_sign: String,
    /// Player level when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Experience points when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u64>,
    /// Current system identifier.
    pub current_system_uuid: String,
    /// Current system name.
    pub current_system_name: String,
    /// Current system type label.
    pub current_system_type: String,
    /// Active ship block.
    pub ship: ShipSnapshot,
    /// Credits held.
    pub credits: i64,
    /// Lifecycle status when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Lightweight player row from the player list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerListItem {
    /// Player identifier.
    pub uuid: String,
    /// Galaxy the player belongs to.
    pub galaxy_uuid: String,
    /// Galaxy name when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galaxy_name: Option<String>,
    /// Player call sign.
    pub call_sign: String,
    /// Player level when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Credits held when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
    /// Lifecycle status when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Player status snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Player identifier.
    pub uuid: String,
    /// Player call sign.
    pub call_sign: String,
    /// Player level.
    pub level: u32,
    /// Experience points.
    pub experience: u64,
    /// Credits held.
    pub credits: i64,
    /// Current location block.
    pub current_location: StatusLocation,
    /// Active ship block.
    pub active_ship: StatusShip,
    /// Lifecycle status label.
    pub status: String,
}

/// Location block inside [`PlayerStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLocation {
    /// Location name.
    pub name: String,
    /// Map coordinates.
    pub coordinates: crate::geometry::Position,
}

/// Ship block inside [`PlayerStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShip {
    /// Ship name.
    pub name: String,
    /// Current hull value.
    pub hull: f64,
    /// Current fuel value.
    pub fuel: f64,
}

/// Lifetime player statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Player identifier.
    pub uuid: String,
    /// Player call sign.
    pub call_sign: String,
    /// Systems visited.
    pub systems_visited: u64,
    /// Total distance traveled.
    pub total_distance_traveled: f64,
    /// Enemies defeated.
    pub enemies_defeated: u64,
    /// Trades completed.
    pub trades_completed: u64,
    /// Total credits earned.
    pub total_credits_earned: i64,
}

/// Player creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    /// Galaxy to create the player in.
    pub galaxy_uuid: String,
    /// Call sign for the new player.
    pub call_sign: String,
}

/// Player update request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlayerRequest {
    /// New call sign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
}

// ============================================================================
// SECTION: My-Player Probe
// ============================================================================

/// System type as carried by the my-player location block.
///
/// Older server versions report a numeric type code, newer ones a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SystemTypeValue {
    /// Numeric type code.
    Code(i64),
    /// Type label.
    Label(String),
}

/// Location block inside [`PlayerProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLocation {
    /// Location identifier.
    pub uuid: String,
    /// Location name when reported directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Legacy field carrying the system name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    /// System type (numeric code or label).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub system_type: Option<SystemTypeValue>,
    /// X coordinate when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Y coordinate when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl ProfileLocation {
    /// Returns the display name, preferring the direct name over the legacy field.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.system_name.as_deref())
            .unwrap_or("Unknown System")
    }
}

/// Active ship block inside [`PlayerProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileShip {
    /// Ship identifier.
    pub uuid: String,
    /// Ship name.
    pub name: String,
    /// Ship class label.
    pub class: String,
}

/// Galaxy reference inside [`PlayerProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileGalaxy {
    /// Galaxy name.
    pub name: String,
}

/// Player profile carried by the my-player and join endpoints.
///
/// # Invariants
/// - Optional blocks are absent when the server has nothing to report; the
///   state layer falls back to defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Player identifier.
    pub uuid: String,
    /// Player call sign.
    pub call_sign: String,
    /// Credits held when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
    /// Player level when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Experience points when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u64>,
    /// Active ship block when the player owns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_ship: Option<ProfileShip>,
    /// Current location block when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<ProfileLocation>,
    /// Owning galaxy reference when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galaxy: Option<ProfileGalaxy>,
}

/// Sector context block returned alongside the player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorInfo {
    /// Sector identifier.
    pub uuid: String,
    /// Sector name.
    pub name: String,
    /// Display name when distinct from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Sector grid coordinates.
    pub grid: GridPosition,
    /// Danger rating when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_level: Option<DangerLevel>,
}

/// Sector danger rating.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerLevel {
    /// Low danger.
    Low,
    /// Medium danger.
    Medium,
    /// High danger.
    High,
    /// Extreme danger.
    Extreme,
}

/// My-player response in either of its two wire shapes.
///
/// # Invariants
/// - The wrapped shape is distinguished by the presence of a `player` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MyPlayerResponse {
    /// Profile wrapped together with sector context.
    Wrapped {
        /// Player profile.
        player: PlayerProfile,
        /// Current sector context when reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sector: Option<SectorInfo>,
        /// Total sector count in the galaxy when reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_sectors: Option<u32>,
    },
    /// Bare player profile.
    Direct(PlayerProfile),
}

impl MyPlayerResponse {
    /// Returns the player profile regardless of wire shape.
    #[must_use]
    pub const fn player(&self) -> &PlayerProfile {
        match self {
            Self::Wrapped {
                player, ..
            }
            | Self::Direct(player) => player,
        }
    }

    /// Returns the sector context when the wrapped shape carried one.
    #[must_use]
    pub const fn sector(&self) -> Option<&SectorInfo> {
        match self {
            Self::Wrapped {
                sector, ..
            } => sector.as_ref(),
            Self::Direct(_) => None,
        }
    }

    /// Returns the galaxy's total sector count when reported.
    #[must_use]
    pub const fn total_sectors(&self) -> Option<u32> {
        match self {
            Self::Wrapped {
                total_sectors, ..
            } => *total_sectors,
            Self::Direct(_) => None,
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
    fn my_player_accepts_wrapped_shape() {
        let raw = r#"{
            "player": {"uuid": "p-1", "call_sign": "Nova"},
            "sector": {"uuid": "s-1", "name": "Alpha", "grid": {"x": 1, "y": 2}},
            "total_sectors": 25
        }"#;
        let parsed: MyPlayerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.player().call_sign, "Nova");
        assert_eq!(parsed.sector().map(|s| s.name.as_str()), Some("Alpha"));
        assert_eq!(parsed.total_sectors(), Some(25));
    }

    #[test]
    fn my_player_accepts_direct_shape() {
        let raw = r#"{"uuid": "p-1", "call_sign": "Nova", "credits": 500}"#;
        let parsed: MyPlayerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.player().credits, Some(500));
        assert!(parsed.sector().is_none());
    }

    #[test]
    fn profile_location_prefers_direct_name() {
        let location = ProfileLocation {
            uuid: "l-1".to_string(),
            name: Some("Sol".to_string()),
            system_name: Some("Legacy".to_string()),
            system_type: None,
            x: None,
            y: None,
        };
        assert_eq!(location.display_name(), "Sol");
    }

    #[test]
    fn profile_location_falls_back_to_legacy_name() {
        let location = ProfileLocation {
            uuid: "l-1".to_string(),
            name: None,
            system_name: Some("Legacy".to_string()),
            system_type: Some(SystemTypeValue::Code(17)),
            x: None,
            y: None,
        };
        assert_eq!(location.display_name(), "Legacy");
    }
}
