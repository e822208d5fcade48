// crates/voidtrade-types/src/location.rs
// ============================================================================
// Module: Location and Travel Payloads
// Description: Wire types for travel, current-system polling, location
//              details, and facilities.
// Purpose: Model the movement surface consumed by the player state layer.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Travel is asynchronous on the server side: a jump into an ungenerated
//! system answers with a `generating` marker, and the client polls the
//! current-system endpoint until the marker clears. Both [`TravelResponse`]
//! and [`CurrentSystemResponse`] can carry the marker in either the `status`
//! or the `message` field; [`GenerationMarker::is_generating`] checks both.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::geometry::Position;
use crate::player::SectorInfo;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Wire marker for a system whose generation is still in progress.
pub const GENERATING_MARKER: &str = "generating";

// ============================================================================
// SECTION: Travel
// ============================================================================

/// Travel request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// Destination system or warp gate.
    pub destination_uuid: String,
}

/// Compact system block carried by travel and current-system responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemBlock {
    /// System identifier.
    pub uuid: String,
    /// System name.
    pub name: String,
    /// System type label.
    #[serde(rename = "type")]
    pub system_type: String,
    /// Map position.
    pub position: Position,
}

/// Shared view of the `status`/`message` generation marker.
pub trait GenerationMarker {
    /// Returns the `status` field when present.
    fn status(&self) -> Option<&str>;

    /// Returns the `message` field when present.
    fn message(&self) -> Option<&str>;

    /// Whether either field still carries the generation marker.
    fn is_generating(&self) -> bool {
        self.status() == Some(GENERATING_MARKER) || self.message() == Some(GENERATING_MARKER)
    }
}

/// Travel response.
///
/// # Invariants
/// - `destination`/`sector`/`fuel_remaining` may be absent while the
///   destination system is still generating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelResponse {
    /// Travel status when reported (may carry [`GENERATING_MARKER`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text message when reported (may carry [`GENERATING_MARKER`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Destination system block when arrival is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<SystemBlock>,
    /// Destination sector context when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorInfo>,
    /// Fuel remaining after the jump when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_remaining: Option<f64>,
}

impl GenerationMarker for TravelResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Current-system response used by the travel polling loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSystemResponse {
    /// System identifier.
    pub uuid: String,
    /// System name.
    pub name: String,
    /// System type label.
    #[serde(rename = "type")]
    pub system_type: String,
    /// Map position.
    pub position: Position,
    /// Sector context when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorInfo>,
    /// Generation status when reported (may carry [`GENERATING_MARKER`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text message when reported (may carry [`GENERATING_MARKER`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GenerationMarker for CurrentSystemResponse {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

// ============================================================================
// SECTION: Location Details
// ============================================================================

/// Reference to a trading hub at the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingHubRef {
    /// Hub identifier.
    pub uuid: String,
    /// Hub name.
    pub name: String,
}

/// Presence block describing what the current location offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPresence {
    /// Service labels available at the location.
    #[serde(default)]
    pub services: Vec<String>,
    /// Trading hub reference when one exists here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading_hub: Option<TradingHubRef>,
}

/// Detailed current-location response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentLocationResponse {
    /// Location identifier.
    pub uuid: String,
    /// Location name.
    pub name: String,
    /// Location type label.
    #[serde(rename = "type")]
    pub location_type: String,
    /// What the location offers.
    #[serde(default)]
    pub has: LocationPresence,
}

// ============================================================================
// SECTION: Facilities
// ============================================================================

/// One facility available to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Facility kind label (shipyard, trading hub, bar, ...).
    pub kind: String,
    /// Facility name.
    pub name: String,
    /// Facility identifier.
    pub uuid: String,
    /// Whether the facility is currently usable.
    pub available: bool,
}

/// Facilities block inside [`FacilitiesResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityList {
    /// Short summary line when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Facilities at the player's location.
    #[serde(default)]
    pub available: Vec<Facility>,
}

/// Facilities response for the player's current location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitiesResponse {
    /// Facilities block.
    #[serde(default)]
    pub facilities: FacilityList,
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use super::*;

    #[test]
    fn generating_marker_checks_both_fields() {
        let by_status: TravelResponse = serde_json::from_str(r#"{"status":"generating"}"#).unwrap();
        assert!(by_status.is_generating());
        let by_message: TravelResponse =
            serde_json::from_str(r#"{"message":"generating"}"#).unwrap();
        assert!(by_message.is_generating());
        let done: TravelResponse = serde_json::from_str(r#"{"status":"arrived"}"#).unwrap();
        assert!(!done.is_generating());
    }

    #[test]
    fn travel_response_parses_full_arrival() {
        let raw = r#"{
            "status": "arrived",
            "destination": {"uuid": "d-1", "name": "Vega", "type": "STAR SYSTEM",
                            "position": {"x": 1.0, "y": 2.0}},
            "sector": {"uuid": "s-1", "name": "Beta", "grid": {"x": 0, "y": 1},
                       "danger_level": "high"},
            "fuel_remaining": 42.5
        }"#;
        let parsed: TravelResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.destination.unwrap().name, "Vega");
        assert_eq!(parsed.fuel_remaining, Some(42.5));
    }
}
