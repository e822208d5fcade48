// crates/voidtrade-types/src/scanning.rs
// ============================================================================
// Module: Scanning Payloads
// Description: Wire types for system scanning, exploration logs, and the
//              legacy 0-9 scan-level scale.
// Purpose: Model the scanning endpoint surface and its fog-of-war colors.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The legacy scan scale runs 0-9 and describes per-POI scan depth. It is
//! independent of the 0-4 knowledge scale in [`crate::knowledge`] and keeps
//! its own color table; the two must never be conflated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::geometry::Position;

// ============================================================================
// SECTION: Scan Responses
// ============================================================================

/// One entity revealed by a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    /// Discovery kind label.
    #[serde(rename = "type")]
    pub discovery_type: String,
    /// Discovery name.
    pub name: String,
    /// Discovery identifier.
    pub uuid: String,
    /// Kind-specific extra payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Response to a scan-system action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSystemResponse {
    /// Scan level reached for the POI (0-9).
    pub scan_level: u8,
    /// Scanned POI identifier.
    pub poi_uuid: String,
    /// Scanned POI name.
    pub poi_name: String,
    /// Scanned POI type label.
    pub poi_type: String,
    /// Entities newly revealed by this scan.
    #[serde(default)]
    pub new_discoveries: Vec<Discovery>,
    /// Entities already known before this scan.
    #[serde(default)]
    pub already_known: Vec<Discovery>,
    /// Whether the POI's maximum scan level is reached.
    pub max_level_reached: bool,
}

/// Accumulated scan results for one POI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResultsResponse {
    /// POI identifier.
    pub poi_uuid: String,
    /// POI name.
    pub poi_name: String,
    /// POI type label.
    pub poi_type: String,
    /// Current scan level (0-9).
    pub scan_level: u8,
    /// All discoveries so far.
    #[serde(default)]
    pub discoveries: Vec<Discovery>,
    /// Timestamp of the latest scan.
    pub scanned_at: String,
}

/// One row of the exploration log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationLogEntry {
    /// POI identifier.
    pub poi_uuid: String,
    /// POI name.
    pub poi_name: String,
    /// POI type label.
    pub poi_type: String,
    /// Current scan level (0-9).
    pub scan_level: u8,
    /// Timestamp of the first scan.
    pub first_scanned_at: String,
    /// Timestamp of the latest scan.
    pub last_scanned_at: String,
}

/// Exploration log response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationLogResponse {
    /// Log rows.
    #[serde(default)]
    pub entries: Vec<ExplorationLogEntry>,
    /// Total systems scanned.
    pub total_systems_scanned: u64,
    /// Total discoveries made.
    pub total_discoveries: u64,
}

/// One row of a bulk scan-level lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScanLevelEntry {
    /// POI identifier.
    pub poi_uuid: String,
    /// Scan level (0-9).
    pub scan_level: u8,
}

/// Bulk scan-level lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScanLevelsResponse {
    /// Per-POI scan levels.
    #[serde(default)]
    pub scan_levels: Vec<BulkScanLevelEntry>,
}

/// Bulk scan-level lookup request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkScanLevelsRequest {
    /// POIs to look up.
    pub poi_uuids: Vec<String>,
}

/// Scan-system request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSystemRequest {
    /// POI to scan; the current system when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poi_uuid: Option<String>,
    /// Force a rescan at the current level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

// ============================================================================
// SECTION: System Data
// ============================================================================

/// One feature visible at the current scan level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleFeature {
    /// Feature kind label.
    #[serde(rename = "type")]
    pub feature_type: String,
    /// Feature name.
    pub name: String,
    /// Feature identifier.
    pub uuid: String,
    /// Kind-specific extra payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Lane kind connecting two systems.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Warp gate link.
    WarpGate,
    /// Hyperlane link.
    Hyperlane,
}

/// One connection out of a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConnection {
    /// Target system identifier.
    pub target_uuid: String,
    /// Target system name.
    pub target_name: String,
    /// Lane kind.
    pub connection_type: ConnectionType,
    /// Lane distance.
    pub distance: f64,
}

/// Scan-gated view of one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDataResponse {
    /// POI identifier.
    pub poi_uuid: String,
    /// POI name.
    pub poi_name: String,
    /// POI type label.
    pub poi_type: String,
    /// Map position.
    pub position: Position,
    /// Current scan level (0-9).
    pub scan_level: u8,
    /// Features visible at this scan level.
    #[serde(default)]
    pub visible_features: Vec<VisibleFeature>,
    /// Connections out of the system.
    #[serde(default)]
    pub connections: Vec<SystemConnection>,
}

// ============================================================================
// SECTION: Scan-Level Colors
// ============================================================================

/// Render color with opacity for a scan level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanColor {
    /// Hex color string.
    pub color: &'static str,
    /// Render opacity in [0, 1].
    pub opacity: f32,
}

/// Returns the fog-of-war render color for a legacy scan level (0-9).
///
/// Levels above 9 clamp to the deepest tier.
#[must_use]
pub const fn scan_color(level: u8) -> ScanColor {
    match level {
        0 => ScanColor {
            color: "#1a1a2e",
            opacity: 0.2,
        },
        1 | 2 => ScanColor {
            color: "#4a4a6a",
            opacity: 0.4,
        },
        3 | 4 => ScanColor {
            color: "#3366aa",
            opacity: 0.6,
        },
        5 | 6 => ScanColor {
            color: "#33aa66",
            opacity: 0.8,
        },
        7 | 8 => ScanColor {
            color: "#aa9933",
            opacity: 0.9,
        },
        _ => ScanColor {
            color: "#ff6600",
            opacity: 1.0,
        },
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
    fn scan_color_tiers() {
        assert_eq!(scan_color(0).color, "#1a1a2e");
        assert_eq!(scan_color(1).color, scan_color(2).color);
        assert_eq!(scan_color(9).color, "#ff6600");
        // Out-of-range levels clamp to the deepest tier.
        assert_eq!(scan_color(12).color, "#ff6600");
    }

    #[test]
    fn scan_request_omits_absent_fields() {
        let body = serde_json::to_string(&ScanSystemRequest::default()).unwrap();
        assert_eq!(body, "{}");
    }
}
