// crates/voidtrade-types/src/knowledge.rs
// ============================================================================
// Module: Knowledge Projection
// Description: Wire types and normalization for the knowledge-gated galaxy
//              map (0-4 knowledge scale, known systems, known lanes).
// Purpose: Project server knowledge payloads into a shape the map layer can
//          render without re-checking field spellings.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The knowledge map is the fog-of-war projection of the galaxy: each system
//! a player has detected carries a knowledge level from 0 (unknown) to 4
//! (visited), and lanes appear once either endpoint is known. The server has
//! shipped several spellings of the identifier fields over time
//! (`poi_uuid` vs `uuid`, `from_poi_uuid` vs `from_uuid`); serde aliases and
//! the `normalize_*` helpers absorb the drift so downstream code sees one
//! canonical shape. Normalization is idempotent.
//!
//! The 0-4 knowledge scale is distinct from the legacy 0-9 scan scale in
//! [`crate::scanning`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::geometry::Position;

// ============================================================================
// SECTION: Knowledge Levels
// ============================================================================

/// Per-system knowledge depth on the galaxy map.
///
/// # Invariants
/// - Wire values clamp into range: 0-3 map exactly, anything above maps to
///   [`KnowledgeLevel::Visited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum KnowledgeLevel {
    /// Never detected.
    Unknown,
    /// Detected by long-range sensors only.
    Detected,
    /// Basic readings available.
    Basic,
    /// Fully surveyed from range.
    Surveyed,
    /// Physically visited.
    Visited,
}

impl From<u8> for KnowledgeLevel {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Detected,
            2 => Self::Basic,
            3 => Self::Surveyed,
            _ => Self::Visited,
        }
    }
}

impl From<KnowledgeLevel> for u8 {
    fn from(value: KnowledgeLevel) -> Self {
        match value {
            KnowledgeLevel::Unknown => 0,
            KnowledgeLevel::Detected => 1,
            KnowledgeLevel::Basic => 2,
            KnowledgeLevel::Surveyed => 3,
            KnowledgeLevel::Visited => 4,
        }
    }
}

impl KnowledgeLevel {
    /// Display label for the level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Detected => "Detected",
            Self::Basic => "Basic",
            Self::Surveyed => "Surveyed",
            Self::Visited => "Visited",
        }
    }
}

// ============================================================================
// SECTION: Known Systems
// ============================================================================

/// Nested star block inside stellar data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarBlock {
    /// Stellar classification string (O/B/A/F/G/K/M prefix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_class: Option<String>,
    /// Surface temperature in kelvin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Stellar data carried by a known system.
///
/// Older payloads nest the class and temperature under `star`; normalization
/// flattens them to the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StellarData {
    /// Stellar classification string when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_class: Option<String>,
    /// Surface temperature in kelvin when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Legacy nested star block, flattened away by normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<StarBlock>,
}

/// One system the player knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownSystem {
    /// System identifier.
    #[serde(alias = "poi_uuid")]
    pub uuid: String,
    /// System name when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// System type label when known.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub system_type: Option<String>,
    /// Map position.
    pub position: Position,
    /// Knowledge depth for this system.
    pub knowledge_level: KnowledgeLevel,
    /// Stellar data when any is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar: Option<StellarData>,
}

/// One lane the player knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLane {
    /// Source system identifier.
    #[serde(alias = "from_poi_uuid")]
    pub from_uuid: String,
    /// Target system identifier.
    #[serde(alias = "to_poi_uuid")]
    pub to_uuid: String,
    /// Lane kind label when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane_type: Option<String>,
}

/// Knowledge map response for a galaxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeMapResponse {
    /// Systems the player knows about.
    #[serde(default)]
    pub systems: Vec<KnownSystem>,
    /// Lanes the player knows about.
    #[serde(default)]
    pub lanes: Vec<KnownLane>,
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes a known system in place.
///
/// Flattens the legacy nested `star` block into the top-level stellar fields,
/// keeping top-level values when both are present. Idempotent.
pub fn normalize_known_system(system: &mut KnownSystem) {
    if let Some(stellar) = system.stellar.as_mut() {
        if let Some(star) = stellar.star.take() {
            if stellar.stellar_class.is_none() {
                stellar.stellar_class = star.stellar_class;
            }
            if stellar.temperature.is_none() {
                stellar.temperature = star.temperature;
            }
        }
    }
}

/// Normalizes a known lane in place. Idempotent.
///
/// Currently a shape-stability anchor: the alias handling in serde already
/// canonicalizes field names, so there is nothing left to rewrite.
pub const fn normalize_known_lane(_lane: &mut KnownLane) {}

/// Normalizes every system and lane of a knowledge map in place. Idempotent.
pub fn normalize_knowledge_map(map: &mut KnowledgeMapResponse) {
    for system in &mut map.systems {
        normalize_known_system(system);
    }
    for lane in &mut map.lanes {
        normalize_known_lane(lane);
    }
}

// ============================================================================
// SECTION: Map Colors
// ============================================================================

/// Map render color for systems at knowledge levels below visited.
const KNOWLEDGE_COLORS: [&str; 5] = ["#555566", "#7788aa", "#99aacc", "#bbccee", "#ffffff"];

/// Fallback color when neither stellar class nor knowledge level applies.
const DEFAULT_STAR_COLOR: &str = "#aaaaaa";

/// Returns the render color for a known system.
///
/// Prefers the stellar-class palette (first character of the class string)
/// when the class is known, falls back to the knowledge-level ramp, and
/// finally to a neutral gray.
#[must_use]
pub fn stellar_color(system: &KnownSystem) -> &'static str {
    let class_char = system
        .stellar
        .as_ref()
        .and_then(|stellar| stellar.stellar_class.as_deref())
        .and_then(|class| class.chars().next());
    if let Some(first) = class_char {
        match first.to_ascii_uppercase() {
            'O' => return "#9bb0ff",
            'B' => return "#aabfff",
            'A' => return "#cad7ff",
            'F' => return "#f8f7ff",
            'G' => return "#fff4ea",
            'K' => return "#ffd2a1",
            'M' => return "#ffcc6f",
            _ => {}
        }
    }
    let index = usize::from(u8::from(system.knowledge_level));
    KNOWLEDGE_COLORS.get(index).copied().unwrap_or(DEFAULT_STAR_COLOR)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use super::*;

    fn system(level: u8) -> KnownSystem {
        KnownSystem {
            uuid: "sys-1".to_owned(),
            name: Some("Vega".to_owned()),
            system_type: Some("STAR SYSTEM".to_owned()),
            position: Position { x: 0.0, y: 0.0 },
            knowledge_level: KnowledgeLevel::from(level),
            stellar: None,
        }
    }

    #[test]
    fn knowledge_level_clamps_high_values() {
        assert_eq!(KnowledgeLevel::from(3), KnowledgeLevel::Surveyed);
        assert_eq!(KnowledgeLevel::from(4), KnowledgeLevel::Visited);
        assert_eq!(KnowledgeLevel::from(250), KnowledgeLevel::Visited);
        let parsed: KnowledgeLevel = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, KnowledgeLevel::Visited);
        assert_eq!(serde_json::to_string(&KnowledgeLevel::Basic).unwrap(), "2");
    }

    #[test]
    fn known_system_accepts_poi_uuid_alias() {
        let raw = r#"{
            "poi_uuid": "sys-9",
            "position": {"x": 3.0, "y": 4.0},
            "knowledge_level": 1
        }"#;
        let parsed: KnownSystem = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.uuid, "sys-9");
        assert_eq!(parsed.knowledge_level, KnowledgeLevel::Detected);
    }

    #[test]
    fn known_lane_accepts_legacy_endpoint_aliases() {
        let raw = r#"{"from_poi_uuid": "a", "to_poi_uuid": "b"}"#;
        let parsed: KnownLane = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.from_uuid, "a");
        assert_eq!(parsed.to_uuid, "b");
    }

    #[test]
    fn normalize_flattens_nested_star_block() {
        let mut sys = system(2);
        sys.stellar = Some(StellarData {
            stellar_class: None,
            temperature: None,
            star: Some(StarBlock {
                stellar_class: Some("G2V".to_owned()),
                temperature: Some(5778.0),
            }),
        });
        normalize_known_system(&mut sys);
        let stellar = sys.stellar.as_ref().unwrap();
        assert_eq!(stellar.stellar_class.as_deref(), Some("G2V"));
        assert_eq!(stellar.temperature, Some(5778.0));
        assert!(stellar.star.is_none());

        // A second pass must not change anything.
        let snapshot = sys.clone();
        normalize_known_system(&mut sys);
        assert_eq!(sys, snapshot);
    }

    #[test]
    fn normalize_prefers_top_level_fields() {
        let mut sys = system(3);
        sys.stellar = Some(StellarData {
            stellar_class: Some("K1".to_owned()),
            temperature: None,
            star: Some(StarBlock {
                stellar_class: Some("M5".to_owned()),
                temperature: Some(3200.0),
            }),
        });
        normalize_known_system(&mut sys);
        let stellar = sys.stellar.as_ref().unwrap();
        assert_eq!(stellar.stellar_class.as_deref(), Some("K1"));
        assert_eq!(stellar.temperature, Some(3200.0));
    }

    #[test]
    fn stellar_color_prefers_class_then_level() {
        let mut sys = system(1);
        sys.stellar = Some(StellarData {
            stellar_class: Some("G2V".to_owned()),
            temperature: None,
            star: None,
        });
        assert_eq!(stellar_color(&sys), "#fff4ea");

        let plain = system(4);
        assert_eq!(stellar_color(&plain), "#ffffff");

        let mut odd = system(0);
        odd.stellar = Some(StellarData {
            stellar_class: Some("X9".to_owned()),
            temperature: None,
            star: None,
        });
        assert_eq!(stellar_color(&odd), KNOWLEDGE_COLORS[0]);
    }

    #[test]
    fn labels_cover_every_level() {
        assert_eq!(KnowledgeLevel::Unknown.label(), "Unknown");
        assert_eq!(KnowledgeLevel::Visited.label(), "Visited");
    }
}
