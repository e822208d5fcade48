// crates/voidtrade-types/src/geometry.rs
// ============================================================================
// Module: Map Geometry
// Description: Shared coordinate types for galaxy map payloads.
// Purpose: Provide the position shapes reused across endpoint groups.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Continuous map coordinates and discrete sector-grid coordinates shared by
//! the player, scanning, location, and knowledge payloads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Continuous map position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// Discrete sector-grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Grid column.
    pub x: i32,
    /// Grid row.
    pub y: i32,
}
