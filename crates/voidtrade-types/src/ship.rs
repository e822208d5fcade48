// crates/voidtrade-types/src/ship.rs
// ============================================================================
// Module: Ship Payloads
// Description: Wire types for ship listing, purchase, switching, and stats.
// Purpose: Model the ship endpoint surface used by the player state layer.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Ships appear in three wire forms: catalog/fleet rows ([`Ship`]), the
//! detailed my-ship stats block ([`MyShipResponse`]), and the compact blocks
//! embedded in purchase/switch responses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Fleet Types
// ============================================================================

/// Ship row from catalog and fleet listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Ship identifier.
    pub uuid: String,
    /// Ship name.
    pub name: String,
    /// Ship class label.
    pub class: String,
    /// Whether this is the player's active ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Ship class descriptor inside [`MyShipResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipClassInfo {
    /// Class identifier.
    pub id: i64,
    /// Class display name.
    pub name: String,
    /// Class label.
    pub class: String,
}

/// Detailed active-ship stats from the galaxy my-ship endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyShipResponse {
    /// Ship identifier.
    pub uuid: String,
    /// Ship name.
    pub name: String,
    /// Current hull value.
    pub hull: f64,
    /// Maximum hull value.
    pub max_hull: f64,
    /// Current shield value.
    pub shields: f64,
    /// Maximum shield value.
    pub max_shields: f64,
    /// Current fuel value.
    pub current_fuel: f64,
    /// Maximum fuel value.
    pub max_fuel: f64,
    /// Fuel regeneration rate per tick.
    pub fuel_regen_rate: f64,
    /// Weapons rating.
    pub weapons: u32,
    /// Sensors rating.
    pub sensors: u32,
    /// Warp drive rating.
    pub warp_drive: u32,
    /// Cargo hold capacity in units.
    pub cargo_hold: u32,
    /// Ship status label.
    pub status: String,
    /// Ship class descriptor.
    pub ship_class: ShipClassInfo,
}

// ============================================================================
// SECTION: Purchase / Switch
// ============================================================================

/// Ship purchase request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseShipRequest {
    /// Catalog ship to purchase.
    pub ship_uuid: String,
    /// Optional custom name for the purchased ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_name: Option<String>,
}

/// Ship purchase response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseShipResponse {
    /// Credits remaining after the purchase.
    pub credits_remaining: i64,
    /// The purchased ship.
    pub purchased_ship: Ship,
}

/// Active-ship switch request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchShipRequest {
    /// Ship to make active.
    pub ship_uuid: String,
}

/// Active-ship switch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchShipResponse {
    /// The now-active ship.
    pub active_ship: Ship,
}
