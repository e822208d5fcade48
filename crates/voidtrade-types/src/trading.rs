// crates/voidtrade-types/src/trading.rs
// ============================================================================
// Module: Trading Payloads
// Description: Wire types for cargo, trading hubs, minerals, and trades.
// Purpose: Model the trading endpoint surface used by the player state layer.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Cargo manifests, hub inventories, and the buy/sell exchange bodies. The
//! server is authoritative for stock and credits; buy/sell responses carry the
//! post-trade balances the client adopts before re-fetching cargo and
//! inventory in full.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Minerals and Cargo
// ============================================================================

/// Tradeable mineral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mineral {
    /// Mineral identifier.
    pub uuid: String,
    /// Mineral name.
    pub name: String,
    /// Rarity label when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

/// One line of the player's cargo manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoItem {
    /// The carried mineral.
    pub mineral: Mineral,
    /// Units carried.
    pub quantity: u32,
}

/// Full cargo manifest response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoResponse {
    /// Cargo lines.
    #[serde(default)]
    pub items: Vec<CargoItem>,
    /// Cargo hold capacity in units.
    pub cargo_hold: u32,
    /// Units currently used.
    pub current_cargo: u32,
}

// ============================================================================
// SECTION: Trading Hubs
// ============================================================================

/// Trading hub record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingHub {
    /// Hub identifier.
    pub uuid: String,
    /// Hub name.
    pub name: String,
    /// System the hub resides in when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_uuid: Option<String>,
}

/// One mineral listing in a hub's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubInventoryItem {
    /// The listed mineral.
    pub mineral: Mineral,
    /// Price the hub charges per unit.
    pub buy_price: f64,
    /// Price the hub pays per unit.
    pub sell_price: f64,
    /// Units in stock when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Hub inventory response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubInventoryResponse {
    /// Hub identifier when echoed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_uuid: Option<String>,
    /// Hub name when echoed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_name: Option<String>,
    /// Mineral listings.
    #[serde(default)]
    pub inventory: Vec<HubInventoryItem>,
}

// ============================================================================
// SECTION: Exchange
// ============================================================================

/// Mineral purchase request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyMineralRequest {
    /// Purchasing player.
    pub player_uuid: String,
    /// Mineral to buy.
    pub mineral_uuid: String,
    /// Units to buy.
    pub quantity: u32,
}

/// Mineral purchase response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyMineralResponse {
    /// Credits remaining after the purchase.
    pub remaining_credits: i64,
    /// Cargo units used after the purchase.
    pub cargo_used: u32,
}

/// Mineral sale request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellMineralRequest {
    /// Selling player.
    pub player_uuid: String,
    /// Mineral to sell.
    pub mineral_uuid: String,
    /// Units to sell.
    pub quantity: u32,
}

/// Mineral sale response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellMineralResponse {
    /// Credits held after the sale.
    pub new_credits: i64,
}
