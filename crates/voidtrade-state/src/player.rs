// crates/voidtrade-state/src/player.rs
// ============================================================================
// Module: Player State
// Description: Aggregate session state for one player in one galaxy.
// Purpose: Own initialization, galaxy membership, scanning, ships, cargo,
//          and trading; travel lives in the sibling travel module.
// Dependencies: voidtrade-api, voidtrade-cache, voidtrade-types, thiserror,
//               tracing
// ============================================================================

//! ## Overview
//! One [`PlayerState`] tracks everything the play screen shows: the player's
//! identity, current system and sector, ships, cargo, scan levels, and the
//! trading hub being browsed. Loaders follow one discipline: check the guard
//! (player or galaxy UUID), make the call, and either replace the relevant
//! slice of state or log and leave it untouched. Server failures never
//! poison unrelated state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use tracing::error;
use tracing::warn;
use voidtrade_api::ApiClient;
use voidtrade_api::ApiClientError;
use voidtrade_cache::GalaxyListCache;
use voidtrade_cache::KeyValueStore;
use voidtrade_cache::PriceHistory;
use voidtrade_types::ApiOutcome;
use voidtrade_types::Clock;
use voidtrade_types::Position;
use voidtrade_types::ScanSystemResponse;
use voidtrade_types::location::CurrentLocationResponse;
use voidtrade_types::location::FacilitiesResponse;
use voidtrade_types::galaxy::JoinGalaxyRequest;
use voidtrade_types::player::PlayerData;
use voidtrade_types::player::PlayerProfile;
use voidtrade_types::player::SectorInfo;
use voidtrade_types::player::SystemTypeValue;
use voidtrade_types::scanning::BulkScanLevelsRequest;
use voidtrade_types::scanning::ScanSystemRequest;
use voidtrade_types::scanning::SystemDataResponse;
use voidtrade_types::ship::MyShipResponse;
use voidtrade_types::ship::PurchaseShipRequest;
use voidtrade_types::ship::PurchaseShipResponse;
use voidtrade_types::ship::ShipClassInfo;
use voidtrade_types::ship::SwitchShipRequest;
use voidtrade_types::ship::SwitchShipResponse;
use voidtrade_types::trading::BuyMineralRequest;
use voidtrade_types::trading::BuyMineralResponse;
use voidtrade_types::trading::CargoItem;
use voidtrade_types::trading::CargoResponse;
use voidtrade_types::trading::HubInventoryItem;
use voidtrade_types::trading::HubInventoryResponse;
use voidtrade_types::trading::SellMineralRequest;
use voidtrade_types::trading::SellMineralResponse;

use crate::travel::TravelConfig;

// ============================================================================
// SECTION: View Types
// ============================================================================

/// Current-system view kept by the state container.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    /// System identifier.
    pub uuid: String,
    /// System display name.
    pub name: String,
    /// System type label.
    pub system_type: String,
    /// Map position.
    pub position: Position,
}

/// Fleet row view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipInfo {
    /// Ship identifier.
    pub uuid: String,
    /// Ship name.
    pub name: String,
    /// Ship class label.
    pub class: String,
    /// Whether this is the active ship.
    pub is_active: bool,
}

/// Current/maximum pair for a ship gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeView {
    /// Current value.
    pub current: f64,
    /// Maximum value.
    pub max: f64,
}

/// Fuel gauge with its regeneration rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelView {
    /// Current fuel.
    pub current: f64,
    /// Maximum fuel.
    pub max: f64,
    /// Regeneration per tick.
    pub regen_rate: f64,
}

/// Detailed active-ship view.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipStats {
    /// Ship identifier.
    pub uuid: String,
    /// Ship name.
    pub name: String,
    /// Hull gauge.
    pub hull: GaugeView,
    /// Shield gauge.
    pub shield: GaugeView,
    /// Fuel gauge.
    pub fuel: FuelView,
    /// Weapons rating.
    pub weapons: u32,
    /// Sensors rating.
    pub sensors: u32,
    /// Warp drive rating.
    pub warp_drive: u32,
    /// Cargo hold capacity in units.
    pub cargo_capacity: u32,
    /// Cargo units used (carried over from the cargo manifest).
    pub cargo_used: u32,
    /// Ship status label.
    pub status: String,
    /// Ship class descriptor.
    pub ship_class: ShipClassInfo,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors surfaced by buy/sell operations.
///
/// # Invariants
/// - Variants are stable for UI error mapping and tests.
#[derive(Debug, Error)]
pub enum TradeError {
    /// The server rejected the trade.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed.
    #[error(transparent)]
    Client(#[from] ApiClientError),
}

// ============================================================================
// SECTION: Player State
// ============================================================================

/// Aggregate session state for one player in one galaxy.
///
/// # Invariants
/// - `needs_creation` and a populated `player_uuid` are mutually exclusive.
/// - Loader failures leave the previously loaded state in place.
pub struct PlayerState {
    /// API client shared with the rest of the session.
    pub(crate) api: Arc<ApiClient>,
    /// Galaxy list cache for name lookups.
    galaxy_cache: GalaxyListCache,
    /// Price history log fed by hub inventory loads.
    price_history: PriceHistory,
    /// Travel polling configuration.
    pub(crate) travel_config: TravelConfig,

    /// Player identifier once initialized.
    pub player_uuid: Option<String>,
    /// Galaxy being played.
    pub galaxy_uuid: Option<String>,
    /// Galaxy display name when known.
    pub galaxy_name: Option<String>,
    /// Sector grid side length (derived from the total sector count).
    pub galaxy_grid_size: u32,
    /// Sector the player is in when known.
    pub current_sector: Option<SectorInfo>,
    /// Player call sign.
    pub call_sign: Option<String>,
    /// System the player is in when known.
    pub current_system: Option<SystemInfo>,
    /// Detailed view of the current location.
    pub location_details: Option<CurrentLocationResponse>,
    /// Facilities at the current location.
    pub facilities: Option<FacilitiesResponse>,
    /// Compact active-ship row.
    pub active_ship: Option<ShipInfo>,
    /// The player's fleet.
    pub ships: Vec<ShipInfo>,
    /// Detailed active-ship stats.
    pub ship: Option<ShipStats>,
    /// Credits held.
    pub credits: i64,
    /// Player level.
    pub level: u32,
    /// Experience points.
    pub experience: u64,
    /// Scan levels keyed by POI UUID.
    pub scan_levels: HashMap<String, u8>,
    /// Cargo manifest.
    pub cargo: Vec<CargoItem>,
    /// Cargo hold capacity in units.
    pub cargo_capacity: u32,
    /// Cargo units used.
    pub cargo_used: u32,
    /// Inventory of the hub being browsed.
    pub trading_hub_inventory: Vec<HubInventoryItem>,
    /// Hub being browsed when any.
    pub current_trading_hub_uuid: Option<String>,
    /// Whether initialization or a join is in flight.
    pub is_loading: bool,
    /// Whether a jump is in flight.
    pub is_traveling: bool,
    /// Destination label while traveling.
    pub travel_destination: Option<String>,
    /// Stage message while traveling.
    pub travel_status: Option<String>,
    /// Whether the player must be created before play.
    pub needs_creation: bool,
    /// Last user-facing error.
    pub error: Option<String>,
}

impl PlayerState {
    /// Builds an empty container over a client, host storage, and clock.
    #[must_use]
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            galaxy_cache: GalaxyListCache::new(Arc::clone(&store)),
            price_history: PriceHistory::new(store, clock),
            travel_config: TravelConfig::default(),
            player_uuid: None,
            galaxy_uuid: None,
            galaxy_name: None,
            galaxy_grid_size: 5,
            current_sector: None,
            call_sign: None,
            current_system: None,
            location_details: None,
            facilities: None,
            active_ship: None,
            ships: Vec::new(),
            ship: None,
            credits: 0,
            level: 1,
            experience: 0,
            scan_levels: HashMap::new(),
            cargo: Vec::new(),
            cargo_capacity: 0,
            cargo_used: 0,
            trading_hub_inventory: Vec::new(),
            current_trading_hub_uuid: None,
            is_loading: false,
            is_traveling: false,
            travel_destination: None,
            travel_status: None,
            needs_creation: false,
            error: None,
        }
    }

    /// Replaces the travel polling configuration.
    #[must_use]
    pub fn with_travel_config(mut self, config: TravelConfig) -> Self {
        self.travel_config = config;
        self
    }

    // ------------------------------------------------------------------
    // Initialization and membership
    // ------------------------------------------------------------------

    /// Loads the player for a galaxy, resolving to exactly one of: a ready
    /// player, `needs_creation`, or an error message.
    pub async fn initialize(&mut self, galaxy_uuid: &str) {
        self.is_loading = true;
        self.error = None;
        self.needs_creation = false;
        self.galaxy_uuid = Some(galaxy_uuid.to_owned());

        if let Some(cached) = self.galaxy_cache.galaxy_by_uuid(galaxy_uuid) {
            self.galaxy_name = Some(cached.name);
        }

        let fetched = self.api.galaxies().my_player(galaxy_uuid).await;
        match fetched {
            Ok(envelope) => match envelope.into_outcome() {
                ApiOutcome::Success {
                    data, ..
                } => {
                    self.adopt_player(data.player());
                    if let Some(sector) = data.sector() {
                        self.current_sector = Some(sector.clone());
                    }
                    if let Some(total) = data.total_sectors() {
                        self.galaxy_grid_size = grid_size_from_total(total);
                    }
                    if let Some(galaxy) = data.player().galaxy.as_ref() {
                        self.galaxy_name = Some(galaxy.name.clone());
                    }
                    self.load_my_ship().await;
                }
                ApiOutcome::Failure {
                    error, ..
                } => match error.code.as_str() {
                    "NO_PLAYER_IN_GALAXY" | "NOT_FOUND" => {
                        self.needs_creation = true;
                    }
                    _ => {
                        self.error = Some(error.message);
                    }
                },
            },
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Joins the galaxy, creating a player under the given call sign when
    /// none exists. Idempotent: an existing player is simply returned.
    pub async fn join_galaxy(&mut self, call_sign: &str) -> bool {
        let Some(galaxy_uuid) = self.galaxy_uuid.clone() else {
            self.error = Some("No galaxy selected".to_owned());
            return false;
        };

        self.is_loading = true;
        self.error = None;

        let result = self
            .api
            .galaxies()
            .join(
                &galaxy_uuid,
                &JoinGalaxyRequest {
                    call_sign: Some(call_sign.to_owned()),
                },
            )
            .await;
        let joined = match result {
            Ok(envelope) => match envelope.into_outcome() {
                ApiOutcome::Success {
                    data, ..
                } => {
                    self.adopt_player_data(&data.player);
                    true
                }
                ApiOutcome::Failure {
                    error, ..
                } => {
                    self.error = Some(join_error_message(&error.code, error.message));
                    false
                }
            },
            Err(error) => {
                self.error = Some(error.to_string());
                false
            }
        };
        self.is_loading = false;
        joined
    }

    /// Adopts a player profile into the container.
    pub(crate) fn adopt_player(&mut self, profile: &PlayerProfile) {
        self.player_uuid = Some(profile.uuid.clone());
        self.call_sign = Some(profile.call_sign.clone());
        self.credits = profile.credits.unwrap_or(0);
        self.level = profile.level.unwrap_or(1);
        self.experience = profile.experience.unwrap_or(0);

        self.active_ship = profile.active_ship.as_ref().map(|ship| ShipInfo {
            uuid: ship.uuid.clone(),
            name: ship.name.clone(),
            class: ship.class.clone(),
            is_active: true,
        });

        self.current_system = profile.current_location.as_ref().map(|location| SystemInfo {
            uuid: location.uuid.clone(),
            name: location.display_name().to_owned(),
            system_type: system_type_label(location.system_type.as_ref()),
            position: Position {
                x: location.x.unwrap_or(0.0),
                y: location.y.unwrap_or(0.0),
            },
        });
        if self.current_system.is_none() {
            warn!("player profile carried no current location");
        }

        self.needs_creation = false;
    }

    /// Adopts the flat player record returned by the join endpoint.
    pub(crate) fn adopt_player_data(&mut self, data: &PlayerData) {
        self.player_uuid = Some(data.uuid.clone());
        self.call_sign = Some(data.call_sign.clone());
        self.credits = data.credits;
        self.level = data.level.unwrap_or(1);
        self.experience = data.experience.unwrap_or(0);
        self.cargo_capacity = data.ship.cargo_capacity;
        self.cargo_used = data.ship.cargo_used;
        self.current_system = Some(SystemInfo {
            uuid: data.current_system_uuid.clone(),
            name: data.current_system_name.clone(),
            system_type: data.current_system_type.clone(),
            position: Position { x: 0.0, y: 0.0 },
        });
        self.needs_creation = false;
    }

    // ------------------------------------------------------------------
    // Scanning and exploration
    // ------------------------------------------------------------------

    /// Scans a POI (the current system when `poi_uuid` is `None`) and folds
    /// the result into the scan-level map.
    pub async fn scan_system(
        &mut self,
        poi_uuid: Option<&str>,
        force: bool,
    ) -> Option<ScanSystemResponse> {
        let player_uuid = self.player_uuid.clone()?;
        let body = ScanSystemRequest {
            poi_uuid: poi_uuid.map(ToOwned::to_owned),
            force: force.then_some(true),
        };
        match self.api.players().scan_system(&player_uuid, &body).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.scan_levels
                    .insert(data.poi_uuid.clone(), data.scan_level);
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to scan system");
                None
            }
        }
    }

    /// Bulk-loads scan levels for a batch of POIs.
    pub async fn load_bulk_scan_levels(&mut self, poi_uuids: &[String]) {
        let Some(player_uuid) = self.player_uuid.clone() else {
            return;
        };
        if poi_uuids.is_empty() {
            return;
        }
        let body = BulkScanLevelsRequest {
            poi_uuids: poi_uuids.to_vec(),
        };
        match self.api.players().bulk_scan_levels(&player_uuid, &body).await {
            Ok(envelope) => {
                if let Some(data) = envelope.data.filter(|_| envelope.success) {
                    for entry in data.scan_levels {
                        self.scan_levels.insert(entry.poi_uuid, entry.scan_level);
                    }
                }
            }
            Err(err) => {
                error!(%err, "failed to load bulk scan levels");
            }
        }
    }

    /// Returns the known scan level for a POI, defaulting to zero.
    #[must_use]
    pub fn scan_level(&self, poi_uuid: &str) -> u8 {
        self.scan_levels.get(poi_uuid).copied().unwrap_or(0)
    }

    /// Loads the scan-gated view of a system, updating the current-system
    /// view when it matches or was never named.
    pub async fn load_system_data(&mut self, poi_uuid: Option<&str>) -> Option<SystemDataResponse> {
        let player_uuid = self.player_uuid.clone()?;
        let target = poi_uuid
            .map(ToOwned::to_owned)
            .or_else(|| self.current_system.as_ref().map(|system| system.uuid.clone()))?;

        match self.api.players().system_data(&player_uuid, &target).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                let is_current = self
                    .current_system
                    .as_ref()
                    .is_some_and(|system| system.uuid == data.poi_uuid || system.uuid == target);
                let unnamed = self
                    .current_system
                    .as_ref()
                    .is_none_or(|system| system.name.is_empty() || system.name == "Loading...");
                if is_current || unnamed {
                    self.current_system = Some(SystemInfo {
                        uuid: data.poi_uuid.clone(),
                        name: data.poi_name.clone(),
                        system_type: data.poi_type.clone(),
                        position: data.position,
                    });
                }
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to load system data");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Location
    // ------------------------------------------------------------------

    /// Loads the detailed view of the current location.
    pub async fn load_location_details(&mut self) -> Option<CurrentLocationResponse> {
        let system_uuid = self.current_system.as_ref()?.uuid.clone();
        match self.api.location().current(&system_uuid).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.location_details = Some(data.clone());
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to load location details");
                None
            }
        }
    }

    /// Loads the facilities at the player's location.
    pub async fn load_facilities(&mut self) -> Option<FacilitiesResponse> {
        let player_uuid = self.player_uuid.clone()?;
        match self.api.players().facilities(&player_uuid).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.facilities = Some(data.clone());
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to load facilities");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Ships
    // ------------------------------------------------------------------

    /// Loads the player's fleet.
    pub async fn load_ships(&mut self) -> Vec<ShipInfo> {
        let Some(player_uuid) = self.player_uuid.clone() else {
            return Vec::new();
        };
        match self.api.players().ships(&player_uuid).await {
            Ok(envelope) => {
                if let Some(data) = envelope.data.filter(|_| envelope.success) {
                    self.ships = data
                        .into_iter()
                        .map(|ship| ShipInfo {
                            uuid: ship.uuid,
                            name: ship.name,
                            class: ship.class,
                            is_active: ship.is_active.unwrap_or(false),
                        })
                        .collect();
                }
            }
            Err(err) => {
                error!(%err, "failed to load ships");
            }
        }
        self.ships.clone()
    }

    /// Loads detailed stats for the active ship via the galaxy my-ship
    /// endpoint.
    pub async fn load_my_ship(&mut self) -> Option<MyShipResponse> {
        let galaxy_uuid = self.galaxy_uuid.clone()?;
        match self.api.galaxies().my_ship(&galaxy_uuid).await {
            Ok(envelope) => match envelope.into_outcome() {
                ApiOutcome::Success {
                    data, ..
                } => {
                    self.ship = Some(ShipStats {
                        uuid: data.uuid.clone(),
                        name: data.name.clone(),
                        hull: GaugeView {
                            current: data.hull,
                            max: data.max_hull,
                        },
                        shield: GaugeView {
                            current: data.shields,
                            max: data.max_shields,
                        },
                        fuel: FuelView {
                            current: data.current_fuel,
                            max: data.max_fuel,
                            regen_rate: data.fuel_regen_rate,
                        },
                        weapons: data.weapons,
                        sensors: data.sensors,
                        warp_drive: data.warp_drive,
                        cargo_capacity: data.cargo_hold,
                        // Preserved from the cargo manifest, which owns it.
                        cargo_used: self.cargo_used,
                        status: data.status.clone(),
                        ship_class: data.ship_class.clone(),
                    });
                    self.active_ship = Some(ShipInfo {
                        uuid: data.uuid.clone(),
                        name: data.name.clone(),
                        class: data.ship_class.class.clone(),
                        is_active: true,
                    });
                    Some(data)
                }
                ApiOutcome::Failure {
                    error, ..
                } => {
                    match error.code.as_str() {
                        "NO_SHIP" => {
                            debug!("player has no ship");
                            self.ship = None;
                            self.active_ship = None;
                        }
                        "NOT_IN_GALAXY" => {
                            debug!("player is not in this galaxy");
                        }
                        _ => {
                            error!(code = %error.code, "failed to load ship");
                        }
                    }
                    None
                }
            },
            Err(err) => {
                error!(%err, "failed to load ship");
                None
            }
        }
    }

    /// Purchases a ship and appends it to the fleet.
    pub async fn purchase_ship(
        &mut self,
        ship_uuid: &str,
        ship_name: Option<&str>,
    ) -> Option<PurchaseShipResponse> {
        let player_uuid = self.player_uuid.clone()?;
        let body = PurchaseShipRequest {
            ship_uuid: ship_uuid.to_owned(),
            ship_name: ship_name.map(ToOwned::to_owned),
        };
        match self.api.players().purchase_ship(&player_uuid, &body).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.credits = data.credits_remaining;
                self.ships.push(ShipInfo {
                    uuid: data.purchased_ship.uuid.clone(),
                    name: data.purchased_ship.name.clone(),
                    class: data.purchased_ship.class.clone(),
                    is_active: data.purchased_ship.is_active.unwrap_or(false),
                });
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to purchase ship");
                None
            }
        }
    }

    /// Switches the active ship and reconciles the fleet flags.
    pub async fn switch_ship(&mut self, ship_uuid: &str) -> Option<SwitchShipResponse> {
        let player_uuid = self.player_uuid.clone()?;
        let body = SwitchShipRequest {
            ship_uuid: ship_uuid.to_owned(),
        };
        match self.api.players().switch_ship(&player_uuid, &body).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.active_ship = Some(ShipInfo {
                    uuid: data.active_ship.uuid.clone(),
                    name: data.active_ship.name.clone(),
                    class: data.active_ship.class.clone(),
                    is_active: true,
                });
                for ship in &mut self.ships {
                    ship.is_active = ship.uuid == data.active_ship.uuid;
                }
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to switch ship");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Cargo and trading
    // ------------------------------------------------------------------

    /// Loads the cargo manifest.
    pub async fn load_cargo(&mut self) -> Option<CargoResponse> {
        let player_uuid = self.player_uuid.clone()?;
        match self.api.players().cargo(&player_uuid).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.cargo = data.items.clone();
                self.cargo_capacity = data.cargo_hold;
                self.cargo_used = data.current_cargo;
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to load cargo");
                None
            }
        }
    }

    /// Loads a hub's inventory and records a price snapshot for each listed
    /// mineral.
    pub async fn load_trading_hub_inventory(
        &mut self,
        hub_uuid: &str,
    ) -> Option<HubInventoryResponse> {
        match self.api.trading_hubs().inventory(hub_uuid).await {
            Ok(envelope) => {
                let data = envelope.data.filter(|_| envelope.success)?;
                self.trading_hub_inventory = data.inventory.clone();
                self.current_trading_hub_uuid = Some(hub_uuid.to_owned());
                if let Some(galaxy_uuid) = self.galaxy_uuid.as_deref() {
                    let hub_name = data.hub_name.clone().unwrap_or_default();
                    self.price_history.record_prices(
                        galaxy_uuid,
                        hub_uuid,
                        &hub_name,
                        &data.inventory,
                    );
                }
                Some(data)
            }
            Err(err) => {
                error!(%err, "failed to load hub inventory");
                None
            }
        }
    }

    /// Buys minerals, adopting the server's balances and reloading cargo
    /// and the hub inventory in full.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::Rejected`] when the server declines the trade
    /// and [`TradeError::Client`] when the request never completes.
    pub async fn buy_mineral(
        &mut self,
        hub_uuid: &str,
        mineral_uuid: &str,
        quantity: u32,
    ) -> Result<Option<BuyMineralResponse>, TradeError> {
        let Some(player_uuid) = self.player_uuid.clone() else {
            return Ok(None);
        };
        let body = BuyMineralRequest {
            player_uuid,
            mineral_uuid: mineral_uuid.to_owned(),
            quantity,
        };
        let envelope = self.api.trading_hubs().buy(hub_uuid, &body).await?;
        match envelope.into_outcome() {
            ApiOutcome::Success {
                data, ..
            } => {
                self.credits = data.remaining_credits;
                self.cargo_used = data.cargo_used;
                self.load_cargo().await;
                self.load_trading_hub_inventory(hub_uuid).await;
                Ok(Some(data))
            }
            ApiOutcome::Failure {
                error, ..
            } => Err(TradeError::Rejected(error.message)),
        }
    }

    /// Sells minerals, adopting the server's balance and reloading cargo
    /// and the hub inventory in full.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::Rejected`] when the server declines the trade
    /// and [`TradeError::Client`] when the request never completes.
    pub async fn sell_mineral(
        &mut self,
        hub_uuid: &str,
        mineral_uuid: &str,
        quantity: u32,
    ) -> Result<Option<SellMineralResponse>, TradeError> {
        let Some(player_uuid) = self.player_uuid.clone() else {
            return Ok(None);
        };
        let body = SellMineralRequest {
            player_uuid,
            mineral_uuid: mineral_uuid.to_owned(),
            quantity,
        };
        let envelope = self.api.trading_hubs().sell(hub_uuid, &body).await?;
        match envelope.into_outcome() {
            ApiOutcome::Success {
                data, ..
            } => {
                self.credits = data.new_credits;
                self.load_cargo().await;
                self.load_trading_hub_inventory(hub_uuid).await;
                Ok(Some(data))
            }
            ApiOutcome::Failure {
                error, ..
            } => Err(TradeError::Rejected(error.message)),
        }
    }

    /// Returns the cargo line for a mineral, if carried.
    #[must_use]
    pub fn cargo_item(&self, mineral_uuid: &str) -> Option<&CargoItem> {
        self.cargo
            .iter()
            .find(|item| item.mineral.uuid == mineral_uuid)
    }

    /// Returns the free cargo space in units.
    #[must_use]
    pub const fn available_cargo_space(&self) -> u32 {
        self.cargo_capacity.saturating_sub(self.cargo_used)
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Restores every field to its initial value.
    pub fn reset(&mut self) {
        self.player_uuid = None;
        self.galaxy_uuid = None;
        self.galaxy_name = None;
        self.galaxy_grid_size = 5;
        self.current_sector = None;
        self.call_sign = None;
        self.current_system = None;
        self.location_details = None;
        self.facilities = None;
        self.active_ship = None;
        self.ships.clear();
        self.ship = None;
        self.credits = 0;
        self.level = 1;
        self.experience = 0;
        self.scan_levels.clear();
        self.cargo.clear();
        self.cargo_capacity = 0;
        self.cargo_used = 0;
        self.trading_hub_inventory.clear();
        self.current_trading_hub_uuid = None;
        self.is_loading = false;
        self.is_traveling = false;
        self.travel_destination = None;
        self.travel_status = None;
        self.needs_creation = false;
        self.error = None;
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps a wire system type to a display label.
///
/// Numeric codes collapse to the star-system label; strings pass through.
pub(crate) fn system_type_label(value: Option<&SystemTypeValue>) -> String {
    match value {
        Some(SystemTypeValue::Label(label)) => label.clone(),
        Some(SystemTypeValue::Code(_)) | None => "STAR SYSTEM".to_owned(),
    }
}

/// Derives the square sector grid side from the total sector count.
fn grid_size_from_total(total: u32) -> u32 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Grid sides are tiny; rounding a square root of u32 cannot truncate."
    )]
    let side = f64::from(total).sqrt().round() as u32;
    side.max(1)
}

/// Maps a join error code to its user-facing message.
fn join_error_message(code: &str, fallback: String) -> String {
    match code {
        "GALAXY_NOT_ACTIVE" => "This galaxy is not accepting new players".to_owned(),
        "GALAXY_FULL" => "This galaxy has reached maximum capacity".to_owned(),
        "SINGLE_PLAYER_GALAXY" => "This is a single-player galaxy".to_owned(),
        "DUPLICATE_CALL_SIGN" => "This call sign is already taken".to_owned(),
        "NO_STARTING_LOCATION" => "Unable to find a starting location".to_owned(),
        _ if fallback.is_empty() => "Failed to join galaxy".to_owned(),
        _ => fallback,
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
    fn system_type_label_collapses_codes() {
        assert_eq!(
            system_type_label(Some(&SystemTypeValue::Code(17))),
            "STAR SYSTEM"
        );
        assert_eq!(
            system_type_label(Some(&SystemTypeValue::Code(3))),
            "STAR SYSTEM"
        );
        assert_eq!(
            system_type_label(Some(&SystemTypeValue::Label("NEBULA".to_owned()))),
            "NEBULA"
        );
        assert_eq!(system_type_label(None), "STAR SYSTEM");
    }

    #[test]
    fn grid_size_rounds_square_roots() {
        assert_eq!(grid_size_from_total(25), 5);
        assert_eq!(grid_size_from_total(24), 5);
        assert_eq!(grid_size_from_total(1), 1);
        assert_eq!(grid_size_from_total(0), 1);
    }

    #[test]
    fn join_error_messages_cover_known_codes() {
        assert_eq!(
            join_error_message("GALAXY_FULL", String::new()),
            "This galaxy has reached maximum capacity"
        );
        assert_eq!(
            join_error_message("WHO_KNOWS", "server said no".to_owned()),
            "server said no"
        );
        assert_eq!(
            join_error_message("UNKNOWN", String::new()),
            "Failed to join galaxy"
        );
    }
}
