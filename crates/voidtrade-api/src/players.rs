// crates/voidtrade-api/src/players.rs
// ============================================================================
// Module: Player Endpoints
// Description: Player CRUD, scanning, exploration, travel, ships, and cargo.
// Purpose: Expose the per-player surface the state layer drives.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! The widest endpoint group. Travel is the only asynchronous operation in
//! it: [`PlayerEndpoints::travel`] may answer with a generation marker, after
//! which the state layer polls [`PlayerEndpoints::current_system`] until the
//! destination finishes generating.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::CurrentSystemResponse;
use voidtrade_types::ScanSystemResponse;
use voidtrade_types::TravelResponse;
use voidtrade_types::location::FacilitiesResponse;
use voidtrade_types::location::TravelRequest;
use voidtrade_types::player::CreatePlayerRequest;
use voidtrade_types::player::PlayerData;
use voidtrade_types::player::PlayerListItem;
use voidtrade_types::player::PlayerStats;
use voidtrade_types::player::PlayerStatus;
use voidtrade_types::player::UpdatePlayerRequest;
use voidtrade_types::scanning::BulkScanLevelsRequest;
use voidtrade_types::scanning::BulkScanLevelsResponse;
use voidtrade_types::scanning::ExplorationLogResponse;
use voidtrade_types::scanning::ScanResultsResponse;
use voidtrade_types::scanning::ScanSystemRequest;
use voidtrade_types::scanning::SystemDataResponse;
use voidtrade_types::ship::PurchaseShipRequest;
use voidtrade_types::ship::PurchaseShipResponse;
use voidtrade_types::ship::Ship;
use voidtrade_types::ship::SwitchShipRequest;
use voidtrade_types::ship::SwitchShipResponse;
use voidtrade_types::trading::CargoResponse;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Player Endpoints
// ============================================================================

/// Borrowed handle over the player endpoints.
#[derive(Debug)]
pub struct PlayerEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> PlayerEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    // ------------------------------------------------------------------
    // Player management
    // ------------------------------------------------------------------

    /// Lists the caller's players across galaxies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn list(&self) -> ApiResult<Vec<PlayerListItem>> {
        self.client.get("/players").await
    }

    /// Creates a player in a galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn create(&self, body: &CreatePlayerRequest) -> ApiResult<PlayerData> {
        self.client.post("/players", body).await
    }

    /// Fetches one player.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn get(&self, player_uuid: &str) -> ApiResult<PlayerData> {
        self.client.get(&format!("/players/{player_uuid}")).await
    }

    /// Updates a player.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn update(
        &self,
        player_uuid: &str,
        body: &UpdatePlayerRequest,
    ) -> ApiResult<PlayerData> {
        self.client
            .patch(&format!("/players/{player_uuid}"), body)
            .await
    }

    /// Deletes a player.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn delete(&self, player_uuid: &str) -> ApiResult<serde_json::Value> {
        self.client.delete(&format!("/players/{player_uuid}")).await
    }

    /// Fetches a player's live status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn status(&self, player_uuid: &str) -> ApiResult<PlayerStatus> {
        self.client
            .get(&format!("/players/{player_uuid}/status"))
            .await
    }

    /// Fetches a player's lifetime statistics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn stats(&self, player_uuid: &str) -> ApiResult<PlayerStats> {
        self.client
            .get(&format!("/players/{player_uuid}/stats"))
            .await
    }

    /// Finds the caller's player in one galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn find_by_galaxy(&self, galaxy_uuid: &str) -> ApiResult<PlayerData> {
        self.client
            .get(&format!("/galaxies/{galaxy_uuid}/player"))
            .await
    }

    // ------------------------------------------------------------------
    // Scanning and exploration
    // ------------------------------------------------------------------

    /// Scans a POI (the current system when `body.poi_uuid` is absent).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn scan_system(
        &self,
        player_uuid: &str,
        body: &ScanSystemRequest,
    ) -> ApiResult<ScanSystemResponse> {
        self.client
            .post(&format!("/players/{player_uuid}/scan-system"), body)
            .await
    }

    /// Fetches accumulated scan results for one POI.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn scan_results(
        &self,
        player_uuid: &str,
        poi_uuid: &str,
    ) -> ApiResult<ScanResultsResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/scan-results/{poi_uuid}"))
            .await
    }

    /// Fetches the player's exploration log.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn exploration_log(&self, player_uuid: &str) -> ApiResult<ExplorationLogResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/exploration-log"))
            .await
    }

    /// Looks up scan levels for a batch of POIs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn bulk_scan_levels(
        &self,
        player_uuid: &str,
        body: &BulkScanLevelsRequest,
    ) -> ApiResult<BulkScanLevelsResponse> {
        self.client
            .post(&format!("/players/{player_uuid}/bulk-scan-levels"), body)
            .await
    }

    /// Fetches the scan-gated view of one system.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn system_data(
        &self,
        player_uuid: &str,
        poi_uuid: &str,
    ) -> ApiResult<SystemDataResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/system-data/{poi_uuid}"))
            .await
    }

    // ------------------------------------------------------------------
    // Travel
    // ------------------------------------------------------------------

    /// Starts a jump to a destination.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn travel(
        &self,
        player_uuid: &str,
        body: &TravelRequest,
    ) -> ApiResult<TravelResponse> {
        self.client
            .post(&format!("/players/{player_uuid}/travel"), body)
            .await
    }

    /// Fetches the player's current system (travel polling target).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn current_system(&self, player_uuid: &str) -> ApiResult<CurrentSystemResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/current-system"))
            .await
    }

    // ------------------------------------------------------------------
    // Ships and cargo
    // ------------------------------------------------------------------

    /// Lists the player's ships.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn ships(&self, player_uuid: &str) -> ApiResult<Vec<Ship>> {
        self.client
            .get(&format!("/players/{player_uuid}/ships"))
            .await
    }

    /// Purchases a ship from the local shipyard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn purchase_ship(
        &self,
        player_uuid: &str,
        body: &PurchaseShipRequest,
    ) -> ApiResult<PurchaseShipResponse> {
        self.client
            .post(&format!("/players/{player_uuid}/purchase-ship"), body)
            .await
    }

    /// Switches the player's active ship.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn switch_ship(
        &self,
        player_uuid: &str,
        body: &SwitchShipRequest,
    ) -> ApiResult<SwitchShipResponse> {
        self.client
            .post(&format!("/players/{player_uuid}/switch-ship"), body)
            .await
    }

    /// Fetches the player's cargo manifest.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn cargo(&self, player_uuid: &str) -> ApiResult<CargoResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/cargo"))
            .await
    }

    /// Fetches the facilities at the player's location.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn facilities(&self, player_uuid: &str) -> ApiResult<FacilitiesResponse> {
        self.client
            .get(&format!("/players/{player_uuid}/facilities"))
            .await
    }
}
