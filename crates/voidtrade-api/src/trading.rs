// crates/voidtrade-api/src/trading.rs
// ============================================================================
// Module: Trading Hub Endpoints
// Description: Hub lookup, inventory retrieval, and the buy/sell exchange.
// Purpose: Expose the trading surface of the game server.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! Hub detail, inventory, and the buy/sell exchange. Prices and balances
//! are server-authoritative: the exchange responses carry the updated
//! credits and cargo figures, and the state layer adopts them verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::HubInventoryResponse;
use voidtrade_types::trading::BuyMineralRequest;
use voidtrade_types::trading::BuyMineralResponse;
use voidtrade_types::trading::SellMineralRequest;
use voidtrade_types::trading::SellMineralResponse;
use voidtrade_types::trading::TradingHub;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Trading Hub Endpoints
// ============================================================================

/// Borrowed handle over the trading hub endpoints.
#[derive(Debug)]
pub struct TradingHubEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> TradingHubEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Fetches one trading hub.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn get(&self, hub_uuid: &str) -> ApiResult<TradingHub> {
        self.client.get(&format!("/trading-hubs/{hub_uuid}")).await
    }

    /// Fetches a hub's mineral inventory with prices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn inventory(&self, hub_uuid: &str) -> ApiResult<HubInventoryResponse> {
        self.client
            .get(&format!("/trading-hubs/{hub_uuid}/inventory"))
            .await
    }

    /// Buys minerals from a hub.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn buy(
        &self,
        hub_uuid: &str,
        body: &BuyMineralRequest,
    ) -> ApiResult<BuyMineralResponse> {
        self.client
            .post(&format!("/trading-hubs/{hub_uuid}/buy"), body)
            .await
    }

    /// Sells minerals to a hub.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn sell(
        &self,
        hub_uuid: &str,
        body: &SellMineralRequest,
    ) -> ApiResult<SellMineralResponse> {
        self.client
            .post(&format!("/trading-hubs/{hub_uuid}/sell"), body)
            .await
    }
}
