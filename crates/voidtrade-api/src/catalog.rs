// crates/voidtrade-api/src/catalog.rs
// ============================================================================
// Module: Catalog Endpoints
// Description: Static-data lookups for minerals and sectors.
// Purpose: Expose the reference-data surface of the game server.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! Reference data that changes rarely if ever: the mineral catalog and
//! sector lookups. Both follow the common request path; nothing here needs
//! authentication context beyond the shared bearer token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::player::SectorInfo;
use voidtrade_types::trading::Mineral;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Catalog Endpoints
// ============================================================================

/// Borrowed handle over the catalog endpoints.
#[derive(Debug)]
pub struct CatalogEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> CatalogEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Lists every known mineral.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn minerals(&self) -> ApiResult<Vec<Mineral>> {
        self.client.get("/minerals").await
    }

    /// Fetches one sector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn sector(&self, sector_uuid: &str) -> ApiResult<SectorInfo> {
        self.client.get(&format!("/sectors/{sector_uuid}")).await
    }
}
