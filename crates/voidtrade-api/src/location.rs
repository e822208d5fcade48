// crates/voidtrade-api/src/location.rs
// ============================================================================
// Module: Location Endpoints
// Description: Current-location detail retrieval.
// Purpose: Expose the location surface the action panel is built from.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! One endpoint: the detailed view of a location, including which services
//! and trading hub it offers. The state layer reloads it after every jump
//! because its contents are tied to where the ship is parked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::location::CurrentLocationResponse;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Location Endpoints
// ============================================================================

/// Borrowed handle over the location endpoints.
#[derive(Debug)]
pub struct LocationEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> LocationEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the detailed view of one location.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn current(&self, location_uuid: &str) -> ApiResult<CurrentLocationResponse> {
        self.client.get(&format!("/locations/{location_uuid}")).await
    }
}
