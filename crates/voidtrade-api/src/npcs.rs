// crates/voidtrade-api/src/npcs.rs
// ============================================================================
// Module: NPC Endpoints
// Description: NPC lookup, removal, and archetype catalog.
// Purpose: Expose the NPC administration surface of the game server.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! NPC lookup and removal plus the archetype catalog. The server enforces
//! admin rights on the destructive calls; the client just carries the
//! bearer token and surfaces whatever the server answers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::galaxy::Npc;
use voidtrade_types::galaxy::NpcArchetypeInfo;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: NPC Endpoints
// ============================================================================

/// Borrowed handle over the NPC endpoints.
#[derive(Debug)]
pub struct NpcEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> NpcEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Fetches one NPC.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn get(&self, uuid: &str) -> ApiResult<Npc> {
        self.client.get(&format!("/npcs/{uuid}")).await
    }

    /// Removes one NPC.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn delete(&self, uuid: &str) -> ApiResult<serde_json::Value> {
        self.client.delete(&format!("/npcs/{uuid}")).await
    }

    /// Lists the available NPC archetypes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn archetypes(&self) -> ApiResult<Vec<NpcArchetypeInfo>> {
        self.client.get("/npcs/archetypes").await
    }
}
