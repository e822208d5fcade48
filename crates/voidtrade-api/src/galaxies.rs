// crates/voidtrade-api/src/galaxies.rs
// ============================================================================
// Module: Galaxy Endpoints
// Description: Galaxy listing, detail, creation, membership, and knowledge
//              map retrieval.
// Purpose: Expose the galaxy surface, including the legacy list-shape
//          normalization.
// Dependencies: voidtrade-api::client, voidtrade-types, serde_json
// ============================================================================

//! ## Overview
//! The galaxy list endpoints predate the envelope conventions used elsewhere:
//! the server has answered both with a split `{my_games, open_games}` object
//! and with a flat array, and transport failures here fold into
//! `NETWORK_ERROR` envelopes instead of propagating as client errors. Both
//! quirks are preserved; everything else in the group follows the common
//! request path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use voidtrade_types::ApiResponse;
use voidtrade_types::GalaxyListResponse;
use voidtrade_types::KnowledgeMapResponse;
use voidtrade_types::galaxy::AddNpcsRequest;
use voidtrade_types::galaxy::CreateGalaxyRequest;
use voidtrade_types::galaxy::CreationStatus;
use voidtrade_types::galaxy::Galaxy;
use voidtrade_types::galaxy::GalaxyCreationResult;
use voidtrade_types::galaxy::GalaxyStatistics;
use voidtrade_types::galaxy::JoinGalaxyRequest;
use voidtrade_types::galaxy::JoinGalaxyResponse;
use voidtrade_types::galaxy::Npc;
use voidtrade_types::galaxy::SizeTiersResponse;
use voidtrade_types::galaxy::VictoryLeader;
use voidtrade_types::knowledge::normalize_knowledge_map;
use voidtrade_types::player::MyPlayerResponse;
use voidtrade_types::ship::MyShipResponse;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Galaxy Endpoints
// ============================================================================

/// Borrowed handle over the galaxy endpoints.
#[derive(Debug)]
pub struct GalaxyEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> GalaxyEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Lists galaxies split into joined and open games.
    ///
    /// Transport failures fold into a `NETWORK_ERROR` envelope; the result
    /// always has a populated `cached_at`.
    pub async fn list(&self) -> ApiResponse<GalaxyListResponse> {
        let envelope: ApiResponse<Value> = self.client.get_caught("/galaxies/list").await;
        self.normalize_split(envelope)
    }

    /// Lists full galaxy objects, merging both server list shapes.
    ///
    /// Transport failures fold into a `NETWORK_ERROR` envelope.
    pub async fn list_full(&self) -> ApiResponse<Vec<Galaxy>> {
        let envelope: ApiResponse<Value> = self.client.get_caught("/galaxies").await;
        self.normalize_flat(envelope)
    }

    /// Fetches one galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn get(&self, uuid: &str) -> ApiResult<Galaxy> {
        self.client.get(&format!("/galaxies/{uuid}")).await
    }

    /// Fetches galaxy statistics.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn statistics(&self, uuid: &str) -> ApiResult<GalaxyStatistics> {
        self.client.get(&format!("/galaxies/{uuid}/statistics")).await
    }

    /// Fetches the victory leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn victory_leaders(&self, uuid: &str) -> ApiResult<Vec<VictoryLeader>> {
        self.client
            .get(&format!("/galaxies/{uuid}/victory-leaders"))
            .await
    }

    /// Fetches the knowledge-gated galaxy map, normalized to the canonical
    /// field spellings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn map(&self, uuid: &str) -> ApiResult<KnowledgeMapResponse> {
        let mut envelope: ApiResponse<KnowledgeMapResponse> =
            self.client.get(&format!("/galaxies/{uuid}/map")).await?;
        if let Some(map) = envelope.data.as_mut() {
            normalize_knowledge_map(map);
        }
        Ok(envelope)
    }

    /// Creates a galaxy. Generation runs server-side, so this call uses the
    /// long timeout.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn create(&self, body: &CreateGalaxyRequest) -> ApiResult<GalaxyCreationResult> {
        self.client.post_long("/galaxies/create", body).await
    }

    /// Fetches the available size tiers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn size_tiers(&self) -> ApiResult<SizeTiersResponse> {
        self.client.get("/galaxies/size-tiers").await
    }

    /// Fetches the step-by-step creation status of a generating galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn creation_status(&self, uuid: &str) -> ApiResult<CreationStatus> {
        self.client
            .get(&format!("/galaxies/{uuid}/creation-status"))
            .await
    }

    /// Lists the NPCs in a galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn npcs(&self, galaxy_uuid: &str) -> ApiResult<Vec<Npc>> {
        self.client.get(&format!("/galaxies/{galaxy_uuid}/npcs")).await
    }

    /// Adds NPCs to a galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn add_npcs(&self, galaxy_uuid: &str, body: &AddNpcsRequest) -> ApiResult<Vec<Npc>> {
        self.client
            .post(&format!("/galaxies/{galaxy_uuid}/npcs"), body)
            .await
    }

    /// Fetches the caller's player in a galaxy, in either wrapped or direct
    /// wire shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn my_player(&self, galaxy_uuid: &str) -> ApiResult<MyPlayerResponse> {
        self.client
            .get(&format!("/galaxies/{galaxy_uuid}/my-player"))
            .await
    }

    /// Joins a galaxy, creating a player when a call sign is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn join(
        &self,
        galaxy_uuid: &str,
        body: &JoinGalaxyRequest,
    ) -> ApiResult<JoinGalaxyResponse> {
        self.client
            .post(&format!("/galaxies/{galaxy_uuid}/join"), body)
            .await
    }

    /// Fetches the caller's active ship in a galaxy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn my_ship(&self, galaxy_uuid: &str) -> ApiResult<MyShipResponse> {
        self.client
            .get(&format!("/galaxies/{galaxy_uuid}/my-ship"))
            .await
    }

    // ------------------------------------------------------------------
    // List-shape normalization
    // ------------------------------------------------------------------

    /// Normalizes a raw list envelope into the split shape.
    fn normalize_split(&self, envelope: ApiResponse<Value>) -> ApiResponse<GalaxyListResponse> {
        let meta = envelope.meta.clone();
        match envelope.data {
            Some(data) if envelope.success => {
                let my_games = parse_summaries(data.get("my_games"));
                let open_games = parse_summaries(data.get("open_games"));
                let cached_at = if meta.timestamp.is_empty() {
                    self.client.clock().now_rfc3339()
                } else {
                    meta.timestamp.clone()
                };
                ApiResponse::ok(
                    GalaxyListResponse {
                        my_games,
                        open_games,
                        cached_at,
                    },
                    meta,
                )
            }
            _ => pass_through_failure(envelope),
        }
    }

    /// Normalizes a raw list envelope into one flat galaxy array.
    fn normalize_flat(&self, envelope: ApiResponse<Value>) -> ApiResponse<Vec<Galaxy>> {
        let meta = envelope.meta.clone();
        match envelope.data {
            Some(data) if envelope.success => {
                let galaxies = if data.get("my_games").is_some() || data.get("open_games").is_some()
                {
                    let mut merged: Vec<Galaxy> = parse_galaxies(data.get("my_games"));
                    merged.extend(parse_galaxies(data.get("open_games")));
                    merged
                } else if data.is_array() {
                    parse_galaxies(Some(&data))
                } else {
                    Vec::new()
                };
                ApiResponse::ok(galaxies, meta)
            }
            _ => pass_through_failure(envelope),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses an optional JSON array of galaxy summaries, defaulting to empty.
fn parse_summaries(value: Option<&Value>) -> Vec<voidtrade_types::GalaxySummary> {
    value
        .cloned()
        .and_then(|raw| serde_json::from_value(raw).ok())
        .unwrap_or_default()
}

/// Parses an optional JSON array of full galaxies, defaulting to empty.
fn parse_galaxies(value: Option<&Value>) -> Vec<Galaxy> {
    value
        .cloned()
        .and_then(|raw| serde_json::from_value(raw).ok())
        .unwrap_or_default()
}

/// Rebuilds a failed raw envelope under the target payload type.
fn pass_through_failure<T>(envelope: ApiResponse<Value>) -> ApiResponse<T> {
    ApiResponse {
        success: envelope.success,
        data: None,
        message: envelope.message,
        error: envelope.error,
        meta: envelope.meta,
    }
}
