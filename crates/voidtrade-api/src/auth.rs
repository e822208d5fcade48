// crates/voidtrade-api/src/auth.rs
// ============================================================================
// Module: Auth Endpoints
// Description: Registration, login, logout, session lookup, and refresh.
// Purpose: Expose the authentication surface of the game server.
// Dependencies: voidtrade-api::client, voidtrade-types
// ============================================================================

//! ## Overview
//! Token custody stays with the caller: these endpoints return `AuthData`
//! envelopes and never write to the [`crate::TokenStore`] themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use voidtrade_types::AuthData;
use voidtrade_types::LoginRequest;
use voidtrade_types::RegisterRequest;
use voidtrade_types::User;

use crate::client::ApiClient;
use crate::client::ApiResult;

// ============================================================================
// SECTION: Auth Endpoints
// ============================================================================

/// Borrowed handle over the authentication endpoints.
#[derive(Debug)]
pub struct AuthEndpoints<'client> {
    /// Owning client.
    client: &'client ApiClient,
}

impl<'client> AuthEndpoints<'client> {
    /// Binds the group to a client.
    #[must_use]
    pub(crate) const fn new(client: &'client ApiClient) -> Self {
        Self { client }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn register(&self, body: &RegisterRequest) -> ApiResult<AuthData> {
        self.client.post("/auth/register", body).await
    }

    /// Logs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn login(&self, body: &LoginRequest) -> ApiResult<AuthData> {
        self.client.post("/auth/login", body).await
    }

    /// Invalidates the server-side session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn logout(&self) -> ApiResult<serde_json::Value> {
        self.client.post_empty("/auth/logout").await
    }

    /// Returns the authenticated user for the current token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn me(&self) -> ApiResult<User> {
        self.client.get("/auth/me").await
    }

    /// Exchanges the current token for a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiClientError`] on non-timeout transport failures.
    pub async fn refresh(&self) -> ApiResult<AuthData> {
        self.client.post_empty("/auth/refresh").await
    }
}
