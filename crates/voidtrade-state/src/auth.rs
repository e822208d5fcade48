// crates/voidtrade-state/src/auth.rs
// ============================================================================
// Module: Auth State
// Description: Session container over the auth endpoints, token persistence,
//              and the short-lived user cache.
// Purpose: Own login/logout/session-restore so the rest of the client can
//          just ask "who is signed in".
// Dependencies: voidtrade-api, voidtrade-cache, voidtrade-types, tracing
// ============================================================================

//! ## Overview
//! The token is held in two places on purpose: the [`TokenStore`] shared with
//! the API client (so requests carry it) and the host's key-value store (so
//! it survives restarts). Session restore reads the persisted token, throws
//! away implausible values without touching the network, and prefers the
//! five-minute user cache over an `/auth/me` round-trip.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tracing::warn;
use voidtrade_api::ApiClient;
use voidtrade_api::ApiResult;
use voidtrade_api::TokenStore;
use voidtrade_cache::AuthUserCache;
use voidtrade_cache::KeyValueStore;
use voidtrade_types::ApiOutcome;
use voidtrade_types::AuthData;
use voidtrade_types::Clock;
use voidtrade_types::LoginRequest;
use voidtrade_types::RegisterRequest;
use voidtrade_types::User;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Storage key the bearer token persists under.
const TOKEN_KEY: &str = "auth_token";

// ============================================================================
// SECTION: Auth State
// ============================================================================

/// Authentication session container.
///
/// # Invariants
/// - `is_authenticated` holds exactly when a user and a token are both
///   present.
/// - A failed session restore leaves no partial state behind.
pub struct AuthState {
    /// API client used for auth calls.
    api: Arc<ApiClient>,
    /// Host storage for the persisted token.
    store: Arc<dyn KeyValueStore>,
    /// Short-lived user cache.
    user_cache: AuthUserCache,
    /// Signed-in user, when any.
    user: Option<User>,
    /// Whether a restore or login is in flight.
    is_loading: bool,
}

impl AuthState {
    /// Builds the container over a client, host storage, and clock.
    #[must_use]
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let user_cache = AuthUserCache::new(Arc::clone(&store), clock);
        Self {
            api,
            store,
            user_cache,
            user: None,
            is_loading: true,
        }
    }

    /// Returns the signed-in user, when any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the current bearer token, when held.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.api.tokens().current()
    }

    /// Whether a user is signed in with a token on hand.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token().is_some()
    }

    /// Whether a restore or login is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the signed-in user has the admin flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .and_then(|user| user.is_admin)
            .unwrap_or(false)
    }

    /// Adopts a fresh user/token pair.
    fn set_auth(&mut self, user: User, token: &str) {
        self.api.tokens().set(token);
        self.store.set(TOKEN_KEY, token);
        self.user_cache.put(&user);
        self.user = Some(user);
    }

    /// Drops every trace of the session.
    fn clear_auth(&mut self) {
        self.user = None;
        self.api.tokens().clear();
        self.store.remove(TOKEN_KEY);
        self.user_cache.clear();
    }

    /// Restores the session from persisted state.
    ///
    /// A syntactically implausible stored token is discarded without a
    /// network call. A plausible one is validated against the user cache
    /// first, then `/auth/me`; any failure clears the session entirely.
    pub async fn initialize(&mut self) {
        if self.is_authenticated() {
            self.is_loading = false;
            return;
        }

        let Some(token) = self.store.get(TOKEN_KEY) else {
            self.is_loading = false;
            return;
        };

        if !TokenStore::is_plausible(&token) {
            self.store.remove(TOKEN_KEY);
            self.user_cache.clear();
            self.is_loading = false;
            return;
        }

        self.api.tokens().set(&token);

        if let Some(user) = self.user_cache.get() {
            self.user = Some(user);
            self.is_loading = false;
            return;
        }

        let fetched = self.api.auth().me().await;
        match fetched {
            Ok(envelope) => match envelope.into_outcome() {
                ApiOutcome::Success {
                    data, ..
                } => {
                    self.user_cache.put(&data);
                    self.user = Some(data);
                }
                ApiOutcome::Failure {
                    error, ..
                } => {
                    warn!(code = %error.code, "session restore rejected by server");
                    self.clear_auth();
                }
            },
            Err(error) => {
                warn!(%error, "network failure during session restore");
                self.clear_auth();
            }
        }
        self.is_loading = false;
    }

    /// Logs in and adopts the session on success.
    ///
    /// The envelope is returned either way so callers can surface server
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`voidtrade_api::ApiClientError`] on non-timeout transport
    /// failures.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<AuthData> {
        let envelope = self
            .api
            .auth()
            .login(&LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            })
            .await?;
        if let Some(data) = envelope.data.clone() {
            if envelope.success {
                let token = data.access_token.clone();
                self.set_auth(data.user, &token);
            }
        }
        Ok(envelope)
    }

    /// Registers an account and adopts the session on success.
    ///
    /// # Errors
    ///
    /// Returns [`voidtrade_api::ApiClientError`] on non-timeout transport
    /// failures.
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> ApiResult<AuthData> {
        let envelope = self
            .api
            .auth()
            .register(&RegisterRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
                password_confirmation: password.to_owned(),
            })
            .await?;
        if let Some(data) = envelope.data.clone() {
            if envelope.success {
                let token = data.access_token.clone();
                self.set_auth(data.user, &token);
            }
        }
        Ok(envelope)
    }

    /// Logs out: best-effort server invalidation, then unconditional local
    /// clear.
    pub async fn logout(&mut self) {
        if let Err(error) = self.api.auth().logout().await {
            warn!(%error, "server logout failed; clearing local session anyway");
        }
        self.clear_auth();
    }
}
