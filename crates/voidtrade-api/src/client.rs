// crates/voidtrade-api/src/client.rs
// ============================================================================
// Module: API Client Core
// Description: Typed async HTTP client for the Voidtrade game server.
// Purpose: Own the base URL, per-call timeouts, bearer-token handling, and
//          the envelope decode shared by every endpoint group.
// Dependencies: reqwest, serde, thiserror, url, voidtrade-types
// ============================================================================

//! ## Overview
//! Every endpoint speaks JSON and wraps its payload in the
//! [`ApiResponse`] envelope. The client sends `Accept` and `Content-Type`
//! as `application/json`, attaches the bearer token when one is held, and
//! never retries or mutates request bodies. A request that times out is not
//! an error: it resolves to a synthesized envelope carrying the `TIMEOUT`
//! code, so callers handle it on the same path as server-reported failures.
//! Other transport failures surface as [`ApiClientError::Transport`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::RwLock;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;
use voidtrade_types::ApiResponse;
use voidtrade_types::Clock;
use voidtrade_types::SystemClock;

use crate::auth::AuthEndpoints;
use crate::catalog::CatalogEndpoints;
use crate::galaxies::GalaxyEndpoints;
use crate::location::LocationEndpoints;
use crate::npcs::NpcEndpoints;
use crate::players::PlayerEndpoints;
use crate::trading::TradingHubEndpoints;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for galaxy creation, which generates the map server-side.
pub const LONG_TIMEOUT: Duration = Duration::from_secs(600);

/// Shortest bearer token the client considers plausible.
const MIN_TOKEN_LENGTH: usize = 10;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// API client errors.
///
/// # Invariants
/// - Variants are stable for state-layer error mapping and tests.
/// - String payloads may include untrusted server text.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Configuration error.
    #[error("api client config error: {0}")]
    Config(String),
    /// Transport error other than a timeout.
    #[error("api transport error: {0}")]
    Transport(String),
    /// Response body failed to decode as an envelope.
    #[error("api response decode error: {0}")]
    Decode(String),
}

/// Result alias for envelope-returning endpoint calls.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiClientError>;

// ============================================================================
// SECTION: Token Store
// ============================================================================

/// Shared in-memory bearer token.
///
/// Clones share one slot, so the auth layer and the client always agree on
/// the current token.
#[derive(Clone, Default)]
pub struct TokenStore {
    /// Guarded token slot.
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current token, if one is held.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.inner.read().ok().and_then(|slot| slot.clone())
    }

    /// Replaces the held token.
    pub fn set(&self, token: &str) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(token.to_owned());
        }
    }

    /// Drops the held token.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }

    /// Whether a stored token is syntactically plausible.
    ///
    /// Rejects the literal strings `"undefined"` and `"null"` (artifacts of
    /// hosts that stringify absent values) and anything shorter than ten
    /// characters.
    #[must_use]
    pub fn is_plausible(token: &str) -> bool {
        token != "undefined" && token != "null" && token.len() >= MIN_TOKEN_LENGTH
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held = self.inner.read().is_ok_and(|slot| slot.is_some());
        f.debug_struct("TokenStore")
            .field("token", &held.then_some("<redacted>"))
            .finish()
    }
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// API client configuration.
///
/// # Invariants
/// - `base_url` parses as an absolute URL; the constructor enforces this.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Default per-request timeout.
    pub timeout: Duration,
    /// Timeout for long-running requests such as galaxy creation.
    pub long_timeout: Duration,
}

impl ApiClientConfig {
    /// Builds a configuration with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Config`] when `base_url` is not an absolute
    /// URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|error| ApiClientError::Config(format!("invalid base url: {error}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: DEFAULT_TIMEOUT,
            long_timeout: LONG_TIMEOUT,
        })
    }
}

// ============================================================================
// SECTION: API Client
// ============================================================================

/// Typed async client for the Voidtrade game server.
///
/// # Invariants
/// - Requests carry JSON `Accept`/`Content-Type` headers and the bearer
///   token exactly when the [`TokenStore`] holds one.
/// - The client never retries a request.
pub struct ApiClient {
    /// Reqwest client instance.
    http: Client,
    /// Client configuration.
    config: ApiClientConfig,
    /// Shared bearer token.
    tokens: TokenStore,
    /// Time source for synthesized envelope timestamps.
    clock: Arc<dyn Clock>,
}

impl ApiClient {
    /// Builds a client over the given configuration and token store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: ApiClientConfig, tokens: TokenStore) -> Result<Self, ApiClientError> {
        Self::with_clock(config, tokens, Arc::new(SystemClock))
    }

    /// Builds a client with an explicit time source.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Transport`] when the HTTP client cannot be
    /// constructed.
    pub fn with_clock(
        config: ApiClientConfig,
        tokens: TokenStore,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|error| ApiClientError::Transport(error.to_string()))?;
        Ok(Self {
            http,
            config,
            tokens,
            clock,
        })
    }

    /// Returns the shared token store.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Returns the client's time source.
    #[must_use]
    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ------------------------------------------------------------------
    // Endpoint groups
    // ------------------------------------------------------------------

    /// Authentication endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthEndpoints<'_> {
        AuthEndpoints::new(self)
    }

    /// Galaxy endpoints.
    #[must_use]
    pub fn galaxies(&self) -> GalaxyEndpoints<'_> {
        GalaxyEndpoints::new(self)
    }

    /// NPC endpoints.
    #[must_use]
    pub fn npcs(&self) -> NpcEndpoints<'_> {
        NpcEndpoints::new(self)
    }

    /// Player endpoints.
    #[must_use]
    pub fn players(&self) -> PlayerEndpoints<'_> {
        PlayerEndpoints::new(self)
    }

    /// Trading hub endpoints.
    #[must_use]
    pub fn trading_hubs(&self) -> TradingHubEndpoints<'_> {
        TradingHubEndpoints::new(self)
    }

    /// Location endpoints.
    #[must_use]
    pub fn location(&self) -> LocationEndpoints<'_> {
        LocationEndpoints::new(self)
    }

    /// Catalog endpoints (minerals, sectors).
    #[must_use]
    pub fn catalog(&self) -> CatalogEndpoints<'_> {
        CatalogEndpoints::new(self)
    }

    // ------------------------------------------------------------------
    // Request plumbing
    // ------------------------------------------------------------------

    /// Builds request headers, attaching the bearer token when held.
    fn headers(&self) -> Result<HeaderMap, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.tokens.current() {
            let value = format!("Bearer {token}");
            let header = HeaderValue::from_str(&value)
                .map_err(|_| ApiClientError::Config("invalid bearer token header".to_owned()))?;
            headers.insert(AUTHORIZATION, header);
        }
        Ok(headers)
    }

    /// Starts a request builder for the given method and path.
    fn builder(
        &self,
        method: Method,
        path: &str,
        timeout: Duration,
    ) -> Result<RequestBuilder, ApiClientError> {
        let url = format!("{}{path}", self.config.base_url);
        Ok(self
            .http
            .request(method, url)
            .headers(self.headers()?)
            .timeout(timeout))
    }

    /// Sends a request and decodes the envelope.
    ///
    /// Timeouts resolve to a synthesized `TIMEOUT` envelope; every other
    /// transport failure is an error.
    async fn dispatch<T>(&self, builder: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) if error.is_timeout() => {
                return Ok(ApiResponse::timeout(self.clock.now_rfc3339()));
            }
            Err(error) => return Err(ApiClientError::Transport(error.to_string())),
        };
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(error) if error.is_timeout() => {
                return Ok(ApiResponse::timeout(self.clock.now_rfc3339()));
            }
            Err(error) => return Err(ApiClientError::Transport(error.to_string())),
        };
        serde_json::from_slice::<ApiResponse<T>>(&body)
            .map_err(|error| ApiClientError::Decode(error.to_string()))
    }

    /// Sends a GET request.
    pub(crate) async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::GET, path, self.config.timeout)?;
        self.dispatch(builder).await
    }

    /// Sends a bodyless POST request.
    pub(crate) async fn post_empty<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::POST, path, self.config.timeout)?;
        self.dispatch(builder).await
    }

    /// Sends a POST request with a JSON body.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::POST, path, self.config.timeout)?.json(body);
        self.dispatch(builder).await
    }

    /// Sends a POST request with a JSON body under the long timeout.
    pub(crate) async fn post_long<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let builder = self
            .builder(Method::POST, path, self.config.long_timeout)?
            .json(body);
        self.dispatch(builder).await
    }

    /// Sends a PATCH request with a JSON body.
    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::PATCH, path, self.config.timeout)?.json(body);
        self.dispatch(builder).await
    }

    /// Sends a DELETE request.
    pub(crate) async fn delete<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::DELETE, path, self.config.timeout)?;
        self.dispatch(builder).await
    }

    /// Sends a GET request, converting transport failures into envelopes.
    ///
    /// Only the galaxy list endpoints take this path; everywhere else a
    /// transport failure propagates as [`ApiClientError::Transport`].
    pub(crate) async fn get_caught<T>(&self, path: &str) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        match self.get(path).await {
            Ok(envelope) => envelope,
            Err(error) => {
                ApiResponse::network_error(error.to_string(), self.clock.now_rfc3339())
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_plausibility_filter() {
        assert!(!TokenStore::is_plausible("undefined"));
        assert!(!TokenStore::is_plausible("null"));
        assert!(!TokenStore::is_plausible("short"));
        assert!(TokenStore::is_plausible("0123456789abcdef"));
    }

    #[test]
    fn token_store_clones_share_one_slot() {
        let store = TokenStore::new();
        let twin = store.clone();
        store.set("0123456789abcdef");
        assert_eq!(twin.current().as_deref(), Some("0123456789abcdef"));
        twin.clear();
        assert!(store.current().is_none());
    }

    #[test]
    fn config_rejects_relative_base_url() {
        assert!(ApiClientConfig::new("/api").is_err());
        let config = ApiClientConfig::new("http://localhost:8080/api/").map(|c| c.base_url);
        assert_eq!(config.ok().as_deref(), Some("http://localhost:8080/api"));
    }
}
