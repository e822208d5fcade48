// crates/voidtrade-api/tests/client_http.rs
// ============================================================================
// Module: API Client HTTP Tests
// Description: End-to-end client tests against a local tiny_http server.
// Purpose: Exercise envelope decoding, bearer headers, timeout envelopes,
//          transport errors, and galaxy-list normalization.
// ============================================================================

//! ## Overview
//! Each test spins up a `tiny_http` server on an ephemeral port, answers one
//! or more requests from a background thread, and asserts on what the client
//! produced. The server side also captures request headers so bearer-token
//! handling is verified on the wire, not just in the store.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::thread;

use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;
use voidtrade_api::ApiClient;
use voidtrade_api::ApiClientConfig;
use voidtrade_api::ApiClientError;
use voidtrade_api::TokenStore;
use voidtrade_types::CODE_NETWORK_ERROR;
use voidtrade_types::CODE_TIMEOUT;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Captured view of one request handled by the test server.
struct SeenRequest {
    /// Request path with query.
    url: String,
    /// Authorization header value, when sent.
    authorization: Option<String>,
}

/// Serves `responses` JSON bodies in order, returning what each request looked like.
fn serve_json(
    responses: Vec<serde_json::Value>,
) -> (String, thread::JoinHandle<Vec<SeenRequest>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for body in responses {
            let Ok(request) = server.recv() else { break };
            seen.push(SeenRequest {
                url: request.url().to_string(),
                authorization: request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Authorization"))
                    .map(|header| header.value.as_str().to_string()),
            });
            let response = Response::from_string(body.to_string()).with_header(
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .unwrap(),
            );
            let _ = request.respond(response);
        }
        seen
    });
    (base, handle)
}

/// Builds a client against a local base URL.
fn client_for(base: &str) -> (ApiClient, TokenStore) {
    let tokens = TokenStore::new();
    let config = ApiClientConfig::new(base).unwrap();
    let client = ApiClient::new(config, tokens.clone()).unwrap();
    (client, tokens)
}

// ============================================================================
// SECTION: Envelope Decoding
// ============================================================================

#[tokio::test]
async fn auth_me_decodes_success_envelope() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {"id": 4, "name": "tala", "email": "tala@example.com"},
        "meta": {"timestamp": "2026-08-24T10:00:00Z", "request_id": "req-1"},
    })]);
    let (client, tokens) = client_for(&base);
    tokens.set("0123456789abcdef");

    let envelope = client.auth().me().await.unwrap();
    let seen = handle.join().unwrap();

    assert_eq!(envelope.data.as_ref().map(|user| user.id), Some(4));
    assert_eq!(seen[0].url, "/auth/me");
    assert_eq!(
        seen[0].authorization.as_deref(),
        Some("Bearer 0123456789abcdef")
    );
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {"id": 1, "name": "n", "email": "n@example.com"},
        "meta": {"timestamp": "t", "request_id": ""},
    })]);
    let (client, _tokens) = client_for(&base);

    let _ = client.auth().me().await.unwrap();
    let seen = handle.join().unwrap();
    assert!(seen[0].authorization.is_none());
}

#[tokio::test]
async fn server_failure_envelope_passes_through() {
    let (base, handle) = serve_json(vec![json!({
        "success": false,
        "error": {"code": "GALAXY_FULL", "message": "Galaxy is full", "details": null},
        "meta": {"timestamp": "t", "request_id": "r"},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client
        .galaxies()
        .join(
            "g-1",
            &voidtrade_types::galaxy::JoinGalaxyRequest {
                call_sign: Some("Nova".to_owned()),
            },
        )
        .await
        .unwrap();
    handle.join().unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.error_code(), Some("GALAXY_FULL"));
}

// ============================================================================
// SECTION: Transport Failures
// ============================================================================

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Nothing listens on this port after the listener drops.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let (client, _tokens) = client_for(&format!("http://127.0.0.1:{port}"));

    let result = client.auth().me().await;
    assert!(matches!(result, Err(ApiClientError::Transport(_))));
}

#[tokio::test]
async fn timeout_resolves_to_timeout_envelope() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    // Hold the request long enough to trip the client deadline.
    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            thread::sleep(std::time::Duration::from_millis(500));
            let _ = request.respond(Response::from_string("{}"));
        }
    });

    let tokens = TokenStore::new();
    let mut config = ApiClientConfig::new(&base).unwrap();
    config.timeout = std::time::Duration::from_millis(50);
    let client = ApiClient::new(config, tokens).unwrap();

    let envelope = client.auth().me().await.unwrap();
    handle.join().unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.error_code(), Some(CODE_TIMEOUT));
    assert!(envelope.meta.request_id.is_empty());
}

#[tokio::test]
async fn galaxy_creation_outlives_the_default_deadline() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    // Answer well past the short per-call deadline but within the long one.
    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            thread::sleep(std::time::Duration::from_millis(200));
            let body = json!({
                "success": false,
                "error": {"code": "CREATION_BUSY", "message": "Generator busy", "details": null},
                "meta": {"timestamp": "t", "request_id": "r"},
            });
            let _ = request.respond(Response::from_string(body.to_string()));
        }
    });

    let tokens = TokenStore::new();
    let mut config = ApiClientConfig::new(&base).unwrap();
    config.timeout = std::time::Duration::from_millis(50);
    config.long_timeout = std::time::Duration::from_secs(5);
    let client = ApiClient::new(config, tokens).unwrap();

    let envelope = client
        .galaxies()
        .create(&voidtrade_types::galaxy::CreateGalaxyRequest {
            size_tier: voidtrade_types::galaxy::SizeTier::Small,
            game_mode: voidtrade_types::galaxy::GameMode::Multiplayer,
            name: None,
            skip_mirror: None,
            skip_precursors: None,
            npc_count: None,
            npc_difficulty: None,
        })
        .await
        .unwrap();
    handle.join().unwrap();

    // The slow answer came through instead of a synthesized timeout.
    assert_eq!(envelope.error_code(), Some("CREATION_BUSY"));
}

#[tokio::test]
async fn galaxy_list_folds_transport_failure_into_envelope() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let (client, _tokens) = client_for(&format!("http://127.0.0.1:{port}"));

    let envelope = client.galaxies().list().await;
    assert!(!envelope.success);
    assert_eq!(envelope.error_code(), Some(CODE_NETWORK_ERROR));
}

// ============================================================================
// SECTION: Galaxy List Normalization
// ============================================================================

#[tokio::test]
async fn galaxy_list_normalizes_split_shape() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {
            "my_games": [{
                "uuid": "g-1", "name": "Mine", "size": "small",
                "players": 1, "mode": "multiplayer",
            }],
            "open_games": [],
        },
        "meta": {"timestamp": "2026-08-24T10:00:00Z", "request_id": "r"},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client.galaxies().list().await;
    let seen = handle.join().unwrap();

    assert_eq!(seen[0].url, "/galaxies/list");
    let list = envelope.data.unwrap();
    assert_eq!(list.my_games.len(), 1);
    assert!(list.open_games.is_empty());
    assert_eq!(list.cached_at, "2026-08-24T10:00:00Z");
}

#[tokio::test]
async fn galaxy_list_fills_missing_cached_at() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {"my_games": [], "open_games": []},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client.galaxies().list().await;
    handle.join().unwrap();
    assert!(!envelope.data.unwrap().cached_at.is_empty());
}

#[tokio::test]
async fn galaxy_list_tolerates_missing_arrays() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {"unexpected": true},
        "meta": {"timestamp": "t", "request_id": "r"},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client.galaxies().list().await;
    handle.join().unwrap();
    let list = envelope.data.unwrap();
    assert!(list.my_games.is_empty());
    assert!(list.open_games.is_empty());
}

#[tokio::test]
async fn galaxy_list_full_merges_split_shape() {
    let galaxy = |uuid: &str| {
        json!({
            "uuid": uuid, "name": uuid, "width": 100.0, "height": 100.0,
            "stars": 250, "game_mode": "multiplayer", "is_mirror": false,
            "created_at": "t", "updated_at": "t",
        })
    };
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": {"my_games": [galaxy("g-1")], "open_games": [galaxy("g-2")]},
        "meta": {"timestamp": "t", "request_id": "r"},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client.galaxies().list_full().await;
    let seen = handle.join().unwrap();

    assert_eq!(seen[0].url, "/galaxies");
    let galaxies = envelope.data.unwrap();
    assert_eq!(galaxies.len(), 2);
    assert_eq!(galaxies[0].uuid, "g-1");
    assert_eq!(galaxies[1].uuid, "g-2");
}

#[tokio::test]
async fn galaxy_list_full_accepts_flat_array() {
    let (base, handle) = serve_json(vec![json!({
        "success": true,
        "data": [{
            "uuid": "g-7", "name": "Flat", "width": 50.0, "height": 50.0,
            "stars": 80, "game_mode": "mixed", "is_mirror": true,
            "status": "active", "created_at": "t", "updated_at": "t",
        }],
        "meta": {"timestamp": "t", "request_id": "r"},
    })]);
    let (client, _tokens) = client_for(&base);

    let envelope = client.galaxies().list_full().await;
    handle.join().unwrap();
    assert_eq!(envelope.data.unwrap().len(), 1);
}
