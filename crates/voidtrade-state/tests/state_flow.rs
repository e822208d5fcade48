// crates/voidtrade-state/tests/state_flow.rs
// ============================================================================
// Module: State Flow Tests
// Description: End-to-end state container tests against a local tiny_http
//              server.
// Purpose: Exercise player initialization, galaxy joining, trading reloads,
//          travel polling, and auth session restore.
// ============================================================================

//! ## Overview
//! Each test spins up a `tiny_http` server on an ephemeral port, answers a
//! fixed sequence of requests from a background thread, and asserts on the
//! state the containers adopted. Request paths are captured so call order is
//! verified on the wire.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;
use voidtrade_api::ApiClient;
use voidtrade_api::ApiClientConfig;
use voidtrade_api::TokenStore;
use voidtrade_cache::KeyValueStore;
use voidtrade_cache::MemoryStore;
use voidtrade_state::AuthState;
use voidtrade_state::PlayerState;
use voidtrade_state::TradeError;
use voidtrade_state::TravelConfig;
use voidtrade_types::ManualClock;
use voidtrade_types::location::CurrentLocationResponse;
use voidtrade_types::location::LocationPresence;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Serves `responses` JSON envelopes in order, returning the request paths.
fn serve_json(responses: Vec<serde_json::Value>) -> (String, thread::JoinHandle<Vec<String>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for body in responses {
            let Ok(request) = server.recv() else { break };
            seen.push(request.url().to_string());
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

/// Builds a player state container against a local base URL.
fn player_state(base: &str) -> (PlayerState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let config = ApiClientConfig::new(base).unwrap();
    let api = Arc::new(ApiClient::new(config, TokenStore::new()).unwrap());
    let state = PlayerState::new(api, Arc::clone(&store) as Arc<dyn KeyValueStore>, clock)
        .with_travel_config(TravelConfig {
            poll_interval: Duration::from_millis(5),
            max_polls: 5,
            min_display: Duration::ZERO,
        });
    (state, store)
}

/// Wraps a payload in a successful envelope.
fn ok(data: serde_json::Value) -> serde_json::Value {
    json!({
        "success": true,
        "data": data,
        "meta": {"timestamp": "2026-08-24T10:00:00Z", "request_id": "r"},
    })
}

/// Builds a failed envelope around an error code and message.
fn failed(code: &str, message: &str) -> serde_json::Value {
    json!({
        "success": false,
        "error": {"code": code, "message": message, "details": null},
        "meta": {"timestamp": "t", "request_id": "r"},
    })
}

/// A full my-ship payload.
fn my_ship() -> serde_json::Value {
    json!({
        "uuid": "ship-1", "name": "Rustbucket",
        "hull": 80.0, "max_hull": 100.0,
        "shields": 20.0, "max_shields": 50.0,
        "current_fuel": 30.0, "max_fuel": 40.0, "fuel_regen_rate": 1.0,
        "weapons": 2, "sensors": 3, "warp_drive": 1,
        "cargo_hold": 120, "status": "docked",
        "ship_class": {"id": 1, "name": "Shuttle", "class": "shuttle"},
    })
}

// ============================================================================
// SECTION: Initialization
// ============================================================================

#[tokio::test]
async fn initialize_adopts_wrapped_player_and_loads_ship() {
    let (base, handle) = serve_json(vec![
        ok(json!({
            "player": {
                "uuid": "p-1", "call_sign": "Nova", "credits": 1500,
                "level": 2, "experience": 340,
                "active_ship": {"uuid": "ship-1", "name": "Rustbucket", "class": "shuttle"},
                "current_location": {"uuid": "sys-1", "name": "Sol", "type": 17, "x": 10.0, "y": 20.0},
                "galaxy": {"name": "Perseus Arm"},
            },
            "sector": {"uuid": "sec-1", "name": "Alpha", "grid": {"x": 0, "y": 0}},
            "total_sectors": 25,
        })),
        ok(my_ship()),
    ]);
    let (mut state, _store) = player_state(&base);

    state.initialize("g-1").await;
    let seen = handle.join().unwrap();

    assert_eq!(seen, vec!["/galaxies/g-1/my-player", "/galaxies/g-1/my-ship"]);
    assert_eq!(state.player_uuid.as_deref(), Some("p-1"));
    assert_eq!(state.call_sign.as_deref(), Some("Nova"));
    assert_eq!(state.credits, 1500);
    assert_eq!(state.galaxy_grid_size, 5);
    assert_eq!(state.galaxy_name.as_deref(), Some("Perseus Arm"));
    let system = state.current_system.as_ref().unwrap();
    assert_eq!(system.name, "Sol");
    assert_eq!(system.system_type, "STAR SYSTEM");
    let ship = state.ship.as_ref().unwrap();
    assert_eq!(ship.cargo_capacity, 120);
    assert!((ship.fuel.current - 30.0).abs() < f64::EPSILON);
    assert!(!state.needs_creation);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn initialize_flags_missing_player_for_creation() {
    let (base, handle) = serve_json(vec![failed("NO_PLAYER_IN_GALAXY", "no player")]);
    let (mut state, _store) = player_state(&base);

    state.initialize("g-1").await;
    handle.join().unwrap();

    assert!(state.needs_creation);
    assert!(state.player_uuid.is_none());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn initialize_surfaces_server_errors() {
    let (base, handle) = serve_json(vec![failed("INTERNAL", "database on fire")]);
    let (mut state, _store) = player_state(&base);

    state.initialize("g-1").await;
    handle.join().unwrap();

    assert!(!state.needs_creation);
    assert_eq!(state.error.as_deref(), Some("database on fire"));
}

// ============================================================================
// SECTION: Joining
// ============================================================================

#[tokio::test]
async fn join_galaxy_adopts_the_created_player() {
    let (base, handle) = serve_json(vec![ok(json!({
        "player": {
            "uuid": "p-9", "galaxy_uuid": "g-1", "call_sign": "Vega",
            "current_system_uuid": "sys-2", "current_system_name": "Proxima",
            "current_system_type": "STAR SYSTEM",
            "ship": {
                "hull": {"current": 100.0, "max": 100.0},
                "shield": {"current": 0.0, "max": 0.0},
                "fuel": {"current": 40.0, "max": 40.0},
                "cargo_capacity": 50, "cargo_used": 0,
            },
            "credits": 1000, "created_at": "t",
        },
        "created": true,
    }))]);
    let (mut state, _store) = player_state(&base);
    state.galaxy_uuid = Some("g-1".to_owned());

    let joined = state.join_galaxy("Vega").await;
    let seen = handle.join().unwrap();

    assert!(joined);
    assert_eq!(seen, vec!["/galaxies/g-1/join"]);
    assert_eq!(state.player_uuid.as_deref(), Some("p-9"));
    assert_eq!(state.call_sign.as_deref(), Some("Vega"));
    assert_eq!(state.credits, 1000);
    assert_eq!(state.cargo_capacity, 50);
    assert_eq!(state.current_system.as_ref().unwrap().name, "Proxima");
}

#[tokio::test]
async fn join_galaxy_maps_known_error_codes() {
    let (base, handle) = serve_json(vec![failed("GALAXY_FULL", "capacity reached")]);
    let (mut state, _store) = player_state(&base);
    state.galaxy_uuid = Some("g-1".to_owned());

    let joined = state.join_galaxy("Vega").await;
    handle.join().unwrap();

    assert!(!joined);
    assert_eq!(
        state.error.as_deref(),
        Some("This galaxy has reached maximum capacity")
    );
}

#[tokio::test]
async fn join_galaxy_passes_unknown_errors_through() {
    let (base, handle) = serve_json(vec![failed("SOLAR_FLARE", "try again later")]);
    let (mut state, _store) = player_state(&base);
    state.galaxy_uuid = Some("g-1".to_owned());

    assert!(!state.join_galaxy("Vega").await);
    handle.join().unwrap();
    assert_eq!(state.error.as_deref(), Some("try again later"));
}

// ============================================================================
// SECTION: Trading
// ============================================================================

#[tokio::test]
async fn buy_adopts_balances_then_reloads_cargo_and_inventory() {
    let (base, handle) = serve_json(vec![
        ok(json!({"remaining_credits": 700, "cargo_used": 30})),
        ok(json!({
            "items": [{"mineral": {"uuid": "m-1", "name": "Iron"}, "quantity": 30}],
            "cargo_hold": 120, "current_cargo": 30,
        })),
        ok(json!({
            "hub_uuid": "hub-1", "hub_name": "Sol Exchange",
            "inventory": [{
                "mineral": {"uuid": "m-1", "name": "Iron"},
                "buy_price": 10.0, "sell_price": 8.0, "quantity": 470,
            }],
        })),
    ]);
    let (mut state, store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());
    state.galaxy_uuid = Some("g-1".to_owned());

    let receipt = state.buy_mineral("hub-1", "m-1", 30).await.unwrap().unwrap();
    let seen = handle.join().unwrap();

    assert_eq!(receipt.remaining_credits, 700);
    assert_eq!(
        seen,
        vec![
            "/trading-hubs/hub-1/buy",
            "/players/p-1/cargo",
            "/trading-hubs/hub-1/inventory",
        ]
    );
    assert_eq!(state.credits, 700);
    assert_eq!(state.cargo_used, 30);
    assert_eq!(state.cargo.len(), 1);
    assert_eq!(state.trading_hub_inventory.len(), 1);
    // The inventory load also records a price snapshot.
    assert!(store.get("price_history").is_some());
}

#[tokio::test]
async fn rejected_buy_is_a_trade_error() {
    let (base, handle) = serve_json(vec![failed("INSUFFICIENT_CREDITS", "Not enough credits")]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());

    let result = state.buy_mineral("hub-1", "m-1", 999).await;
    handle.join().unwrap();

    match result {
        Err(TradeError::Rejected(message)) => assert_eq!(message, "Not enough credits"),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn sell_adopts_the_new_balance() {
    let (base, handle) = serve_json(vec![
        ok(json!({"new_credits": 940})),
        ok(json!({"items": [], "cargo_hold": 120, "current_cargo": 0})),
        ok(json!({"hub_uuid": "hub-1", "inventory": []})),
    ]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());
    state.galaxy_uuid = Some("g-1".to_owned());

    let receipt = state.sell_mineral("hub-1", "m-1", 30).await.unwrap().unwrap();
    handle.join().unwrap();

    assert_eq!(receipt.new_credits, 940);
    assert_eq!(state.credits, 940);
    assert!(state.cargo.is_empty());
}

// ============================================================================
// SECTION: Travel
// ============================================================================

#[tokio::test]
async fn travel_polls_until_generation_completes() {
    let (base, handle) = serve_json(vec![
        ok(json!({"status": "generating", "message": "Jump initiated"})),
        ok(json!({
            "uuid": "sys-2", "name": "Proxima", "type": "STAR SYSTEM",
            "position": {"x": 5.0, "y": 6.0}, "status": "generating",
        })),
        ok(json!({
            "uuid": "sys-2", "name": "Proxima", "type": "STAR SYSTEM",
            "position": {"x": 5.0, "y": 6.0},
            "sector": {"uuid": "sec-2", "name": "Beta", "grid": {"x": 1, "y": 1}},
        })),
    ]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());

    let arrived = state.travel("sys-2", "Proxima").await;
    let seen = handle.join().unwrap();

    assert_eq!(
        seen,
        vec![
            "/players/p-1/travel",
            "/players/p-1/current-system",
            "/players/p-1/current-system",
        ]
    );
    let arrived = arrived.unwrap();
    assert_eq!(
        arrived.destination.as_ref().map(|block| block.name.as_str()),
        Some("Proxima")
    );
    assert_eq!(state.current_system.as_ref().unwrap().uuid, "sys-2");
    assert_eq!(state.current_sector.as_ref().unwrap().name, "Beta");
    assert!(!state.is_traveling);
    assert!(state.travel_status.is_none());
}

#[tokio::test]
async fn immediate_travel_skips_polling() {
    let (base, handle) = serve_json(vec![ok(json!({
        "status": "arrived",
        "destination": {
            "uuid": "sys-3", "name": "Vega", "type": "STAR SYSTEM",
            "position": {"x": 1.0, "y": 2.0},
        },
        "fuel_remaining": 12.5,
    }))]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());

    let arrived = state.travel("sys-3", "Vega").await;
    let seen = handle.join().unwrap();

    assert_eq!(seen, vec!["/players/p-1/travel"]);
    assert!(arrived.is_some());
    assert_eq!(state.current_system.as_ref().unwrap().name, "Vega");
}

#[tokio::test]
async fn polled_travel_applies_the_initial_fuel_reading() {
    let (base, handle) = serve_json(vec![
        ok(my_ship()),
        ok(json!({"status": "generating", "fuel_remaining": 12.5})),
        ok(json!({
            "uuid": "sys-2", "name": "Proxima", "type": "STAR SYSTEM",
            "position": {"x": 5.0, "y": 6.0},
        })),
    ]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());
    state.galaxy_uuid = Some("g-1".to_owned());

    state.load_my_ship().await;
    let arrived = state.travel("sys-2", "Proxima").await.unwrap();
    handle.join().unwrap();

    // The fuel cost rides on the initial generating response only.
    assert_eq!(arrived.fuel_remaining, Some(12.5));
    assert_eq!(state.ship.as_ref().unwrap().fuel.current, 12.5);
    assert_eq!(state.current_system.as_ref().unwrap().uuid, "sys-2");
}

#[tokio::test]
async fn exhausted_polling_still_clears_location_context() {
    // One travel answer, then the whole poll budget stays generating.
    let mut responses = vec![ok(json!({"status": "generating", "fuel_remaining": 3.0}))];
    for _ in 0..5 {
        responses.push(ok(json!({
            "uuid": "sys-2", "name": "Loading...", "type": "STAR SYSTEM",
            "position": {"x": 0.0, "y": 0.0}, "status": "generating",
        })));
    }
    let (base, handle) = serve_json(responses);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());
    state.location_details = Some(CurrentLocationResponse {
        uuid: "sys-1".to_owned(),
        name: "Sol".to_owned(),
        location_type: "STAR SYSTEM".to_owned(),
        has: LocationPresence::default(),
    });

    let result = state.travel("sys-2", "Proxima").await;
    handle.join().unwrap();

    // The jump happened even though the destination never finished.
    assert!(result.is_some());
    assert!(state.location_details.is_none());
    assert!(state.facilities.is_none());
    assert!(!state.is_traveling);
}

#[tokio::test]
async fn overlapping_travel_is_ignored() {
    // Dead port: a second jump must not reach the network at all.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let (mut state, _store) = player_state(&format!("http://127.0.0.1:{port}"));
    state.player_uuid = Some("p-1".to_owned());
    state.is_traveling = true;

    assert!(state.travel("sys-2", "Proxima").await.is_none());
    assert!(state.error.is_none());
    assert!(state.is_traveling);
}

#[tokio::test]
async fn failed_travel_surfaces_the_server_message() {
    let (base, handle) = serve_json(vec![failed("INSUFFICIENT_FUEL", "Not enough fuel")]);
    let (mut state, _store) = player_state(&base);
    state.player_uuid = Some("p-1".to_owned());

    let arrived = state.travel("sys-2", "Proxima").await;
    handle.join().unwrap();

    assert!(arrived.is_none());
    assert_eq!(state.error.as_deref(), Some("Not enough fuel"));
    assert!(!state.is_traveling);
}

// ============================================================================
// SECTION: Auth Restore
// ============================================================================

/// Builds an auth state over a dead port so any network call fails loudly.
fn offline_auth(store: Arc<MemoryStore>) -> AuthState {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ApiClientConfig::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let api = Arc::new(ApiClient::new(config, TokenStore::new()).unwrap());
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    AuthState::new(api, store as Arc<dyn KeyValueStore>, clock)
}

#[tokio::test]
async fn implausible_stored_token_is_discarded_offline() {
    let store = Arc::new(MemoryStore::new());
    assert!(store.set("auth_token", "undefined"));

    let mut auth = offline_auth(Arc::clone(&store));
    auth.initialize().await;

    assert!(!auth.is_authenticated());
    assert!(store.get("auth_token").is_none());
    assert!(!auth.is_loading());
}

#[tokio::test]
async fn cached_user_restores_the_session_without_a_network_call() {
    let store = Arc::new(MemoryStore::new());
    assert!(store.set("auth_token", "0123456789abcdef"));
    assert!(store.set(
        "auth_user_cache",
        &serde_json::json!({
            "user": {"id": 7, "name": "tala", "email": "tala@example.com"},
            "cached_at": 1_700_000_000_000_i64,
        })
        .to_string(),
    ));

    let mut auth = offline_auth(Arc::clone(&store));
    auth.initialize().await;

    assert!(auth.is_authenticated());
    assert_eq!(auth.user().map(|user| user.id), Some(7));
    assert_eq!(auth.token().as_deref(), Some("0123456789abcdef"));
}

#[tokio::test]
async fn login_adopts_and_persists_the_session() {
    let (base, handle) = serve_json(vec![ok(json!({
        "user": {"id": 3, "name": "vex", "email": "vex@example.com"},
        "access_token": "fedcba9876543210",
        "token_type": "Bearer",
    }))]);
    let store = Arc::new(MemoryStore::new());
    let config = ApiClientConfig::new(&base).unwrap();
    let api = Arc::new(ApiClient::new(config, TokenStore::new()).unwrap());
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let mut auth = AuthState::new(api, Arc::clone(&store) as Arc<dyn KeyValueStore>, clock);

    let envelope = auth.login("vex@example.com", "hunter22").await.unwrap();
    let seen = handle.join().unwrap();

    assert!(envelope.success);
    assert_eq!(seen, vec!["/auth/login"]);
    assert!(auth.is_authenticated());
    assert_eq!(store.get("auth_token").as_deref(), Some("fedcba9876543210"));
    assert!(store.get("auth_user_cache").is_some());
}
