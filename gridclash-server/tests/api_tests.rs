//! Integration tests for the gridclash-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use gridclash_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new());
    create_router(&config, state).unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn post(app: &axum::Router, uri: &str, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn deploy_body(side: &str, kinds: &[&str]) -> Value {
    json!({
        "side": side,
        "characters": kinds.iter().map(|k| json!({"kind": k})).collect::<Vec<_>>(),
    })
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();
    let json = get(&app, "/api/status").await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "rust");
}

#[tokio::test]
async fn test_characters_endpoint() {
    let app = test_app();
    let json = get(&app, "/api/characters").await;

    assert!(json.get("Pawn").is_some(), "Should have Pawn");
    assert!(json.get("Hero1").is_some(), "Should have Hero1");
    assert!(json.get("Hero2").is_some(), "Should have Hero2");

    assert_eq!(json["Pawn"]["moveRange"], 1);
    assert_eq!(json["Pawn"]["style"], "orthogonal");
    assert_eq!(json["Hero2"]["moveRange"], 2);
    assert_eq!(json["Hero2"]["style"], "diagonal");
}

#[tokio::test]
async fn test_initial_state() {
    let app = test_app();
    let json = get(&app, "/api/state").await;

    assert_eq!(json["version"], 0);
    let snapshot = &json["snapshot"];
    assert_eq!(snapshot["currentTurn"], "A");
    assert_eq!(snapshot["gameOver"], false);
    assert_eq!(snapshot["board"][0][0], json!(null));
    assert_eq!(snapshot["players"]["A"]["hasDeployed"], false);
    assert_eq!(snapshot["players"]["B"]["remainingCount"], 0);
}

#[tokio::test]
async fn test_deploy_and_move_flow() {
    let app = test_app();

    let json = post(&app, "/api/deploy", deploy_body("A", &["Pawn", "Hero1"])).await;
    assert_eq!(json["version"], 1);
    assert_eq!(json["snapshot"]["players"]["A"]["hasDeployed"], true);
    assert_eq!(json["snapshot"]["currentTurn"], "A");

    let json = post(&app, "/api/deploy", deploy_body("B", &["Pawn", "Pawn"])).await;
    assert_eq!(json["version"], 2);
    assert_eq!(json["snapshot"]["currentTurn"], "B");

    let json = post(
        &app,
        "/api/move",
        json!({"side": "B", "kind": "Pawn", "direction": "Forward"}),
    )
    .await;
    assert_eq!(json["version"], 3);
    assert_eq!(json["snapshot"]["board"][3][0]["kind"], "Pawn");
    assert_eq!(json["snapshot"]["board"][3][0]["side"], "B");
    assert_eq!(json["snapshot"]["currentTurn"], "A");
}

#[tokio::test]
async fn test_unknown_side_is_invalid_deployment() {
    let app = test_app();

    let json = post(&app, "/api/deploy", deploy_body("C", &["Pawn"])).await;
    assert_eq!(json["error"], "invalid deployment");

    // Nothing was published
    let json = get(&app, "/api/state").await;
    assert_eq!(json["version"], 0);
}

#[tokio::test]
async fn test_out_of_turn_move_rejected() {
    let app = test_app();
    post(&app, "/api/deploy", deploy_body("A", &["Pawn"])).await;
    post(&app, "/api/deploy", deploy_body("B", &["Pawn"])).await;

    // The turn belongs to B after deployment completes
    let json = post(
        &app,
        "/api/move",
        json!({"side": "A", "kind": "Pawn", "direction": "Backward"}),
    )
    .await;
    assert_eq!(json["error"], "out of turn");

    let json = get(&app, "/api/state").await;
    assert_eq!(json["version"], 2);
    assert_eq!(json["snapshot"]["currentTurn"], "B");
}

#[tokio::test]
async fn test_unrecognized_direction_rejected() {
    let app = test_app();
    post(&app, "/api/deploy", deploy_body("A", &["Pawn"])).await;
    post(&app, "/api/deploy", deploy_body("B", &["Pawn"])).await;

    let json = post(
        &app,
        "/api/move",
        json!({"kind": "Pawn", "direction": "Sideways"}),
    )
    .await;
    assert_eq!(json["error"], "invalid move");
}

#[tokio::test]
async fn test_poll_sees_new_version() {
    let app = test_app();
    post(&app, "/api/deploy", deploy_body("A", &["Pawn"])).await;

    let json = get(&app, "/api/state/poll?version=0").await;
    assert_eq!(json["reload"], true);
    assert_eq!(json["version"], 1);
    assert_eq!(json["snapshot"]["players"]["A"]["hasDeployed"], true);
}
