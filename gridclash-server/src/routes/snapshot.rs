//! Match state endpoints
//!
//! `get_state` serves the connection handshake; `poll_state` is the
//! push mechanism, answering once the snapshot version advances past
//! the client's.

use crate::state::ServerState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Get the current match snapshot
pub async fn get_state(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let game = state.game.read().unwrap();
    Json(json!({
        "snapshot": game.state.snapshot(),
        "version": game.version,
    }))
}

/// Poll query params
#[derive(Deserialize)]
pub struct PollParams {
    pub version: Option<u64>,
}

/// Long-poll for match updates
pub async fn poll_state(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<PollParams>,
) -> Json<Value> {
    let client_version = params.version.unwrap_or(0);

    // Check up to 50 times (5 seconds) for updates
    for _ in 0..50 {
        {
            let game = state.game.read().unwrap();
            if game.version != client_version {
                return Json(json!({
                    "reload": true,
                    "snapshot": game.state.snapshot(),
                    "version": game.version,
                }));
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    let game = state.game.read().unwrap();
    Json(json!({
        "reload": false,
        "version": game.version,
    }))
}
