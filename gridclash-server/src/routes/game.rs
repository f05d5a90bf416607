//! Deploy and move endpoints
//!
//! Both handlers hold the write lock for the whole request, so engine
//! operations apply one at a time in receipt order. Rejections are
//! semantic values, answered with HTTP 200 and an `error` body.

use crate::state::ServerState;
use axum::{extract::State, Json};
use gridclash_core::{CharacterSpec, EngineError, Side};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Deploy request
#[derive(Deserialize)]
pub struct DeployRequest {
    pub side: String,
    pub characters: Vec<CharacterSpec>,
}

/// Deploy a side's roster
pub async fn deploy(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<DeployRequest>,
) -> Json<Value> {
    // A side identifier outside the wire contract is a malformed
    // deployment, not a transport fault
    let side = match Side::parse(&req.side) {
        Some(side) => side,
        None => {
            tracing::debug!(side = %req.side, "deploy rejected: unknown side");
            return rejection(EngineError::InvalidDeployment);
        }
    };

    let mut game = state.game.write().unwrap();
    match game.state.deploy(side, &req.characters) {
        Ok(snapshot) => {
            game.version += 1;
            tracing::info!(side = %req.side, placed = snapshot_count(&snapshot, side), "deployment accepted");
            Json(json!({
                "snapshot": snapshot,
                "version": game.version,
            }))
        }
        Err(err) => {
            tracing::debug!(side = %req.side, %err, "deploy rejected");
            rejection(err)
        }
    }
}

/// Move request
///
/// `side` is the requester's claimed side; the engine treats it as
/// untrusted metadata and checks it against the current turn.
#[derive(Deserialize)]
pub struct MoveRequest {
    pub side: Option<String>,
    pub kind: String,
    pub direction: String,
}

/// Move a character of the current side
pub async fn move_character(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Json<Value> {
    let claimed = match req.side.as_deref() {
        Some(token) => match Side::parse(token) {
            Some(side) => Some(side),
            None => {
                tracing::debug!(side = token, "move rejected: unknown side");
                return rejection(EngineError::InvalidMove);
            }
        },
        None => None,
    };

    let mut game = state.game.write().unwrap();
    match game.state.move_character(claimed, &req.kind, &req.direction) {
        Ok(snapshot) => {
            game.version += 1;
            tracing::info!(kind = %req.kind, direction = %req.direction, "move accepted");
            Json(json!({
                "snapshot": snapshot,
                "version": game.version,
            }))
        }
        Err(err) => {
            tracing::debug!(kind = %req.kind, direction = %req.direction, %err, "move rejected");
            rejection(err)
        }
    }
}

fn rejection(err: EngineError) -> Json<Value> {
    Json(json!({ "error": err.to_string() }))
}

fn snapshot_count(snapshot: &gridclash_core::MatchSnapshot, side: Side) -> usize {
    match side {
        Side::A => snapshot.players.a.characters.len(),
        Side::B => snapshot.players.b.characters.len(),
    }
}
