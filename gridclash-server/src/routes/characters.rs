//! Character catalog endpoint
//!
//! Returns all character kind definitions for the client's deployment
//! picker.

use axum::Json;
use gridclash_core::{MoveStyle, CHARACTER_KINDS};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Get all character kind definitions
pub async fn get_characters() -> Json<HashMap<String, Value>> {
    let mut kinds = HashMap::new();

    for kind in &CHARACTER_KINDS {
        let style = match kind.style {
            MoveStyle::Orthogonal => "orthogonal",
            MoveStyle::Diagonal => "diagonal",
        };
        kinds.insert(
            kind.id.to_string(),
            json!({
                "id": kind.id,
                "style": style,
                "moveRange": kind.move_range,
                "pathCapture": kind.path_capture,
            }),
        );
    }

    Json(kinds)
}
