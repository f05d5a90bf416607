//! Server state management
//!
//! One match per process, shared by every inbound request. The write
//! lock is held for the full duration of a deploy or move, so requests
//! behave as if executed one at a time in receipt order.

use gridclash_core::MatchState;
use std::sync::RwLock;

/// The match plus its publication counter
///
/// `version` advances only after an accepted mutation commits; the
/// long-poll route uses it to push fresh snapshots to clients.
#[derive(Debug)]
pub struct PublishedMatch {
    pub state: MatchState,
    pub version: u64,
}

/// Server-wide shared state
pub struct ServerState {
    pub game: RwLock<PublishedMatch>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            game: RwLock::new(PublishedMatch {
                state: MatchState::new(),
                version: 0,
            }),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
