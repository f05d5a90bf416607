//! Published match snapshots
//!
//! The immutable view handed to transport collaborators after every
//! accepted mutation. Field names follow the JSON wire contract.

use crate::board::{Pos, BOARD_SIZE};
use crate::characters::get_kind;
use crate::game::{Character, MatchState, Side};
use serde::{Deserialize, Serialize};

const GRID: usize = BOARD_SIZE as usize;

/// Row-major cell view: `board[y][x]`
pub type BoardSnapshot = [[Option<CharacterSnapshot>; GRID]; GRID];

/// A character as seen by collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub kind: String,
    pub side: Side,
    pub position: Pos,
}

/// One side's roster view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSnapshot {
    pub characters: Vec<CharacterSnapshot>,
    pub remaining_count: u8,
    pub has_deployed: bool,
}

/// Both sides, keyed by side identifier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayersSnapshot {
    #[serde(rename = "A")]
    pub a: SideSnapshot,
    #[serde(rename = "B")]
    pub b: SideSnapshot,
}

/// Full match state as published to collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub board: BoardSnapshot,
    pub players: PlayersSnapshot,
    pub current_turn: Side,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
}

impl MatchState {
    /// Build the published view of the current state
    pub fn snapshot(&self) -> MatchSnapshot {
        let mut board: BoardSnapshot = Default::default();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                board[y as usize][x as usize] = self
                    .board
                    .occupant(pos)
                    .map(|id| snapshot_character(self.character(id)));
            }
        }

        MatchSnapshot {
            board,
            players: PlayersSnapshot {
                a: snapshot_side(self, Side::A),
                b: snapshot_side(self, Side::B),
            },
            current_turn: self.current_turn,
            game_over: self.game_over,
            winner: self.winner,
        }
    }
}

fn snapshot_side(state: &MatchState, side: Side) -> SideSnapshot {
    let side_state = state.side(side);
    SideSnapshot {
        characters: side_state
            .roster()
            .iter()
            .map(|&id| snapshot_character(state.character(id)))
            .collect(),
        remaining_count: side_state.remaining(),
        has_deployed: side_state.has_deployed(),
    }
}

fn snapshot_character(character: &Character) -> CharacterSnapshot {
    CharacterSnapshot {
        kind: get_kind(character.kind).id.to_string(),
        side: character.owner,
        position: character.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::CharacterSpec;
    use crate::game::test_match;
    use serde_json::json;

    fn specs(kinds: &[&str]) -> Vec<CharacterSpec> {
        kinds
            .iter()
            .map(|k| CharacterSpec {
                kind: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_match_shape() {
        let state = MatchState::new();
        let value = serde_json::to_value(state.snapshot()).unwrap();

        assert_eq!(value["currentTurn"], "A");
        assert_eq!(value["gameOver"], false);
        assert!(value.get("winner").is_none(), "winner is absent until set");
        assert_eq!(value["board"][0][0], json!(null));
        assert_eq!(value["players"]["A"]["remainingCount"], 0);
        assert_eq!(value["players"]["B"]["hasDeployed"], false);
    }

    #[test]
    fn test_deployed_cell_shape() {
        let mut state = MatchState::new();
        let snapshot = state.deploy(Side::A, &specs(&["Pawn", "Hero2"])).unwrap();
        let value = serde_json::to_value(snapshot).unwrap();

        assert_eq!(value["board"][0][0]["kind"], "Pawn");
        assert_eq!(value["board"][0][1]["kind"], "Hero2");
        assert_eq!(value["board"][0][1]["side"], "A");
        assert_eq!(value["board"][0][1]["position"], json!({"x": 1, "y": 0}));
        assert_eq!(value["players"]["A"]["characters"][0]["kind"], "Pawn");
        assert_eq!(value["players"]["A"]["remainingCount"], 2);
        assert_eq!(value["players"]["A"]["hasDeployed"], true);
    }

    #[test]
    fn test_winner_serialized_once_set() {
        let mut state = test_match(&[
            ("Hero1", Side::A, Pos::new(2, 2)),
            ("Pawn", Side::B, Pos::new(2, 4)),
        ]);
        let snapshot = state.move_character(None, "Hero1", "Backward").unwrap();
        let value = serde_json::to_value(snapshot).unwrap();

        assert_eq!(value["gameOver"], true);
        assert_eq!(value["winner"], "A");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = MatchState::new();
        state.deploy(Side::A, &specs(&["Pawn", "Hero1"])).unwrap();
        let snapshot = state.snapshot();

        let text = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snapshot);
    }
}
