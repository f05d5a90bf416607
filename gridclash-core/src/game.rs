//! Match state and turn lifecycle
//!
//! One `MatchState` instance is the authority for a match. Collaborators
//! drive it with two requests, deploy and move; each accepted request
//! mutates the state in place and yields a fresh snapshot.

use crate::board::{Board, CharacterId, Pos, BOARD_SIZE};
use crate::characters::{kind_index, KindId};
use crate::deploy::{self, CharacterSpec};
use crate::error::EngineError;
use crate::moves;
use crate::snapshot::MatchSnapshot;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Side identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row this side deploys into
    pub fn home_row(self) -> i8 {
        match self {
            Side::A => 0,
            Side::B => BOARD_SIZE - 1,
        }
    }

    /// Parse a wire identifier; unrecognized sides are `None`
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "A" => Some(Side::A),
            "B" => Some(Side::B),
            _ => None,
        }
    }
}

/// Lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingDeployment,
    InPlay,
    GameOver,
}

/// A character on the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Character {
    pub kind: KindId,
    pub owner: Side,
    pub pos: Pos,
}

/// Per-side roster state
#[derive(Clone, Debug, Default)]
pub struct SideState {
    /// Ids of this side's live characters, in deployment order
    pub(crate) roster: Vec<CharacterId>,
    pub(crate) remaining: u8,
    pub(crate) deployed: bool,
}

impl SideState {
    pub fn roster(&self) -> &[CharacterId] {
        &self.roster
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn has_deployed(&self) -> bool {
        self.deployed
    }
}

// ============================================================================
// MATCH STATE
// ============================================================================

/// Authoritative match state; one instance per match
#[derive(Clone, Debug)]
pub struct MatchState {
    pub(crate) board: Board,
    /// Arena of every character ever deployed. Captured characters stay
    /// as tombstones so ids held by the board and rosters remain stable.
    pub(crate) characters: Vec<Character>,
    pub(crate) side_a: SideState,
    pub(crate) side_b: SideState,
    pub(crate) current_turn: Side,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Side>,
}

impl MatchState {
    /// Create a fresh match: empty board, neither side deployed
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            characters: Vec::new(),
            side_a: SideState::default(),
            side_b: SideState::default(),
            current_turn: Side::A,
            game_over: false,
            winner: None,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.side_a.deployed && self.side_b.deployed {
            Phase::InPlay
        } else {
            Phase::AwaitingDeployment
        }
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    pub fn character(&self, id: CharacterId) -> &Character {
        &self.characters[id]
    }

    /// Character occupying a cell, if any
    pub fn occupant_at(&self, pos: Pos) -> Option<&Character> {
        self.board.occupant(pos).map(|id| &self.characters[id])
    }

    // ========================================================================
    // REQUESTS
    // ========================================================================

    /// Deploy a side's initial roster onto its home row.
    ///
    /// A repeated deploy for the same side is a no-op, not an error. When
    /// the second side completes deployment the turn toggles and play
    /// begins.
    pub fn deploy(
        &mut self,
        side: Side,
        specs: &[CharacterSpec],
    ) -> Result<MatchSnapshot, EngineError> {
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        if self.side(side).deployed {
            return Ok(self.snapshot());
        }

        deploy::place_roster(self, side, specs);
        self.side_mut(side).deployed = true;

        if self.side_a.deployed && self.side_b.deployed {
            self.current_turn = self.current_turn.opponent();
        }
        Ok(self.snapshot())
    }

    /// Move the current side's character of the given kind one full
    /// range in the given direction.
    ///
    /// `claimed_side` is the requester's asserted side. It is untrusted
    /// metadata: turn ownership derives from state alone, and a claim
    /// that contradicts the current turn is rejected before resolution.
    pub fn move_character(
        &mut self,
        claimed_side: Option<Side>,
        kind: &str,
        direction: &str,
    ) -> Result<MatchSnapshot, EngineError> {
        if self.game_over {
            return Err(EngineError::GameAlreadyOver);
        }
        // No side holds the turn until both sides have deployed
        if self.phase() != Phase::InPlay {
            return Err(EngineError::OutOfTurn);
        }
        if let Some(side) = claimed_side {
            if side != self.current_turn {
                return Err(EngineError::OutOfTurn);
            }
        }

        let kind_id = kind_index(kind).ok_or(EngineError::CharacterNotFound)?;
        let id = self
            .side(self.current_turn)
            .roster
            .iter()
            .copied()
            .find(|&id| self.characters[id].kind == kind_id)
            .ok_or(EngineError::CharacterNotFound)?;

        let captures = moves::apply(self, id, direction)?;

        // Lifecycle bookkeeping: win detection first, then the turn
        // toggle, which happens even on a game-ending move (a terminal
        // state's current turn is meaningless).
        let opponent = self.current_turn.opponent();
        if captures > 0 && self.side(opponent).remaining == 0 {
            self.game_over = true;
            self.winner = Some(self.current_turn);
        }
        self.current_turn = self.current_turn.opponent();

        Ok(self.snapshot())
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// Seed a character directly into the arena, board and roster
#[cfg(test)]
pub(crate) fn seed_character(state: &mut MatchState, kind: &str, owner: Side, pos: Pos) {
    let kind = kind_index(kind).unwrap();
    let id = state.characters.len();
    state.characters.push(Character { kind, owner, pos });
    state.board.place(pos, id);
    let side_state = state.side_mut(owner);
    side_state.roster.push(id);
    side_state.remaining += 1;
}

/// Build an in-play match from explicit placements, turn with side A
#[cfg(test)]
pub(crate) fn test_match(placements: &[(&str, Side, Pos)]) -> MatchState {
    let mut state = MatchState::new();
    for &(kind, owner, pos) in placements {
        seed_character(&mut state, kind, owner, pos);
    }
    state.side_a.deployed = true;
    state.side_b.deployed = true;
    state
}

// ============================================================================
// TESTS
// ============================================================================
