//! Movement and capture resolution

use crate::board::{CharacterId, Direction};
use crate::characters::get_kind;
use crate::error::EngineError;
use crate::game::MatchState;

/// Validate and apply a move for the resolved character, returning the
/// number of opposing characters captured.
///
/// Validation completes before any mutation: a rejected move leaves the
/// match untouched.
pub(crate) fn apply(
    state: &mut MatchState,
    id: CharacterId,
    direction: &str,
) -> Result<u8, EngineError> {
    let character = *state.character(id);
    let kind = get_kind(character.kind);

    let dir = Direction::parse(direction).ok_or(EngineError::InvalidMove)?;
    if !kind.style.allows(dir) {
        return Err(EngineError::InvalidMove);
    }

    let step = dir.vector();
    let range = kind.move_range as i8;
    let dest = character.pos.stepped(step, range);
    if !dest.is_valid() {
        return Err(EngineError::InvalidMove);
    }
    // Same-side occupancy is the only destination-occupancy check;
    // landing on an opposing character is allowed.
    if let Some(occupant) = state.board.occupant(dest) {
        if state.characters[occupant].owner == character.owner {
            return Err(EngineError::InvalidMove);
        }
    }

    // Path sweep: walk the full move range one step at a time, capturing
    // every opposing character on a stepped-to cell. Kinds without path
    // capture (the Pawn) skip this entirely, so they never evict a
    // destination occupant by landing on it.
    let mut captures = 0;
    if kind.path_capture {
        for i in 1..=range {
            let cell = character.pos.stepped(step, i);
            if !cell.is_valid() {
                continue;
            }
            if let Some(occupant) = state.board.occupant(cell) {
                if state.characters[occupant].owner != character.owner {
                    capture(state, occupant);
                    captures += 1;
                }
            }
        }
    }

    // Relocate: vacate the origin, take the destination cell
    state.board.clear(character.pos);
    state.board.place(dest, id);
    state.characters[id].pos = dest;

    Ok(captures)
}

/// Remove a captured character from its cell and its side's roster
fn capture(state: &mut MatchState, id: CharacterId) {
    let victim = *state.character(id);
    state.board.clear(victim.pos);
    let side_state = state.side_mut(victim.owner);
    side_state.roster.retain(|&c| c != id);
    side_state.remaining -= 1;
}
