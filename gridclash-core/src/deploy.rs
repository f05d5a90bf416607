//! Initial roster placement

use crate::board::{Pos, BOARD_SIZE};
use crate::characters::kind_index;
use crate::game::{Character, MatchState, Side};
use serde::{Deserialize, Serialize};

/// One requested character in a deployment, by kind name
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub kind: String,
}

/// Place a side's roster onto its home row.
///
/// Specs land in consecutive columns, one column per list slot. Columns
/// already occupied, columns past the board edge and unknown kind names
/// are dropped silently; the deployment proceeds with whatever fits.
pub(crate) fn place_roster(state: &mut MatchState, side: Side, specs: &[CharacterSpec]) {
    let row = side.home_row();

    // Vacate any of this side's own characters still on the home row.
    // Opposing characters keep their cells and block those columns.
    for x in 0..BOARD_SIZE {
        let pos = Pos::new(x, row);
        if let Some(id) = state.board.occupant(pos) {
            if state.characters[id].owner == side {
                state.board.clear(pos);
                let side_state = state.side_mut(side);
                side_state.roster.retain(|&c| c != id);
                side_state.remaining = side_state.roster.len() as u8;
            }
        }
    }

    for (column, spec) in specs.iter().enumerate() {
        let pos = Pos::new(column as i8, row);
        if !pos.is_valid() {
            continue;
        }
        let kind = match kind_index(&spec.kind) {
            Some(kind) => kind,
            None => continue,
        };
        if state.board.occupant(pos).is_some() {
            continue;
        }

        let id = state.characters.len();
        state.characters.push(Character {
            kind,
            owner: side,
            pos,
        });
        state.board.place(pos, id);
        let side_state = state.side_mut(side);
        side_state.roster.push(id);
        side_state.remaining += 1;
    }
}
