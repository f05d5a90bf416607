//! Character kind definitions

use crate::board::Direction;
use serde::{Deserialize, Serialize};

/// Character kind identifier (index into CHARACTER_KINDS)
pub type KindId = u8;

/// Movement style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStyle {
    /// Four cardinal directions
    Orthogonal,
    /// Four diagonal directions
    Diagonal,
}

impl MoveStyle {
    /// Whether a direction token belongs to this style's token set
    pub fn allows(self, dir: Direction) -> bool {
        match self {
            MoveStyle::Orthogonal => !dir.is_diagonal(),
            MoveStyle::Diagonal => dir.is_diagonal(),
        }
    }
}

/// Character kind definition
#[derive(Clone, Debug)]
pub struct CharacterKind {
    pub id: &'static str,
    pub style: MoveStyle,
    pub move_range: u8,
    /// Sweeps every cell along its full move range for captures.
    /// Kinds without it relocate without evicting the destination.
    pub path_capture: bool,
}

impl CharacterKind {
    const fn new(id: &'static str, style: MoveStyle, move_range: u8, path_capture: bool) -> Self {
        Self {
            id,
            style,
            move_range,
            path_capture,
        }
    }
}

/// All character kinds
pub static CHARACTER_KINDS: [CharacterKind; 3] = [
    CharacterKind::new("Pawn", MoveStyle::Orthogonal, 1, false),
    CharacterKind::new("Hero1", MoveStyle::Orthogonal, 2, true),
    CharacterKind::new("Hero2", MoveStyle::Diagonal, 2, true),
];

/// Get kind index from its name
pub fn kind_index(id: &str) -> Option<KindId> {
    CHARACTER_KINDS.iter().position(|k| k.id == id).map(|i| i as u8)
}

/// Get kind definition from index
pub fn get_kind(idx: KindId) -> &'static CharacterKind {
    &CHARACTER_KINDS[idx as usize]
}
