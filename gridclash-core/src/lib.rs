//! GRIDCLASH Core - authoritative rules engine
//!
//! This crate provides the game logic for GRIDCLASH:
//! - Board geometry (5x5 grid) and direction tokens
//! - Character kinds and movement profiles
//! - Deployment, movement and path capture
//! - Turn lifecycle and win detection
//! - Immutable snapshots published to transport collaborators

pub mod board;
pub mod characters;
pub mod deploy;
pub mod error;
pub mod game;
pub mod moves;
pub mod snapshot;

// Re-exports for convenient access
pub use board::{Board, CharacterId, Direction, Pos, BOARD_SIZE};
pub use characters::{get_kind, kind_index, CharacterKind, KindId, MoveStyle, CHARACTER_KINDS};
pub use deploy::CharacterSpec;
pub use error::EngineError;
pub use game::{Character, MatchState, Phase, Side, SideState};
pub use snapshot::{BoardSnapshot, CharacterSnapshot, MatchSnapshot, PlayersSnapshot, SideSnapshot};
