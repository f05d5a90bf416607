//! Engine rejection taxonomy

use thiserror::Error;

/// Recoverable rejection of a deploy or move request
///
/// Validation completes before any mutation begins, so a rejected
/// request leaves the match untouched. Rejections are semantic, not
/// transient; retrying an identical request yields the same answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid deployment")]
    InvalidDeployment,
    #[error("character not found")]
    CharacterNotFound,
    #[error("invalid move")]
    InvalidMove,
    #[error("out of turn")]
    OutOfTurn,
    #[error("game already over")]
    GameAlreadyOver,
}
