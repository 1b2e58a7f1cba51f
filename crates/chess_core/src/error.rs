//! Errors raised by the rules layer.
//!
//! None of these are fatal: every failing operation leaves the [`Game`]
//! exactly as it was before the call.
//!
//! [`Game`]: crate::Game

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// FEN string could not be parsed into a valid position
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move is not legal in the current position
    #[error("illegal move `{notation}` in position {fen}")]
    IllegalMove { notation: String, fen: String },

    /// Notation does not match any legal move
    #[error("no legal move matches `{notation}`")]
    UnknownMove { notation: String },

    /// Undo requested with an empty move stack
    #[error("no move to undo")]
    NothingToUndo,
}

pub type GameResult<T> = Result<T, GameError>;
