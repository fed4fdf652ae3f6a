//! Error types for the rules engine
//!
//! Board queries fail with `OutOfRange`; the move executor rejects anything not
//! backed by a rule-generated candidate with `InvalidMove`. The remaining
//! variants are refusals from the selection gate and the placement parser.

use crate::board::Color;
use crate::square::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside [0, 8)
    #[error("square ({x}, {y}) is off the board")]
    OutOfRange { x: i32, y: i32 },

    /// Execution request that the rules would not have generated
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Color },

    #[error("the game is over")]
    GameOver,

    #[error("no piece on {square}")]
    EmptySquare { square: Square },

    #[error("square {square} is already occupied")]
    SquareOccupied { square: Square },

    #[error("invalid square notation: {text:?}")]
    InvalidSquare { text: String },

    #[error("invalid placement: {message}")]
    Placement { message: String },
}

impl GameError {
    pub(crate) fn invalid_move(reason: impl Into<String>) -> Self {
        GameError::InvalidMove {
            reason: reason.into(),
        }
    }
}

/// Result type alias for rules engine operations
pub type GameResult<T> = Result<T, GameError>;
