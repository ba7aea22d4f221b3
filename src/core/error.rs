//! Rejection reasons for player intents.
//!
//! Every failure in the engine is recoverable: a rejected intent leaves the
//! game state untouched and the `Display` text doubles as the status message
//! shown to the player.

use super::player::Seat;
use super::tile::Pip;

/// Why an intent was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DominoError {
    /// The tile is not held, or fits neither end of the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(String),

    /// The seat does not hold the turn.
    #[display("It is not {}'s turn", _0)]
    OutOfTurn(Seat),

    /// A pip value outside the double-six range.
    #[display("Invalid tile [{}|{}]: pips must be 0-6", left, right)]
    InvalidTile { left: Pip, right: Pip },

    /// Draw attempted with an empty boneyard.
    #[display("No tiles left to draw")]
    EmptyPool,

    /// No game is running (not started yet, or already over).
    #[display("No game in progress")]
    NotInProgress,

    /// Configuration failed validation.
    #[display("Config error: {}", _0)]
    Config(String),
}

impl std::error::Error for DominoError {}

impl DominoError {
    /// Shorthand for `InvalidMove`.
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove(reason.into())
    }
}
