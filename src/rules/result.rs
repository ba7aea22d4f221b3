//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner placed their last tile.
    Domino,
    /// Nobody could move; the winner held fewer pips.
    Blocked,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner, credited with `score_delta` points.
    Winner {
        seat: Seat,
        reason: WinReason,
        score_delta: u32,
    },
    /// Blocked game with equal pip sums; nobody scores.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner { seat: s, .. } if *s == seat)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner { seat, .. } => Some(*seat),
            GameResult::Draw => None,
        }
    }

    /// Points awarded to the winner (0 for a draw).
    #[must_use]
    pub fn score_delta(&self) -> u32 {
        match self {
            GameResult::Winner { score_delta, .. } => *score_delta,
            GameResult::Draw => 0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner {
                seat,
                reason: WinReason::Domino,
                score_delta,
            } => write!(f, "{} wins (+{} points)", seat, score_delta),
            GameResult::Winner {
                seat,
                reason: WinReason::Blocked,
                score_delta,
            } => write!(f, "Game blocked: {} wins on fewer pips (+{} points)", seat, score_delta),
            GameResult::Draw => write!(f, "Game blocked: tie on pips, nobody scores"),
        }
    }
}
