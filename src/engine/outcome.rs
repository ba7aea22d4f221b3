//! Results of intents and computer steps.
//!
//! Each outcome carries the status message shown to the player and, when
//! the computer is due next, the `ScheduledTurn` to run.

use serde::{Deserialize, Serialize};

use super::schedule::ScheduledTurn;
use crate::core::{Side, Tile};
use crate::rules::GameResult;

/// A successful human placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The tile as oriented on the board.
    pub tile: Tile,
    /// End it went on.
    pub side: Side,
    /// Set when this play emptied the hand.
    pub ended: Option<GameResult>,
    /// Computer step to run next.
    pub next: Option<ScheduledTurn>,
    /// Status message.
    pub message: String,
}

/// A successful human draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The tile taken from the boneyard.
    pub tile: Tile,
    /// Whether the human may still act this turn.
    pub turn_kept: bool,
    /// Computer step to run next.
    pub next: Option<ScheduledTurn>,
    /// Status message.
    pub message: String,
}

/// What a computer step did.
///
/// The drawn tile is deliberately absent from `Drew`: the computer's hand is
/// hidden information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerOutcome {
    /// Drew one tile; another step follows after the delay.
    Drew {
        next: ScheduledTurn,
        message: String,
    },
    /// Placed a tile.
    Placed {
        tile: Tile,
        side: Side,
        ended: Option<GameResult>,
        next: Option<ScheduledTurn>,
        message: String,
    },
    /// Could not play with an empty boneyard.
    Passed {
        ended: Option<GameResult>,
        next: Option<ScheduledTurn>,
        message: String,
    },
    /// The ticket was revoked or already used; nothing changed.
    Stale,
}

impl ComputerOutcome {
    /// Status message (empty for `Stale`).
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ComputerOutcome::Drew { message, .. }
            | ComputerOutcome::Placed { message, .. }
            | ComputerOutcome::Passed { message, .. } => message,
            ComputerOutcome::Stale => "",
        }
    }

    /// Computer step to run next, if any.
    #[must_use]
    pub fn next(&self) -> Option<ScheduledTurn> {
        match self {
            ComputerOutcome::Drew { next, .. } => Some(*next),
            ComputerOutcome::Placed { next, .. } | ComputerOutcome::Passed { next, .. } => *next,
            ComputerOutcome::Stale => None,
        }
    }

    /// Result, if this step ended the game.
    #[must_use]
    pub fn ended(&self) -> Option<GameResult> {
        match self {
            ComputerOutcome::Placed { ended, .. } | ComputerOutcome::Passed { ended, .. } => *ended,
            ComputerOutcome::Drew { .. } | ComputerOutcome::Stale => None,
        }
    }
}
