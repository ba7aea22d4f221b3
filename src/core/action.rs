//! Moves and move history.
//!
//! A turn consists of one of three moves:
//! - "Play" = place a tile on one end of the board
//! - "Draw" = take a tile from the boneyard
//! - "Pass" = forced turn switch when nothing fits and the boneyard is empty
//!
//! Every applied move is kept as a `MoveRecord` for replay and debugging.

use serde::{Deserialize, Serialize};

use super::player::Seat;
use super::tile::Tile;

/// End of the board chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Prepend to the chain.
    Left,
    /// Append to the chain.
    Right,
}

impl Side {
    /// Both sides, in the order the human's play is tried.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// What a seat did on its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Placed `tile` (in its board orientation) on `side`.
    Play { tile: Tile, side: Side },
    /// Took `tile` from the boneyard.
    Draw { tile: Tile },
    /// Could not play with an empty boneyard.
    Pass,
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that moved.
    pub seat: Seat,

    /// The move taken.
    pub kind: MoveKind,

    /// Turn number when the move was taken (starts at 1).
    pub turn: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(seat: Seat, kind: MoveKind, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            kind,
            turn,
            sequence,
        }
    }
}
