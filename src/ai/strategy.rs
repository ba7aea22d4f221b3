//! Computer move selection.
//!
//! Strategies are trait-based so a front end can swap in its own:
//! - `ComputerStrategy`: pick a tile and a side from a hand
//! - `HighestPipStrategy`: dump the heaviest playable tile first

use std::cmp::Reverse;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Side, Tile};
use crate::zones::{Board, Hand};

/// Policy for choosing the computer's placement.
pub trait ComputerStrategy: Send + Sync {
    /// Choose a held tile and the side to play it on.
    ///
    /// Returns `None` when nothing in `hand` fits the board. A returned
    /// choice must be legal on `board`.
    fn choose(&self, hand: &Hand, board: &Board) -> Option<(Tile, Side)>;
}

/// Plays the playable tile with the largest pip sum.
///
/// Ties go to the tile that comes first in hand order. When the tile fits
/// both ends it goes on the end showing the higher pip (left on a tie).
/// No lookahead and no blocking play.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestPipStrategy;

impl HighestPipStrategy {
    /// Side for a tile already known to fit somewhere.
    fn pick_side(tile: Tile, board: &Board) -> Side {
        let sides: SmallVec<[Side; 2]> = board.legal_sides(tile).collect();
        match (sides.as_slice(), board.ends()) {
            ([_, _], Some((left, right))) => {
                if left >= right {
                    Side::Left
                } else {
                    Side::Right
                }
            }
            ([side], _) => *side,
            _ => Side::Left,
        }
    }
}

impl ComputerStrategy for HighestPipStrategy {
    #[instrument(skip_all)]
    fn choose(&self, hand: &Hand, board: &Board) -> Option<(Tile, Side)> {
        let mut playable = hand.playable(board);
        // Stable sort: equal sums keep hand order
        playable.sort_by_key(|t| Reverse(t.pip_sum()));

        let tile = *playable.first()?;
        let side = Self::pick_side(tile, board);
        debug!(%tile, %side, candidates = playable.len(), "computer picked tile");
        Some((tile, side))
    }
}
