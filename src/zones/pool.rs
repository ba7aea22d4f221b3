//! The boneyard: undealt tiles available for drawing.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use crate::core::{create_tile_set, GameRng, Seat, SeatMap, Tile};

/// Shuffle tiles in place with the game RNG (Fisher–Yates).
pub fn shuffle(tiles: &mut [Tile], rng: &mut GameRng) {
    rng.shuffle(tiles);
}

/// Undealt tiles. Draws pop from the end (top = end of vec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    tiles: Vec<Tile>,
}

impl Pool {
    /// A freshly shuffled double-six set.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut tiles = create_tile_set();
        shuffle(&mut tiles, rng);
        Self { tiles }
    }

    /// A pool in a fixed order; the last tile is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Take the top tile, or `None` if the pool is exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Deal `hand_size` tiles to each seat.
    ///
    /// Pops alternate human, computer, human, ... from the top.
    /// Panics if the pool holds fewer than `2 * hand_size` tiles.
    pub fn deal(&mut self, hand_size: usize) -> SeatMap<Hand> {
        assert!(self.tiles.len() >= hand_size * 2, "Pool too small to deal both hands");

        let mut hands: SeatMap<Hand> = SeatMap::with_default();
        for _ in 0..hand_size {
            for seat in Seat::ALL {
                if let Some(tile) = self.tiles.pop() {
                    hands[seat].push(tile);
                }
            }
        }
        hands
    }
}
