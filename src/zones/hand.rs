//! Player hands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use crate::core::{Tile, TileId};

/// Tiles held by one seat.
///
/// Keeps insertion order (deal order, then draw order); the computer's
/// tie-break among equally valued tiles relies on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles in hand order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a held tile by identity.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<Tile> {
        self.tiles.iter().copied().find(|t| t.id() == id)
    }

    /// Whether the tile is held.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.get(id).is_some()
    }

    /// Add a tile at the end.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove a tile by identity, keeping the order of the rest.
    ///
    /// Returns the removed tile, or `None` if it was not held.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id() == id)?;
        Some(self.tiles.remove(pos))
    }

    /// Sum of all pips in the hand.
    #[must_use]
    pub fn pip_sum(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }

    /// Tiles that fit the board somewhere, in hand order.
    ///
    /// Every tile is playable on an empty board.
    #[must_use]
    pub fn playable(&self, board: &Board) -> SmallVec<[Tile; 8]> {
        self.tiles.iter().copied().filter(|&t| board.fits_anywhere(t)).collect()
    }

    /// Whether any held tile fits the board.
    #[must_use]
    pub fn has_playable(&self, board: &Board) -> bool {
        self.tiles.iter().any(|&t| board.fits_anywhere(t))
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
