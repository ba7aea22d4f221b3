//! The board: a chain of oriented tiles.
//!
//! The board tracks the placed tiles in order and the two exposed ends.
//! It owns the legality check and the orientation rule:
//! - An empty board accepts any tile, as given, on either side
//! - A tile fits a side iff one of its pips equals that end
//! - A fitting tile is flipped when needed so the matching pip touches the
//!   chain; the other pip becomes the new end
//!
//! ```
//! use rust_domino::core::{Side, Tile};
//! use rust_domino::zones::Board;
//!
//! let mut board = Board::new();
//! board.place(Tile::new(3, 5), Side::Left).unwrap();
//!
//! // {5,2} fits the right end (5); it is appended as [5|2]
//! let placed = board.place(Tile::new(2, 5), Side::Right).unwrap();
//! assert_eq!(placed, Tile::new(5, 2));
//! assert_eq!(board.ends(), Some((3, 2)));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DominoError, Pip, Side, Tile};

/// Ordered chain of placed tiles with its two exposed ends.
///
/// Uses `im::Vector` so snapshots clone cheaply and prepends stay O(1)
/// amortized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<Tile>,
    left_end: Option<Pip>,
    right_end: Option<Pip>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no tile has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Placed tiles, left to right, in board orientation.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Exposed pip on the left end.
    #[must_use]
    pub fn left_end(&self) -> Option<Pip> {
        self.left_end
    }

    /// Exposed pip on the right end.
    #[must_use]
    pub fn right_end(&self) -> Option<Pip> {
        self.right_end
    }

    /// Both ends, `None` while the board is empty.
    #[must_use]
    pub fn ends(&self) -> Option<(Pip, Pip)> {
        Some((self.left_end?, self.right_end?))
    }

    /// Exposed pip on `side`.
    #[must_use]
    pub fn end(&self, side: Side) -> Option<Pip> {
        match side {
            Side::Left => self.left_end,
            Side::Right => self.right_end,
        }
    }

    /// Whether `tile` may be placed on `side`.
    ///
    /// Always true on an empty board.
    #[must_use]
    pub fn can_place(&self, tile: Tile, side: Side) -> bool {
        match self.end(side) {
            None => true,
            Some(end) => tile.matches(end),
        }
    }

    /// Whether `tile` fits either end.
    #[must_use]
    pub fn fits_anywhere(&self, tile: Tile) -> bool {
        Side::BOTH.into_iter().any(|side| self.can_place(tile, side))
    }

    /// Sides `tile` may be placed on, left first.
    pub fn legal_sides(&self, tile: Tile) -> impl Iterator<Item = Side> + '_ {
        Side::BOTH.into_iter().filter(move |&side| self.can_place(tile, side))
    }

    /// The orientation `tile` would take on `side`, or `None` if it does
    /// not fit.
    #[must_use]
    pub fn orient(&self, tile: Tile, side: Side) -> Option<Tile> {
        match (side, self.end(side)) {
            (_, None) => Some(tile),
            (Side::Left, Some(end)) if tile.right == end => Some(tile),
            (Side::Left, Some(end)) if tile.left == end => Some(tile.flipped()),
            (Side::Right, Some(end)) if tile.left == end => Some(tile),
            (Side::Right, Some(end)) if tile.right == end => Some(tile.flipped()),
            _ => None,
        }
    }

    /// Place `tile` on `side`, flipping it if needed.
    ///
    /// Returns the tile as oriented on the board. Fails with `InvalidMove`
    /// and leaves the board untouched when the tile does not fit.
    pub fn place(&mut self, tile: Tile, side: Side) -> Result<Tile, DominoError> {
        let oriented = self.orient(tile, side).ok_or_else(|| {
            DominoError::invalid_move(format!("{} does not fit the {} end", tile, side))
        })?;

        if self.tiles.is_empty() {
            self.tiles.push_back(oriented);
            self.left_end = Some(oriented.left);
            self.right_end = Some(oriented.right);
        } else {
            match side {
                Side::Left => {
                    self.tiles.push_front(oriented);
                    self.left_end = Some(oriented.left);
                }
                Side::Right => {
                    self.tiles.push_back(oriented);
                    self.right_end = Some(oriented.right);
                }
            }
        }

        Ok(oriented)
    }

    /// Check the chain invariant.
    ///
    /// Adjacent tiles must touch with equal pips, and the stored ends must
    /// equal the outward pips of the first and last tile.
    pub fn verify(&self) -> Result<(), String> {
        for (i, (a, b)) in self.tiles.iter().zip(self.tiles.iter().skip(1)).enumerate() {
            if a.right != b.left {
                return Err(format!("tiles {} and {} touch with {} vs {}", i, i + 1, a.right, b.left));
            }
        }

        let expected = match (self.tiles.front(), self.tiles.back()) {
            (Some(first), Some(last)) => (Some(first.left), Some(last.right)),
            _ => (None, None),
        };
        if expected != (self.left_end, self.right_end) {
            return Err(format!(
                "ends {:?}/{:?} disagree with chain {:?}/{:?}",
                self.left_end, self.right_end, expected.0, expected.1
            ));
        }

        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tiles.is_empty() {
            return write!(f, "(empty)");
        }
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
