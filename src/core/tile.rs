//! Domino tiles and the double-six set.
//!
//! ## Identity vs. Orientation
//!
//! A `Tile` carries two pip values in a specific orientation (`left`,
//! `right`). Its identity is the unordered pair, exposed as `TileId`:
//! flipping a tile changes its orientation but never its id.
//!
//! ```
//! use rust_domino::core::Tile;
//!
//! let tile = Tile::new(5, 2);
//! let flipped = tile.flipped();
//!
//! assert_eq!(flipped.left, 2);
//! assert_eq!(flipped.right, 5);
//! assert_eq!(tile.id(), flipped.id());
//! ```

use serde::{Deserialize, Serialize};

use super::error::DominoError;

/// Pip count on one half of a tile.
pub type Pip = u8;

/// Highest pip value in a double-six set.
pub const MAX_PIP: Pip = 6;

/// Number of tiles in a double-six set.
pub const TILE_SET_SIZE: usize = 28;

/// Orientation-independent tile identifier.
///
/// Encodes the unordered pair as `low * 7 + high`, so ids are unique but not
/// dense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create the id for an unordered pip pair.
    ///
    /// Pips above `MAX_PIP` give an id outside the set rather than
    /// overflowing.
    #[must_use]
    pub const fn from_pips(a: Pip, b: Pip) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self(low.wrapping_mul(MAX_PIP + 1).wrapping_add(high))
    }

    /// The pip pair this id stands for, low pip first.
    #[must_use]
    pub const fn pips(self) -> (Pip, Pip) {
        (self.0 / (MAX_PIP + 1), self.0 % (MAX_PIP + 1))
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (low, high) = self.pips();
        write!(f, "{}-{}", low, high)
    }
}

/// A domino tile in a specific orientation.
///
/// Equality compares orientation too; use `id()` to compare identity.
/// Deserialization rejects pips above `MAX_PIP`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTile")]
pub struct Tile {
    /// Pip value on the left half.
    pub left: Pip,
    /// Pip value on the right half.
    pub right: Pip,
}

impl Tile {
    /// Create a tile.
    ///
    /// Panics if either pip is above `MAX_PIP`; use `try_new` for pips that
    /// come from outside the crate.
    #[must_use]
    pub fn new(left: Pip, right: Pip) -> Self {
        assert!(left <= MAX_PIP && right <= MAX_PIP, "Pip values must be 0-6");
        Self { left, right }
    }

    /// Create a tile, rejecting pips above `MAX_PIP`.
    pub fn try_new(left: Pip, right: Pip) -> Result<Self, DominoError> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(DominoError::InvalidTile { left, right });
        }
        Ok(Self { left, right })
    }

    /// Identity of this tile, independent of orientation.
    #[must_use]
    pub const fn id(self) -> TileId {
        TileId::from_pips(self.left, self.right)
    }

    /// Same tile with left and right swapped.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Whether both halves carry the same pip value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Combined pip count of both halves.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Whether either half carries `pip`.
    #[must_use]
    pub const fn matches(self, pip: Pip) -> bool {
        self.left == pip || self.right == pip
    }
}

/// Unchecked wire form of a `Tile`.
#[derive(Deserialize)]
struct RawTile {
    left: Pip,
    right: Pip,
}

impl TryFrom<RawTile> for Tile {
    type Error = DominoError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        Tile::try_new(raw.left, raw.right)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Enumerate the full double-six set.
///
/// Yields every `(i, j)` with `0 <= i <= j <= 6` in row-major order, exactly
/// 28 tiles. Deterministic; shuffling happens elsewhere.
#[must_use]
pub fn create_tile_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_SET_SIZE);
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            tiles.push(Tile::new(i, j));
        }
    }
    tiles
}
