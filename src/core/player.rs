//! Seats and per-seat data storage.
//!
//! ## Seat
//!
//! The two participants of a game: the human at the screen and the
//! computer opponent.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by a fixed `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The player at the screen.
    #[default]
    Human,
    /// The built-in opponent.
    Computer,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Storage index (human = 0, computer = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human"),
            Seat::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_domino::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_default();
/// scores[Seat::Computer] += 12;
///
/// assert_eq!(scores[Seat::Human], 0);
/// assert_eq!(scores[Seat::Computer], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Human), factory(Seat::Computer)],
        }
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
