//! Table zones: the board chain, the boneyard, and the hands.
//!
//! Zones know their own shape rules (chain orientation, LIFO draws, hand
//! order) but nothing about turns or scoring; those live in `rules` and
//! `engine`.

pub mod board;
pub mod hand;
pub mod pool;

pub use board::Board;
pub use hand::Hand;
pub use pool::{shuffle, Pool};
