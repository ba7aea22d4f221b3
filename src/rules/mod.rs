//! Game results and scoring.
//!
//! Legality of a single placement lives on `zones::Board`; this module
//! decides when a game is over and what it is worth.

pub mod result;
pub mod scoring;

pub use result::{GameResult, WinReason};
pub use scoring::{blocked_result, domino_result, hand_score, is_blocked};
