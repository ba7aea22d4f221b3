//! Computer opponent.
//!
//! The engine asks a `ComputerStrategy` for a placement whenever the
//! computer holds a playable tile; drawing and passing are engine rules, not
//! strategy decisions.

pub mod strategy;

pub use strategy::{ComputerStrategy, HighestPipStrategy};
