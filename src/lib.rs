//! # rust-domino
//!
//! A two-seat domino engine: one human against a computer opponent, played
//! with a double-six set.
//!
//! ## Design Principles
//!
//! 1. **Intents, not callbacks**: The presentation layer sends intents
//!    (new game, play a tile, draw) and renders the returned outcome or
//!    `GameSnapshot`. The engine never touches a screen or a clock.
//!
//! 2. **Rejections are harmless**: An illegal or out-of-turn intent comes
//!    back as a `DominoError` and leaves the game exactly as it was.
//!
//! 3. **Hidden information stays hidden**: Snapshots and outcomes expose
//!    only the size of the computer's hand.
//!
//! ## Architecture
//!
//! - **Deferred computer turns**: When the computer is due, the engine
//!   returns a `ScheduledTurn`. The caller waits out the delay and redeems
//!   the ticket; tickets from an abandoned game are ignored.
//!
//! - **Persistent board**: The chain is an `im::Vector`, so cloning a
//!   `GameState` for inspection or tests is cheap.
//!
//! ## Modules
//!
//! - `core`: Tiles, seats, moves, state, RNG, configuration, errors
//! - `zones`: Board chain, hands, and the boneyard
//! - `rules`: Game results and scoring
//! - `ai`: Computer move selection
//! - `engine`: The session driver

pub mod core;
pub mod zones;
pub mod rules;
pub mod ai;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Tile, TileId, Pip,
    Seat, SeatMap,
    GameRng,
    DominoConfig, StalematePolicy,
    Side, MoveKind, MoveRecord,
    DominoError,
    GameSnapshot, GameState, GameStatus,
};

pub use crate::zones::{Board, Hand, Pool};

pub use crate::rules::{GameResult, WinReason};

pub use crate::ai::{ComputerStrategy, HighestPipStrategy};

pub use crate::engine::{ComputerOutcome, DrawOutcome, GameEngine, PlayOutcome, ScheduledTurn, TurnTicket};
