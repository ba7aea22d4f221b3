//! Core types: tiles, seats, moves, state, RNG, configuration, errors.
//!
//! Everything here is plain data plus the state transitions that keep the
//! tile set consistent. Turn order and scoring live in `engine` and `rules`.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use tile::{create_tile_set, Pip, Tile, TileId, MAX_PIP, TILE_SET_SIZE};
pub use player::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::{DominoConfig, StalematePolicy};
pub use action::{MoveKind, MoveRecord, Side};
pub use error::DominoError;
pub use state::{GameSnapshot, GameState, GameStatus};
