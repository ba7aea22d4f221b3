//! Game state: full state and the public snapshot.
//!
//! ## GameState
//!
//! Complete state of one game:
//! - Board chain and boneyard
//! - Both hands (the computer's hand is private information)
//! - Turn, status, and move history
//!
//! ## GameSnapshot
//!
//! What the presentation layer may see: the board, the human's hand, the
//! *size* of the computer's hand, pool size, turn, status, scores, and the
//! latest status message.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{MoveKind, MoveRecord, Side};
use super::error::DominoError;
use super::player::{Seat, SeatMap};
use super::tile::{Pip, Tile, TileId, TILE_SET_SIZE};
use crate::rules::GameResult;
use crate::zones::{Board, Hand, Pool};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game dealt yet.
    #[default]
    NotStarted,
    /// Intents are accepted.
    InProgress,
    /// Frozen; only a new game can follow.
    Ended(GameResult),
}

impl GameStatus {
    /// Whether intents are accepted.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Full game state including private information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Placed tiles.
    pub board: Board,

    /// Undealt tiles.
    pub pool: Pool,

    /// Hands per seat.
    hands: SeatMap<Hand>,

    /// Seat holding the turn.
    pub turn: Seat,

    /// Lifecycle status.
    pub status: GameStatus,

    /// Turn number (starts at 1, bumps on every switch).
    pub turn_number: u32,

    /// Next move sequence number.
    sequence: u32,

    /// Passes in a row with nothing placed in between.
    consecutive_passes: u8,

    /// Every applied move, oldest first.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a game from a dealt pool and hands.
    #[must_use]
    pub fn new(pool: Pool, hands: SeatMap<Hand>, first: Seat) -> Self {
        Self {
            board: Board::new(),
            pool,
            hands,
            turn: first,
            status: GameStatus::InProgress,
            turn_number: 1,
            sequence: 0,
            consecutive_passes: 0,
            history: Vector::new(),
        }
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    /// Both hands.
    #[must_use]
    pub fn hands(&self) -> &SeatMap<Hand> {
        &self.hands
    }

    /// Whether `seat` holds any tile that fits the board.
    #[must_use]
    pub fn has_playable(&self, seat: Seat) -> bool {
        self.hands[seat].has_playable(&self.board)
    }

    /// Passes in a row with nothing placed in between.
    #[must_use]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Moves ===

    /// Move a held tile onto the board.
    ///
    /// Checks ownership and fit before touching anything, so a rejected
    /// play leaves the state unchanged. Returns the tile as oriented on the
    /// board.
    pub fn apply_play(&mut self, seat: Seat, id: TileId, side: Side) -> Result<Tile, DominoError> {
        let tile = self.hands[seat]
            .get(id)
            .ok_or_else(|| DominoError::invalid_move(format!("tile {} is not in {}'s hand", id, seat)))?;

        let oriented = self.board.place(tile, side)?;
        self.hands[seat].remove(id);
        self.consecutive_passes = 0;
        self.record(seat, MoveKind::Play { tile: oriented, side });
        Ok(oriented)
    }

    /// Move the top boneyard tile into `seat`'s hand.
    pub fn apply_draw(&mut self, seat: Seat) -> Result<Tile, DominoError> {
        let tile = self.pool.draw().ok_or(DominoError::EmptyPool)?;
        self.hands[seat].push(tile);
        self.record(seat, MoveKind::Draw { tile });
        Ok(tile)
    }

    /// Record a forced pass by `seat`.
    pub fn apply_pass(&mut self, seat: Seat) {
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        self.record(seat, MoveKind::Pass);
    }

    /// Hand the turn to the other seat.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.turn_number += 1;
    }

    /// Freeze the game with `result`.
    pub fn finish(&mut self, result: GameResult) {
        self.status = GameStatus::Ended(result);
    }

    fn record(&mut self, seat: Seat, kind: MoveKind) {
        let record = MoveRecord::new(seat, kind, self.turn_number, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }

    // === Invariants ===

    /// Check that board, hands, and pool partition the full tile set and
    /// that the board chain is consistent.
    pub fn verify(&self) -> Result<(), String> {
        self.board.verify()?;

        if self.status == GameStatus::NotStarted {
            return Ok(());
        }

        let mut seen: FxHashSet<TileId> = FxHashSet::default();
        let all = self
            .board
            .tiles()
            .chain(self.hands[Seat::Human].tiles())
            .chain(self.hands[Seat::Computer].tiles())
            .chain(self.pool.tiles());
        for tile in all {
            if !seen.insert(tile.id()) {
                return Err(format!("tile {} appears twice", tile.id()));
            }
        }
        if seen.len() != TILE_SET_SIZE {
            return Err(format!("{} of {} tiles accounted for", seen.len(), TILE_SET_SIZE));
        }

        Ok(())
    }
}

/// Public view of a game for the presentation layer.
///
/// Hides the computer's tiles; only their count is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board chain, left to right, in board orientation.
    pub board: Vec<Tile>,
    /// Exposed left pip.
    pub left_end: Option<Pip>,
    /// Exposed right pip.
    pub right_end: Option<Pip>,
    /// The human's tiles, in hand order.
    pub human_hand: Vec<Tile>,
    /// How many tiles the computer holds.
    pub computer_hand_size: usize,
    /// Tiles left in the boneyard.
    pub pool_size: usize,
    /// Seat holding the turn.
    pub turn: Seat,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Cumulative session scores.
    pub scores: SeatMap<u32>,
    /// Latest status message.
    pub message: String,
}

impl GameSnapshot {
    /// Capture the public part of `state`.
    #[must_use]
    pub fn capture(state: &GameState, scores: &SeatMap<u32>, message: &str) -> Self {
        Self {
            board: state.board.tiles().copied().collect(),
            left_end: state.board.left_end(),
            right_end: state.board.right_end(),
            human_hand: state.hand(Seat::Human).tiles().to_vec(),
            computer_hand_size: state.hand(Seat::Computer).len(),
            pool_size: state.pool.len(),
            turn: state.turn,
            status: state.status,
            scores: scores.clone(),
            message: message.to_string(),
        }
    }
}
