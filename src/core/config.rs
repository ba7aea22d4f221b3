//! Game configuration.
//!
//! `DominoConfig` gathers the few knobs a game has: hand size, the delay
//! before the computer acts, the shuffle seed, who opens, and how a mutual
//! stalemate is handled. Defaults reproduce the classic two-player game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::DominoError;
use super::player::Seat;
use super::tile::TILE_SET_SIZE;

/// What happens when both seats pass in a row with an empty boneyard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StalematePolicy {
    /// End the game as blocked; the lower hand pip sum wins.
    #[default]
    Block,
    /// Leave the game open; once both seats have passed, the turn rests
    /// with the human until a new game starts.
    KeepPassing,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoConfig {
    /// Tiles dealt to each seat (default: 7).
    pub hand_size: usize,

    /// Delay before each computer step, in milliseconds (default: 1500).
    pub computer_delay_ms: u64,

    /// Shuffle seed. `None` seeds every game from OS entropy.
    /// With a seed, the n-th game of a session (from 0) uses `seed + n`.
    pub seed: Option<u64>,

    /// Who places the first tile (default: human).
    pub first_player: Seat,

    /// Mutual stalemate handling (default: block).
    pub stalemate: StalematePolicy,
}

impl Default for DominoConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            computer_delay_ms: 1500,
            seed: None,
            first_player: Seat::Human,
            stalemate: StalematePolicy::Block,
        }
    }
}

impl DominoConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the computer delay in milliseconds.
    #[must_use]
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opening seat.
    #[must_use]
    pub fn with_first_player(mut self, seat: Seat) -> Self {
        self.first_player = seat;
        self
    }

    /// Set the stalemate policy.
    #[must_use]
    pub fn with_stalemate(mut self, policy: StalematePolicy) -> Self {
        self.stalemate = policy;
        self
    }

    /// The computer delay as a `Duration`.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Check that both hands can be dealt from one set.
    pub fn validate(&self) -> Result<(), DominoError> {
        if self.hand_size == 0 {
            return Err(DominoError::Config("hand size must be at least 1".into()));
        }
        if self.hand_size * 2 > TILE_SET_SIZE {
            return Err(DominoError::Config(format!(
                "hand size {} needs {} tiles, the set has {}",
                self.hand_size,
                self.hand_size * 2,
                TILE_SET_SIZE
            )));
        }
        Ok(())
    }
}
