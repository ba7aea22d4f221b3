//! Scoring and end-of-game detection.
//!
//! The winner always scores the pips left in the loser's hand. A game ends
//! either when a seat empties its hand or, under `StalematePolicy::Block`,
//! when nobody can move; a blocked game goes to the lighter hand.

use tracing::instrument;

use super::result::{GameResult, WinReason};
use crate::core::{Seat, SeatMap};
use crate::zones::{Board, Hand, Pool};

/// Points a hand is worth to the opponent.
#[must_use]
pub fn hand_score(hand: &Hand) -> u32 {
    hand.pip_sum()
}

/// Result when `winner` has placed their last tile.
#[must_use]
pub fn domino_result(winner: Seat, hands: &SeatMap<Hand>) -> GameResult {
    GameResult::Winner {
        seat: winner,
        reason: WinReason::Domino,
        score_delta: hand_score(&hands[winner.opponent()]),
    }
}

/// Result of a blocked game.
///
/// The seat with the lower pip sum wins and scores the other hand; equal
/// sums are a draw.
#[instrument(skip(hands))]
pub fn blocked_result(hands: &SeatMap<Hand>) -> GameResult {
    let human = hand_score(&hands[Seat::Human]);
    let computer = hand_score(&hands[Seat::Computer]);

    let (seat, score_delta) = match human.cmp(&computer) {
        std::cmp::Ordering::Less => (Seat::Human, computer),
        std::cmp::Ordering::Greater => (Seat::Computer, human),
        std::cmp::Ordering::Equal => return GameResult::Draw,
    };

    GameResult::Winner {
        seat,
        reason: WinReason::Blocked,
        score_delta,
    }
}

/// Whether neither seat can ever move again.
#[must_use]
pub fn is_blocked(board: &Board, pool: &Pool, hands: &SeatMap<Hand>) -> bool {
    pool.is_empty() && hands.iter().all(|(_, hand)| !hand.has_playable(board))
}
