//! Deferred computer turns.
//!
//! The engine never sleeps. When the computer is due to act, it hands the
//! caller a `ScheduledTurn`: a `TurnTicket` plus the delay to wait before
//! redeeming it with `GameEngine::resume_computer`. Only the most recently
//! issued ticket is live; starting a new game or cancelling revokes it, so a
//! late continuation cannot touch a newer game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token for one pending computer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTicket {
    /// Game the ticket was issued in (counts from 1).
    pub game: u64,
    /// Issue order across the engine's lifetime.
    pub id: u64,
}

/// A computer step the caller must run after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTurn {
    /// Ticket to pass back to `resume_computer`.
    pub ticket: TurnTicket,
    /// How long to wait first.
    pub delay: Duration,
}

/// Issues tickets and tracks the live one.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    next_id: u64,
    pending: Option<TurnTicket>,
}

impl TurnScheduler {
    /// Create a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket for `game`, replacing any pending one.
    pub fn schedule(&mut self, game: u64, delay: Duration) -> ScheduledTurn {
        self.next_id += 1;
        let ticket = TurnTicket {
            game,
            id: self.next_id,
        };
        self.pending = Some(ticket);
        ScheduledTurn { ticket, delay }
    }

    /// Redeem `ticket`, clearing it. Returns false for a stale or unknown
    /// ticket and leaves the live one in place.
    pub fn redeem(&mut self, ticket: TurnTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Revoke the pending ticket, if any.
    pub fn cancel(&mut self) -> Option<TurnTicket> {
        self.pending.take()
    }

    /// The live ticket, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TurnTicket> {
        self.pending
    }
}
