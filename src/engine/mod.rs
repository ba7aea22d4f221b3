//! Session driver: intents in, outcomes and snapshots out.
//!
//! - `GameEngine`: owns the game, the scores, and the status message
//! - `TurnScheduler`: hands out tickets for delayed computer steps
//! - Outcome types returned to the presentation layer

pub mod game;
pub mod outcome;
pub mod schedule;

pub use game::GameEngine;
pub use outcome::{ComputerOutcome, DrawOutcome, PlayOutcome};
pub use schedule::{ScheduledTurn, TurnScheduler, TurnTicket};
