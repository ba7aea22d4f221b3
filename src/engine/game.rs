//! The game engine: owns one session and resolves intents.

use tracing::{debug, info, instrument, trace, warn};

use super::outcome::{ComputerOutcome, DrawOutcome, PlayOutcome};
use super::schedule::{ScheduledTurn, TurnScheduler, TurnTicket};
use crate::ai::{ComputerStrategy, HighestPipStrategy};
use crate::core::{
    DominoConfig, DominoError, GameRng, GameSnapshot, GameState, Seat, SeatMap, Side, StalematePolicy,
    Tile, TileId,
};
use crate::rules::{blocked_result, domino_result, is_blocked, GameResult};
use crate::zones::Pool;

/// Game engine for one human vs. one computer.
///
/// Holds the current game, the session scores, and the latest status
/// message. Scores survive `start_new_game`; everything else is reset.
///
/// ## Usage
///
/// ```
/// use rust_domino::core::{DominoConfig, Seat};
/// use rust_domino::engine::GameEngine;
///
/// let mut engine = GameEngine::new(DominoConfig::default().with_seed(7)).unwrap();
/// let snapshot = engine.start_new_game();
/// assert_eq!(snapshot.turn, Seat::Human);
///
/// // Any tile opens an empty board
/// let tile = snapshot.human_hand[0];
/// let outcome = engine.attempt_human_play(tile.id()).unwrap();
///
/// // The computer acts once the caller redeems the ticket
/// let next = outcome.next.unwrap();
/// engine.resume_computer(next.ticket);
/// ```
pub struct GameEngine<S = HighestPipStrategy> {
    config: DominoConfig,
    strategy: S,
    state: GameState,
    scores: SeatMap<u32>,
    message: String,
    games_started: u64,
    scheduler: TurnScheduler,
}

impl GameEngine<HighestPipStrategy> {
    /// Create an engine with the default computer strategy.
    pub fn new(config: DominoConfig) -> Result<Self, DominoError> {
        Self::with_strategy(config, HighestPipStrategy)
    }
}

impl<S: ComputerStrategy> GameEngine<S> {
    /// Create an engine with a custom computer strategy.
    pub fn with_strategy(config: DominoConfig, strategy: S) -> Result<Self, DominoError> {
        config.validate()?;
        Ok(Self {
            config,
            strategy,
            state: GameState::default(),
            scores: SeatMap::with_default(),
            message: "Start a new game to play.".to_string(),
            games_started: 0,
            scheduler: TurnScheduler::new(),
        })
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &DominoConfig {
        &self.config
    }

    /// Full state, including the computer's hand.
    ///
    /// Front ends should render from `snapshot()` instead.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cumulative scores for this session.
    #[must_use]
    pub fn scores(&self) -> &SeatMap<u32> {
        &self.scores
    }

    /// Latest status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of games dealt so far.
    #[must_use]
    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    /// Public view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, &self.scores, &self.message)
    }

    /// The computer step waiting to run, if any.
    #[must_use]
    pub fn pending_turn(&self) -> Option<ScheduledTurn> {
        self.scheduler.pending().map(|ticket| ScheduledTurn {
            ticket,
            delay: self.config.computer_delay(),
        })
    }

    // === Intents ===

    /// Shuffle, deal, and start a new game.
    ///
    /// Revokes any pending computer step from the previous game. If the
    /// computer opens, its first step is left pending (see `pending_turn`).
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) -> GameSnapshot {
        self.scheduler.cancel();

        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed.wrapping_add(self.games_started)),
            None => GameRng::from_entropy(),
        };
        self.games_started += 1;

        let mut pool = Pool::shuffled(&mut rng);
        let hands = pool.deal(self.config.hand_size);
        let first = self.config.first_player;
        self.state = GameState::new(pool, hands, first);
        self.check_invariants();

        info!(game = self.games_started, seed = rng.seed(), %first, "new game dealt");
        self.say(match first {
            Seat::Human => "New game started! You go first.",
            Seat::Computer => "New game started! The computer goes first.",
        });
        self.settle_turn();

        self.snapshot()
    }

    /// Play a tile from the human's hand.
    ///
    /// Tries the left end, then the right end. A rejected play changes
    /// nothing but the status message.
    #[instrument(skip(self))]
    pub fn attempt_human_play(&mut self, id: TileId) -> Result<PlayOutcome, DominoError> {
        let result = self.human_play(id);
        if let Err(err) = &result {
            self.reject(err);
        }
        result
    }

    /// Draw a tile from the boneyard into the human's hand.
    ///
    /// The human keeps the turn if any held tile now fits; otherwise the
    /// turn passes to the computer.
    #[instrument(skip(self))]
    pub fn attempt_human_draw(&mut self) -> Result<DrawOutcome, DominoError> {
        let result = self.human_draw();
        if let Err(err) = &result {
            self.reject(err);
        }
        result
    }

    /// Run the computer step `ticket` was issued for.
    ///
    /// Revoked or already used tickets yield `ComputerOutcome::Stale` and
    /// change nothing.
    #[instrument(skip(self))]
    pub fn resume_computer(&mut self, ticket: TurnTicket) -> ComputerOutcome {
        if !self.scheduler.redeem(ticket) {
            debug!("ignoring stale computer ticket");
            return ComputerOutcome::Stale;
        }
        if !self.state.status.is_in_progress() || self.state.turn != Seat::Computer {
            warn!(turn = %self.state.turn, "live ticket without a computer turn");
            return ComputerOutcome::Stale;
        }
        self.computer_turn()
    }

    /// Run the pending computer step now, ignoring its delay.
    pub fn run_pending(&mut self) -> Option<ComputerOutcome> {
        let ticket = self.scheduler.pending()?;
        Some(self.resume_computer(ticket))
    }

    /// Revoke the pending computer step, if any.
    pub fn cancel_pending(&mut self) -> Option<TurnTicket> {
        self.scheduler.cancel()
    }

    // === Turn resolution ===

    fn human_play(&mut self, id: TileId) -> Result<PlayOutcome, DominoError> {
        self.check_turn(Seat::Human)?;

        let tile = self
            .state
            .hand(Seat::Human)
            .get(id)
            .ok_or_else(|| DominoError::invalid_move(format!("tile {} is not in your hand", id)))?;
        let side = Side::BOTH
            .into_iter()
            .find(|&side| self.state.board.can_place(tile, side))
            .ok_or_else(|| DominoError::invalid_move(format!("{} fits neither end of the board", tile)))?;

        let placed = self.state.apply_play(Seat::Human, id, side)?;
        debug!(tile = %placed, %side, "human placed tile");
        self.say("Tile placed.");

        let (ended, next) = self.finish_placement(Seat::Human);
        Ok(PlayOutcome {
            tile: placed,
            side,
            ended,
            next,
            message: self.message.clone(),
        })
    }

    fn human_draw(&mut self) -> Result<DrawOutcome, DominoError> {
        self.check_turn(Seat::Human)?;

        let tile = self.state.apply_draw(Seat::Human)?;
        debug!(%tile, pool = self.state.pool.len(), "human drew tile");
        self.check_invariants();

        let turn_kept = self.state.has_playable(Seat::Human);
        let next = if turn_kept {
            self.say(format!("You drew {}.", tile));
            None
        } else {
            self.say(format!("You drew {} and cannot play. Computer's turn.", tile));
            self.hand_over_turn()
        };

        Ok(DrawOutcome {
            tile,
            turn_kept,
            next,
            message: self.message.clone(),
        })
    }

    /// One computer step: place, draw, or pass.
    fn computer_turn(&mut self) -> ComputerOutcome {
        match self.computer_choice() {
            Some((tile, side)) => {
                let placed = match self.state.apply_play(Seat::Computer, tile.id(), side) {
                    Ok(placed) => placed,
                    Err(err) => {
                        warn!(%err, "validated computer move rejected");
                        return ComputerOutcome::Stale;
                    }
                };
                debug!(tile = %placed, %side, "computer placed tile");
                self.say(format!("The computer placed {} on the {}.", placed, side));

                let (ended, next) = self.finish_placement(Seat::Computer);
                ComputerOutcome::Placed {
                    tile: placed,
                    side,
                    ended,
                    next,
                    message: self.message.clone(),
                }
            }
            None if !self.state.pool.is_empty() => {
                // Hidden information: the drawn tile is only logged at trace level
                if let Ok(tile) = self.state.apply_draw(Seat::Computer) {
                    trace!(%tile, "computer drew tile");
                }
                self.check_invariants();
                self.say("The computer drew a tile.");
                ComputerOutcome::Drew {
                    next: self.schedule_computer(),
                    message: self.message.clone(),
                }
            }
            None => {
                self.say("The computer cannot play and the boneyard is empty.");
                let ended = self.pass(Seat::Computer);
                let next = if ended.is_none() { self.hand_over_turn() } else { None };
                ComputerOutcome::Passed {
                    ended,
                    next,
                    message: self.message.clone(),
                }
            }
        }
    }

    /// The strategy's pick, checked for legality.
    fn computer_choice(&self) -> Option<(Tile, Side)> {
        let hand = self.state.hand(Seat::Computer);
        let board = &self.state.board;

        match self.strategy.choose(hand, board) {
            Some((tile, side)) if hand.contains(tile.id()) && board.can_place(tile, side) => Some((tile, side)),
            Some((tile, side)) => {
                warn!(%tile, %side, "strategy chose an illegal move, using default");
                HighestPipStrategy.choose(hand, board)
            }
            None => {
                if hand.has_playable(board) {
                    warn!("strategy declined a playable hand, using default");
                    HighestPipStrategy.choose(hand, board)
                } else {
                    None
                }
            }
        }
    }

    // === Helpers ===

    /// After a placement: end the game on an empty hand, else switch turns.
    fn finish_placement(&mut self, seat: Seat) -> (Option<GameResult>, Option<ScheduledTurn>) {
        self.check_invariants();

        if self.state.hand(seat).is_empty() {
            let result = domino_result(seat, self.state.hands());
            self.end_game(result);
            (Some(result), None)
        } else {
            (None, self.hand_over_turn())
        }
    }

    /// Switch the turn and set up whatever the new seat must do.
    fn hand_over_turn(&mut self) -> Option<ScheduledTurn> {
        self.state.switch_turn();
        self.settle_turn()
    }

    /// Schedule the computer, or force a human pass when the human cannot
    /// move and cannot draw.
    ///
    /// Under `StalematePolicy::KeepPassing` the turn stays with the human
    /// once both seats have passed, so the pass cycle hands control back to
    /// the caller instead of scheduling the computer forever.
    fn settle_turn(&mut self) -> Option<ScheduledTurn> {
        match self.state.turn {
            Seat::Computer => Some(self.schedule_computer()),
            Seat::Human => {
                if !self.state.pool.is_empty() || self.state.has_playable(Seat::Human) {
                    return None;
                }
                self.add("You cannot play and the boneyard is empty; your turn passes.");
                if self.pass(Seat::Human).is_some() {
                    return None;
                }
                if self.state.consecutive_passes() >= 2 {
                    info!(passes = self.state.consecutive_passes(), "both seats stuck, waiting for a new game");
                    self.add("Both players are stuck. Start a new game.");
                    return None;
                }
                self.state.switch_turn();
                Some(self.schedule_computer())
            }
        }
    }

    /// Record a forced pass; ends a blocked game under `StalematePolicy::Block`.
    fn pass(&mut self, seat: Seat) -> Option<GameResult> {
        self.state.apply_pass(seat);
        debug!(%seat, passes = self.state.consecutive_passes(), "forced pass");

        if self.config.stalemate == StalematePolicy::Block && self.state.consecutive_passes() >= 2 {
            debug_assert!(is_blocked(&self.state.board, &self.state.pool, self.state.hands()));
            let result = blocked_result(self.state.hands());
            self.end_game(result);
            return Some(result);
        }
        None
    }

    fn schedule_computer(&mut self) -> ScheduledTurn {
        self.scheduler.schedule(self.games_started, self.config.computer_delay())
    }

    /// Freeze the game and credit the winner.
    fn end_game(&mut self, result: GameResult) {
        self.scheduler.cancel();
        self.state.finish(result);
        if let Some(winner) = result.winner() {
            self.scores[winner] += result.score_delta();
        }
        info!(%result, human = self.scores[Seat::Human], computer = self.scores[Seat::Computer], "game over");
        self.add(result.to_string());
    }

    fn check_turn(&self, seat: Seat) -> Result<(), DominoError> {
        if !self.state.status.is_in_progress() {
            return Err(DominoError::NotInProgress);
        }
        if self.state.turn != seat {
            return Err(DominoError::OutOfTurn(seat));
        }
        Ok(())
    }

    fn reject(&mut self, err: &DominoError) {
        debug!(%err, "intent rejected");
        self.say(err.to_string());
    }

    fn say(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    fn add(&mut self, message: impl AsRef<str>) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        self.message.push_str(message.as_ref());
    }

    fn check_invariants(&self) {
        debug_assert_eq!(self.state.verify(), Ok(()));
    }
}
