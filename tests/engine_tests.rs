//! Engine integration tests.
//!
//! These drive whole games through `GameEngine` the way a front end does:
//! send an intent, then redeem whatever computer step comes back.

use rust_domino::core::{create_tile_set, GameState, MoveKind, TileId, TILE_SET_SIZE};
use rust_domino::rules::{hand_score, is_blocked};
use rust_domino::{
    Board, ComputerOutcome, DominoConfig, DominoError, GameEngine, GameResult, GameStatus, Hand,
    Pool, ScheduledTurn, Seat, SeatMap, Side, StalematePolicy, Tile, WinReason,
};
use std::collections::HashSet;

// =============================================================================
// Helpers
// =============================================================================

fn config(seed: u64) -> DominoConfig {
    DominoConfig::default().with_seed(seed).with_computer_delay_ms(0)
}

/// One step of a simple human: play the first playable tile, else draw.
/// Returns false once nothing is left to do.
fn step(engine: &mut GameEngine) -> bool {
    if !engine.state().status.is_in_progress() {
        return false;
    }
    match engine.state().turn {
        Seat::Human => {
            let playable = engine.state().hand(Seat::Human).playable(&engine.state().board);
            match playable.first() {
                Some(tile) => {
                    engine.attempt_human_play(tile.id()).unwrap();
                }
                None => {
                    engine.attempt_human_draw().unwrap();
                }
            }
        }
        Seat::Computer => {
            let outcome = engine.run_pending().expect("computer turn must be scheduled");
            assert_ne!(outcome, ComputerOutcome::Stale);
        }
    }
    true
}

/// Play until the game ends or `max_steps` run out.
fn play_out(engine: &mut GameEngine, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && step(engine) {
        steps += 1;
        assert_eq!(engine.state().verify(), Ok(()));
    }
    steps
}

fn ended(engine: &GameEngine) -> GameResult {
    match engine.state().status {
        GameStatus::Ended(result) => result,
        other => panic!("expected a finished game, got {:?}", other),
    }
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_deal_partitions_tile_set() {
    let mut engine = GameEngine::new(config(42)).unwrap();
    engine.start_new_game();
    let state = engine.state();

    assert_eq!(state.hand(Seat::Human).len(), 7);
    assert_eq!(state.hand(Seat::Computer).len(), 7);
    assert_eq!(state.pool.len(), 14);
    assert!(state.board.is_empty());

    let ids: HashSet<TileId> = state
        .hand(Seat::Human)
        .tiles()
        .iter()
        .chain(state.hand(Seat::Computer).tiles())
        .chain(state.pool.tiles())
        .map(|t| t.id())
        .collect();
    assert_eq!(ids.len(), TILE_SET_SIZE);

    let full: HashSet<TileId> = create_tile_set().iter().map(|t| t.id()).collect();
    assert_eq!(ids, full);
}

#[test]
fn test_consecutive_games_deal_differently() {
    let mut engine = GameEngine::new(config(42)).unwrap();
    let first = engine.start_new_game();
    let second = engine.start_new_game();

    assert_eq!(engine.games_started(), 2);
    assert_ne!(first.human_hand, second.human_hand);

    // Game n of a seeded session uses seed + n
    let mut replay = GameEngine::new(config(43)).unwrap();
    assert_eq!(replay.start_new_game().human_hand, second.human_hand);
}

#[test]
fn test_opening_play_sets_both_ends() {
    let mut engine = GameEngine::new(config(9)).unwrap();
    let snapshot = engine.start_new_game();
    let tile = snapshot.human_hand[3];

    let outcome = engine.attempt_human_play(tile.id()).unwrap();

    assert_eq!(outcome.tile, tile);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.board, vec![tile]);
    assert_eq!(snapshot.left_end, Some(tile.left));
    assert_eq!(snapshot.right_end, Some(tile.right));
    assert_eq!(snapshot.human_hand.len(), 6);
    assert_eq!(snapshot.turn, Seat::Computer);
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_play_falls_through_to_right_end() {
    // Board 3..5; (5,2) misses the left end and goes on the right as-is
    let pool = Pool::from_tiles(Vec::new());
    let hands = SeatMap::new(|seat| match seat {
        Seat::Human => [Tile::new(5, 2)].into_iter().collect::<Hand>(),
        Seat::Computer => Hand::new(),
    });
    let mut state = GameState::new(pool, hands, Seat::Human);
    state.board.place(Tile::new(3, 5), Side::Left).unwrap();

    assert!(!state.board.can_place(Tile::new(5, 2), Side::Left));
    let placed = state.apply_play(Seat::Human, Tile::new(5, 2).id(), Side::Right).unwrap();

    assert_eq!(placed, Tile::new(5, 2));
    assert_eq!(state.board.ends(), Some((3, 2)));
    assert!(state.hand(Seat::Human).is_empty());
}

#[test]
fn test_left_play_flips_to_match() {
    let mut board = Board::new();
    board.place(Tile::new(3, 5), Side::Left).unwrap();

    // (3,1) must be flipped to (1,3) to touch the 3
    let placed = board.place(Tile::new(3, 1), Side::Left).unwrap();

    assert_eq!(placed, Tile::new(1, 3));
    assert_eq!(board.ends(), Some((1, 5)));
    assert_eq!(board.to_string(), "[1|3][3|5]");
}

#[test]
fn test_rejected_intents_change_nothing() {
    let mut engine = GameEngine::new(config(21)).unwrap();
    engine.start_new_game();
    let opening = engine.state().hand(Seat::Human).tiles()[0];
    engine.attempt_human_play(opening.id()).unwrap();
    engine.run_pending().unwrap();

    // Out of turn: try everything while the computer is up
    if engine.state().turn == Seat::Computer {
        let before = engine.state().clone();
        let tile = engine.state().hand(Seat::Human).tiles()[0];
        assert_eq!(
            engine.attempt_human_play(tile.id()).unwrap_err(),
            DominoError::OutOfTurn(Seat::Human)
        );
        assert_eq!(engine.state(), &before);
        engine.run_pending().unwrap();
    }

    // Tile the human does not hold
    if engine.state().turn == Seat::Human && engine.state().status.is_in_progress() {
        let before = engine.state().clone();
        let foreign = engine.state().hand(Seat::Computer).tiles()[0];
        let err = engine.attempt_human_play(foreign.id()).unwrap_err();
        assert!(matches!(err, DominoError::InvalidMove(_)));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.message(), err.to_string());
    }
}

#[test]
fn test_unplaceable_tile_rejected() {
    // Find a dealt position where the human holds a tile that fits nowhere
    for seed in 0..50 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();
        let opening = engine.state().hand(Seat::Human).tiles()[0];
        engine.attempt_human_play(opening.id()).unwrap();
        engine.run_pending().unwrap();

        let state = engine.state();
        if state.turn != Seat::Human || !state.status.is_in_progress() {
            continue;
        }
        let Some(stuck) = state
            .hand(Seat::Human)
            .tiles()
            .iter()
            .copied()
            .find(|t| !state.board.fits_anywhere(*t))
        else {
            continue;
        };

        let before = state.clone();
        let err = engine.attempt_human_play(stuck.id()).unwrap_err();
        assert!(matches!(err, DominoError::InvalidMove(_)));
        assert_eq!(engine.state(), &before);
        return;
    }
    panic!("no seed produced an unplaceable tile");
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_from_empty_pool_rejected() {
    for seed in 0..100 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();

        while engine.state().status.is_in_progress() {
            let state = engine.state();
            if state.turn == Seat::Human && state.pool.is_empty() {
                let before = state.clone();
                assert_eq!(engine.attempt_human_draw().unwrap_err(), DominoError::EmptyPool);
                assert_eq!(engine.state(), &before);
                assert_eq!(engine.message(), "No tiles left to draw");
                return;
            }
            step(&mut engine);
        }
    }
    panic!("no seed reached an empty boneyard on the human's turn");
}

#[test]
fn test_intents_rejected_after_game_over() {
    let mut engine = GameEngine::new(config(12)).unwrap();
    engine.start_new_game();
    play_out(&mut engine, 1_000);
    ended(&engine);

    let before = engine.state().clone();
    assert_eq!(engine.attempt_human_draw().unwrap_err(), DominoError::NotInProgress);
    if let Some(tile) = engine.state().hand(Seat::Human).tiles().first().copied() {
        assert_eq!(
            engine.attempt_human_play(tile.id()).unwrap_err(),
            DominoError::NotInProgress
        );
    }
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_draw_without_play_hands_turn_over() {
    for seed in 0..50 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();
        let opening = engine.state().hand(Seat::Human).tiles()[0];
        engine.attempt_human_play(opening.id()).unwrap();
        engine.run_pending().unwrap();

        let state = engine.state();
        if state.turn != Seat::Human
            || !state.status.is_in_progress()
            || state.has_playable(Seat::Human)
        {
            continue;
        }

        let pool_before = state.pool.len();
        let outcome = engine.attempt_human_draw().unwrap();
        assert_eq!(engine.state().pool.len(), pool_before - 1);
        assert!(engine.state().hand(Seat::Human).contains(outcome.tile.id()));

        if outcome.turn_kept {
            assert_eq!(engine.state().turn, Seat::Human);
            assert!(outcome.next.is_none());
        } else {
            assert_eq!(engine.state().turn, Seat::Computer);
            assert_eq!(outcome.next, engine.pending_turn());
        }
        return;
    }
    panic!("no seed left the human without a play");
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_full_games_finish_and_score_once() {
    for seed in 0..100 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();
        play_out(&mut engine, 1_000);

        let result = ended(&engine);
        let state = engine.state();
        let total: u32 = engine.scores().iter().map(|(_, s)| *s).sum();
        assert_eq!(total, result.score_delta(), "seed {}", seed);

        match result {
            GameResult::Winner { seat, reason: WinReason::Domino, score_delta } => {
                assert!(state.hand(seat).is_empty());
                assert_eq!(score_delta, hand_score(state.hand(seat.opponent())));
            }
            GameResult::Winner { seat, reason: WinReason::Blocked, score_delta } => {
                assert!(is_blocked(&state.board, &state.pool, state.hands()));
                assert!(state.hand(seat).pip_sum() < state.hand(seat.opponent()).pip_sum());
                assert_eq!(score_delta, hand_score(state.hand(seat.opponent())));
            }
            GameResult::Draw => {
                assert!(is_blocked(&state.board, &state.pool, state.hands()));
                assert_eq!(
                    state.hand(Seat::Human).pip_sum(),
                    state.hand(Seat::Computer).pip_sum()
                );
            }
        }

        // Frozen after the end
        assert_eq!(engine.pending_turn(), None);
        assert_eq!(engine.run_pending(), None);
    }
}

#[test]
fn test_history_records_every_move() {
    let mut engine = GameEngine::new(config(77)).unwrap();
    engine.start_new_game();
    play_out(&mut engine, 1_000);

    let state = engine.state();
    let plays = state
        .history()
        .iter()
        .filter(|r| matches!(r.kind, MoveKind::Play { .. }))
        .count();
    let draws = state
        .history()
        .iter()
        .filter(|r| matches!(r.kind, MoveKind::Draw { .. }))
        .count();

    assert_eq!(plays, state.board.len());
    assert_eq!(draws, 14 - state.pool.len());
    let sequences: Vec<u32> = state.history().iter().map(|r| r.sequence).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));
}

/// Redeem tickets the way a front end does: wait out each one and run it,
/// until the engine stops scheduling. Returns the number of computer steps.
fn follow_chain(engine: &mut GameEngine, mut next: Option<ScheduledTurn>, limit: usize) -> usize {
    let mut hops = 0;
    while let Some(turn) = next {
        assert!(hops < limit, "computer steps never handed control back");
        let outcome = engine.resume_computer(turn.ticket);
        assert_ne!(outcome, ComputerOutcome::Stale);
        next = outcome.next();
        hops += 1;
    }
    hops
}

#[test]
fn test_keep_passing_hands_control_back_when_stuck() {
    let mut checked = 0;
    for seed in 0..200 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();
        play_out(&mut engine, 1_000);
        if !matches!(ended(&engine), GameResult::Winner { reason: WinReason::Blocked, .. } | GameResult::Draw) {
            continue;
        }

        // Same deal and same moves, but stuck seats keep passing
        let mut passing =
            GameEngine::new(config(seed).with_stalemate(StalematePolicy::KeepPassing)).unwrap();
        passing.start_new_game();

        let mut intents = 0;
        loop {
            assert!(intents < 200, "seed {} never settled", seed);
            assert_eq!(passing.state().turn, Seat::Human);
            let state = passing.state();
            let playable = state.hand(Seat::Human).playable(&state.board).first().copied();
            let next = if let Some(tile) = playable {
                passing.attempt_human_play(tile.id()).unwrap().next
            } else if !state.pool.is_empty() {
                passing.attempt_human_draw().unwrap().next
            } else {
                break;
            };
            follow_chain(&mut passing, next, 1_000);
            intents += 1;
        }

        // Parked on the human: nothing scheduled, nothing legal, game open
        let state = passing.state();
        assert!(state.status.is_in_progress());
        assert!(state.consecutive_passes() >= 2);
        assert!(is_blocked(&state.board, &state.pool, state.hands()));
        assert_eq!(passing.pending_turn(), None);
        assert!(passing.message().contains("Both players are stuck"));

        let before = state.clone();
        assert_eq!(passing.attempt_human_draw().unwrap_err(), DominoError::EmptyPool);
        assert_eq!(passing.state(), &before);

        // A new game is still reachable
        passing.start_new_game();
        assert_eq!(passing.state().consecutive_passes(), 0);
        checked += 1;
    }
    assert!(checked > 0, "no seed produced a blocked game");
}

#[test]
fn test_human_domino_credits_computer_pips() {
    // One tile each: the human opens and goes out immediately
    let mut engine = GameEngine::new(config(3).with_hand_size(1)).unwrap();
    let snapshot = engine.start_new_game();
    let computer_pips = engine.state().hand(Seat::Computer).pip_sum();

    let outcome = engine.attempt_human_play(snapshot.human_hand[0].id()).unwrap();

    let expected = GameResult::Winner {
        seat: Seat::Human,
        reason: WinReason::Domino,
        score_delta: computer_pips,
    };
    assert_eq!(outcome.ended, Some(expected));
    assert_eq!(outcome.next, None);
    assert_eq!(engine.scores()[Seat::Human], computer_pips);
    assert_eq!(engine.scores()[Seat::Computer], 0);
    assert!(engine.message().contains("Human wins"));

    // Scores carry into the next game
    engine.start_new_game();
    assert_eq!(engine.scores()[Seat::Human], computer_pips);
}

// =============================================================================
// Computer turns
// =============================================================================

#[test]
fn test_computer_draw_reschedules() {
    for seed in 0..100 {
        let mut engine = GameEngine::new(config(seed)).unwrap();
        engine.start_new_game();

        while engine.state().status.is_in_progress() {
            if engine.state().turn == Seat::Human {
                step(&mut engine);
                continue;
            }
            let hand_before = engine.state().hand(Seat::Computer).len();
            let outcome = engine.run_pending().unwrap();
            if let ComputerOutcome::Drew { next, message } = outcome {
                assert_eq!(engine.state().hand(Seat::Computer).len(), hand_before + 1);
                assert_eq!(engine.state().turn, Seat::Computer);
                assert_eq!(engine.pending_turn(), Some(next));
                assert_eq!(message, "The computer drew a tile.");
                return;
            }
        }
    }
    panic!("the computer never had to draw");
}

#[test]
fn test_stale_ticket_ignored_after_new_game() {
    let mut engine = GameEngine::new(config(5)).unwrap();
    let snapshot = engine.start_new_game();
    let outcome = engine.attempt_human_play(snapshot.human_hand[0].id()).unwrap();
    let stale = outcome.next.unwrap();

    let fresh = engine.start_new_game();
    assert_eq!(engine.resume_computer(stale.ticket), ComputerOutcome::Stale);
    assert_eq!(engine.snapshot().board, fresh.board);
    assert_eq!(engine.snapshot().human_hand, fresh.human_hand);
}

// =============================================================================
// Snapshot
// =============================================================================

#[test]
fn test_snapshot_hides_computer_hand() {
    let mut engine = GameEngine::new(config(8)).unwrap();
    engine.start_new_game();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.computer_hand_size, 7);

    let json = serde_json::to_value(&snapshot).unwrap();
    let text = json.to_string();
    assert!(json.get("computer_hand").is_none());
    assert!(text.contains("computer_hand_size"));

    let restored: rust_domino::GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(restored, snapshot);
}
