//! Terminal front end for the domino engine.
//!
//! ## Usage
//! ```bash
//! cargo run --bin domino -- --seed 42
//! RUST_LOG=rust_domino=debug cargo run --bin domino
//! ```
//!
//! Commands at the prompt: `n` (new game), `p <n>` (play the n-th tile of
//! your hand, counting from 1), `d` (draw), `s` (show the table), `q` (quit).

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use rust_domino::{
    ComputerOutcome, DominoConfig, GameEngine, GameSnapshot, GameStatus, ScheduledTurn, Seat, StalematePolicy,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Play dominoes against the computer
#[derive(Parser, Debug)]
#[command(name = "domino")]
#[command(about = "Two-player dominoes in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer step, in milliseconds
    #[arg(long, default_value = "1500")]
    delay_ms: u64,

    /// Let the computer open each game
    #[arg(long)]
    computer_first: bool,

    /// Leave a blocked game open instead of scoring it
    #[arg(long)]
    keep_passing: bool,
}

impl Cli {
    fn config(&self) -> DominoConfig {
        let mut config = DominoConfig::default()
            .with_computer_delay_ms(self.delay_ms)
            .with_first_player(if self.computer_first { Seat::Computer } else { Seat::Human })
            .with_stalemate(if self.keep_passing {
                StalematePolicy::KeepPassing
            } else {
                StalematePolicy::Block
            });
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = GameEngine::new(cli.config()).context("invalid configuration")?;
    info!(?cli, "starting domino");

    let snapshot = engine.start_new_game();
    render(&snapshot);
    let opening = engine.pending_turn();
    run_computer(&mut engine, opening);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input")?;
        let mut words = line.split_whitespace();

        let next = match words.next() {
            Some("q") => break,
            Some("n") => {
                engine.start_new_game();
                engine.pending_turn()
            }
            Some("d") => engine.attempt_human_draw().ok().and_then(|o| o.next),
            Some("p") => {
                let hand = engine.snapshot().human_hand;
                let picked = words
                    .next()
                    .and_then(|w| w.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| hand.get(i).copied());
                match picked {
                    Some(tile) => engine.attempt_human_play(tile.id()).ok().and_then(|o| o.next),
                    None => {
                        println!("Usage: p <tile number>");
                        continue;
                    }
                }
            }
            Some("s") | None => None,
            Some(other) => {
                println!("Unknown command: {}", other);
                continue;
            }
        };

        render(&engine.snapshot());
        run_computer(&mut engine, next);
    }

    Ok(())
}

/// Wait out each scheduled computer step and run it.
fn run_computer(engine: &mut GameEngine, mut next: Option<ScheduledTurn>) {
    while let Some(turn) = next {
        thread::sleep(turn.delay);
        let outcome = engine.resume_computer(turn.ticket);
        if outcome == ComputerOutcome::Stale {
            warn!(?turn, "computer ticket went stale");
        }
        next = outcome.next();
        render(&engine.snapshot());
    }
}

fn render(snapshot: &GameSnapshot) {
    println!();
    let board: String = snapshot.board.iter().map(ToString::to_string).collect();
    println!("Board: {}", if board.is_empty() { "(empty)".to_string() } else { board });

    let hand: Vec<String> = snapshot
        .human_hand
        .iter()
        .enumerate()
        .map(|(i, tile)| format!("{}:{}", i + 1, tile))
        .collect();
    println!("Your hand: {}", hand.join(" "));
    println!(
        "Computer holds {} tiles | Boneyard: {} | Score: you {} - computer {}",
        snapshot.computer_hand_size,
        snapshot.pool_size,
        snapshot.scores[Seat::Human],
        snapshot.scores[Seat::Computer],
    );
    println!("{}", snapshot.message);

    match snapshot.status {
        GameStatus::Ended(_) => println!("Type n for a new game."),
        GameStatus::InProgress if snapshot.turn == Seat::Human => println!("Your turn."),
        _ => {}
    }
}
