//! Plays the capture-greedy selector against itself and prints the game.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --seed 7 --max-plies 200`
//! `RUST_LOG=plum_rules=trace cargo run --bin self_play`

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use plum_rules::{GameState, Preferences};

#[derive(Parser, Debug)]
#[command(about = "Self-play driver for the plum rules engine", version)]
struct CmdArgs {
    /// Seed for the move selector; a fresh seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies even if the game is still running.
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Replay the finished game move by move and verify every position.
    #[arg(long)]
    verify_replay: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CmdArgs::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let preferences = Preferences {
        always_promote_to_queen: true,
        ..Preferences::default()
    };
    let mut game = GameState::with_preferences(preferences, &mut rng);

    let mut recorded = vec![game.position().clone()];
    while !game.is_over() && game.timeline().len() < args.max_plies {
        game.play_opponent_move(&mut rng)?;
        recorded.push(game.position().clone());
    }

    println!("seed {seed}");
    for (number, pair) in game.notation().chunks(2).enumerate() {
        println!("{:>3}. {}", number + 1, pair.join(" "));
    }
    match game.winner() {
        Some(winner) => println!("{winner}"),
        None => println!("unfinished after {} plies", game.timeline().len()),
    }

    if args.verify_replay {
        for (index, expected) in (-1isize..).zip(&recorded) {
            game.try_set_replay_index(index)?;
            if game.position() != expected {
                bail!("replay index {index} does not reproduce the recorded position");
            }
        }
        println!("replay verified for {} positions", recorded.len());
    }
    Ok(())
}
