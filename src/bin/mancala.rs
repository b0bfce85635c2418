//! Command-line driver: plays random Kalah games and reports the results.
//!
//! Usage: cargo run --bin mancala -- [--games 10] [--seed 42] [--delay 0]

use std::path::PathBuf;

use clap::Parser;

use mancala_engine::core::MAX_AUTOPLAY_TURNS;
use mancala_engine::{
    EngineConfig, GameResult, GameRng, KalahGame, Player, Preferences, RulesEngine,
    ThreadSleep, UniformRandom,
};

/// Play automated Kalah games
#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(about = "Play random Mancala (Kalah) games", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Random seed for the first game (later games use seed + n)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between marble placements in ms (overrides the preference file)
    #[arg(long)]
    delay: Option<u64>,

    /// Preference file to read the delay from when --delay is absent
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Only print the final tally
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let delay = match (args.delay, &args.preferences) {
        (Some(ms), _) => ms,
        (None, Some(path)) => {
            let prefs = Preferences::load(path);
            if !prefs.delay_in_range() {
                eprintln!(
                    "Warning: stored delay {}ms is outside the preferred range",
                    prefs.delay
                );
            }
            prefs.delay
        }
        (None, None) => 0,
    };

    let mut tally = [0u32; 3];

    for n in 0..args.games {
        let seed = match args.seed {
            Some(seed) => seed.wrapping_add(u64::from(n)),
            None => rand::random(),
        };
        let config = EngineConfig::default().with_seed(seed);

        let mut game = KalahGame::with_config(config, ThreadSleep);
        if !game.set_delay(delay) {
            eprintln!("Warning: delay {}ms exceeds the engine maximum, ignored", delay);
        }
        game.start();

        let mut policy = UniformRandom::new(GameRng::new(seed).for_context("cli"));
        let turns = game.play_out(&mut policy, MAX_AUTOPLAY_TURNS);

        let result = game.winner();
        match result {
            GameResult::Winner(Player::One) => tally[0] += 1,
            GameResult::Winner(Player::Two) => tally[1] += 1,
            GameResult::Tie => tally[2] += 1,
        }

        if !args.quiet {
            println!("Game {} (seed {}, {} picks)", n + 1, seed, turns);
            println!("{}", game.board());
            println!(
                "{}: {} - {}\n",
                result,
                game.p1_store().len(),
                game.p2_store().len()
            );
        }
    }

    println!(
        "Player One: {}  Player Two: {}  Ties: {}",
        tally[0], tally[1], tally[2]
    );
}
