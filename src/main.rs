use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use lexicon_quiz::{Game, GameError, RoundConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the term/definition bank from
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Length of a round in seconds
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    time: u64,

    /// Pause after each answer before the next question, in milliseconds
    #[arg(long, default_value_t = 500)]
    reveal_ms: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let config = RoundConfig {
        duration: Duration::from_secs(args.time),
        reveal_delay: Duration::from_millis(args.reveal_ms),
    };

    let game = match args.bank {
        Some(path) => Game::from_json(path, config)?,
        None => Game::with_default_bank(config)?,
    };
    game.run()
}
