//! CLI driver for the Light IT duel.

mod play;
mod prompt;
mod render;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lit",
    about = "Light IT: a turn-based duel against the computer",
    version
)]
struct Cli {
    /// Your name (1-20 characters); prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,

    /// Initial health for both fighters (100-10000)
    #[arg(long, value_parser = parse_health)]
    health: Option<i64>,

    /// RNG seed for a reproducible match
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON match config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play every turn without waiting for ENTER or clearing the screen
    #[arg(long)]
    auto: bool,

    /// Stop an automatic match after this many turns
    #[arg(long, default_value = "10000")]
    max_turns: u32,
}

fn parse_health(s: &str) -> Result<i64, String> {
    lit_mechanics::parse_initial_health(s).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = play::Options {
        name: cli.name,
        health: cli.health,
        seed: cli.seed,
        config: cli.config,
        auto: cli.auto,
        max_turns: cli.max_turns,
    };

    if let Err(e) = play::run(options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
