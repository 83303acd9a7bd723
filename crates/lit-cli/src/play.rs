//! Set up a match and drive it turn by turn.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::info;

use lit_mechanics::{Match, MatchConfig};

use crate::{prompt, render};

/// Command-line choices for a single run.
pub struct Options {
    pub name: Option<String>,
    pub health: Option<i64>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub auto: bool,
    pub max_turns: u32,
}

/// Build the match and play it to the end.
pub fn run(options: Options) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let config = build_config(&options, &mut input, &mut out)?;
    let mut duel = Match::from_config(&config).map_err(|e| e.to_string())?;
    info!(gamer = duel.gamer().name(), seed = ?config.seed, "match started");

    while !duel.is_over() {
        if options.auto {
            if duel.turn() >= options.max_turns {
                return Err(format!("no winner after {} turns", options.max_turns));
            }
        } else {
            if !prompt::wait_for_step(&mut input, &mut out)? {
                return Err("input closed before the match finished".into());
            }
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))
                .map_err(|e| format!("terminal error: {e}"))?;
        }

        let event = duel.advance_turn();
        writeln!(out, "{}", render::status_block(&event, &duel))
            .map_err(|e| format!("write error: {e}"))?;
    }

    if let Some(winner) = duel.winner() {
        writeln!(out, "{}", render::winner_line(&winner.describe()))
            .map_err(|e| format!("write error: {e}"))?;
    }
    Ok(())
}

/// Merge the config file, flags, and the name prompt into one config.
fn build_config(
    options: &Options,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<MatchConfig, String> {
    let mut config = match &options.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            MatchConfig::from_json(&text).map_err(|e| e.to_string())?
        }
        None => MatchConfig::default(),
    };

    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(health) = options.health {
        config = config.with_health(health);
    }

    let name = match (&options.name, &config.gamer.name) {
        (Some(name), _) => name.trim().to_string(),
        (None, Some(name)) => name.clone(),
        (None, None) => prompt::read_name(input, out)?,
    };
    Ok(config.with_gamer_name(name))
}
