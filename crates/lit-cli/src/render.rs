//! Status lines for the game screen.

use colored::Colorize;

use lit_mechanics::{ActionEvent, Combatant, Match};

const SEPARATOR: &str = "----------------------------------------------------------";

/// The full status block shown after a turn.
pub fn status_block(event: &ActionEvent, duel: &Match) -> String {
    let mut lines = vec![event.to_string(), SEPARATOR.to_string()];
    lines.extend(agent_lines(duel.computer()));
    lines.extend(agent_lines(duel.gamer()));
    lines.push(SEPARATOR.to_string());
    lines.join("\n")
}

/// Name and health on one line, the bar on the next.
fn agent_lines(agent: &dyn Combatant) -> [String; 2] {
    let health = agent.health();
    let bar = if health.is_in_danger() {
        health.bar().red().to_string()
    } else {
        health.bar().green().to_string()
    };
    [format!("{} health: {}", agent.describe(), health.get()), bar]
}

/// The closing line naming the winner.
pub fn winner_line(name: &str) -> String {
    format!("{name} won!").bold().to_string()
}
