//! The match between the computer and the player.
//!
//! Each turn picks one of three action categories and, independently, one
//! of the two seats, for six equally likely outcomes. The chosen agent then
//! applies the action to itself.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info};

use crate::agent::{AgentKind, COMPUTER_NAME, Combatant, Computer, DEFAULT_GAMER_NAME, Human};
use crate::config::MatchConfig;
use crate::error::{DuelError, DuelResult};
use crate::event::{ActionEvent, ActionKind, Side, TurnRecord};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// Both agents still have health.
    InProgress,
    /// The player's health reached zero.
    ComputerWon,
    /// The computer's health reached zero.
    GamerWon,
}

impl MatchStatus {
    /// Returns true for either terminal status.
    pub fn is_over(self) -> bool {
        self != Self::InProgress
    }
}

/// A duel between exactly two distinct agents.
pub struct Match<R: RngCore = StdRng> {
    computer: Box<dyn Combatant>,
    gamer: Box<dyn Combatant>,
    rng: R,
    turn: u32,
    log: Vec<TurnRecord>,
}

impl<R: RngCore> std::fmt::Debug for Match<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("computer", &self.computer)
            .field("gamer", &self.gamer)
            .field("turn", &self.turn)
            .finish()
    }
}

impl Match<StdRng> {
    /// Create a match driven by OS entropy.
    pub fn new(computer: Box<dyn Combatant>, gamer: Box<dyn Combatant>) -> DuelResult<Self> {
        Self::with_rng(computer, gamer, StdRng::from_os_rng())
    }

    /// Create a reproducible match from a seed.
    pub fn seeded(
        computer: Box<dyn Combatant>,
        gamer: Box<dyn Combatant>,
        seed: u64,
    ) -> DuelResult<Self> {
        Self::with_rng(computer, gamer, StdRng::seed_from_u64(seed))
    }

    /// Build both agents from a config and create the match.
    pub fn from_config(config: &MatchConfig) -> DuelResult<Self> {
        let computer = Computer::with_health(
            config.computer.name_or(COMPUTER_NAME),
            config.computer.health,
        )?;
        let gamer = Human::with_health(
            config.gamer.name_or(DEFAULT_GAMER_NAME),
            config.gamer.health,
        )?;
        match config.seed {
            Some(seed) => Self::seeded(Box::new(computer), Box::new(gamer), seed),
            None => Self::new(Box::new(computer), Box::new(gamer)),
        }
    }
}

impl<R: RngCore> Match<R> {
    /// Create a match with a caller-supplied random source.
    ///
    /// Fails if the computer seat holds anything but a computer agent, or if
    /// both seats hold the same agent.
    pub fn with_rng(
        computer: Box<dyn Combatant>,
        gamer: Box<dyn Combatant>,
        rng: R,
    ) -> DuelResult<Self> {
        if computer.kind() != AgentKind::Computer {
            return Err(DuelError::InvalidParticipants(format!(
                "computer seat needs a computer agent, got {} '{}'",
                computer.kind(),
                computer.name()
            )));
        }
        if computer.id() == gamer.id() {
            return Err(DuelError::InvalidParticipants(format!(
                "'{}' cannot fight itself",
                computer.name()
            )));
        }
        Ok(Self {
            computer,
            gamer,
            rng,
            turn: 0,
            log: Vec::new(),
        })
    }

    /// Resolve one turn and return what happened.
    pub fn advance_turn(&mut self) -> ActionEvent {
        let action = ActionKind::ALL[self.rng.random_range(0..ActionKind::ALL.len())];
        let side = if self.rng.random_bool(0.5) {
            Side::Computer
        } else {
            Side::Gamer
        };
        let agent = match side {
            Side::Computer => &mut self.computer,
            Side::Gamer => &mut self.gamer,
        };
        let event = match action {
            ActionKind::Damage => agent.apply_damage(&mut self.rng),
            ActionKind::LargeDamage => agent.apply_large_damage(&mut self.rng),
            ActionKind::Heal => agent.apply_heal(&mut self.rng),
        };

        self.turn += 1;
        debug!(turn = self.turn, ?side, ?action, "turn resolved");
        self.log.push(TurnRecord {
            turn: self.turn,
            side,
            action,
            event: event.clone(),
        });

        let status = self.status();
        if status.is_over() {
            info!(?status, turns = self.turn, "match over");
        }
        event
    }

    /// Advance until the match is over or `max_turns` turns have been played
    /// in total.
    pub fn run_to_completion(&mut self, max_turns: u32) -> MatchStatus {
        while !self.is_over() && self.turn < max_turns {
            self.advance_turn();
        }
        self.status()
    }

    /// Current status. The computer is checked first, so a double knockout
    /// counts as a win for the player.
    pub fn status(&self) -> MatchStatus {
        if self.computer.health().is_depleted() {
            MatchStatus::GamerWon
        } else if self.gamer.health().is_depleted() {
            MatchStatus::ComputerWon
        } else {
            MatchStatus::InProgress
        }
    }

    /// Returns true once either agent's health reached zero.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// The winning agent, if the match is over.
    pub fn winner(&self) -> Option<&dyn Combatant> {
        match self.status() {
            MatchStatus::InProgress => None,
            MatchStatus::ComputerWon => Some(self.computer.as_ref()),
            MatchStatus::GamerWon => Some(self.gamer.as_ref()),
        }
    }

    /// The computer agent.
    pub fn computer(&self) -> &dyn Combatant {
        self.computer.as_ref()
    }

    /// Mutable access to the computer agent.
    pub fn computer_mut(&mut self) -> &mut dyn Combatant {
        self.computer.as_mut()
    }

    /// The player agent.
    pub fn gamer(&self) -> &dyn Combatant {
        self.gamer.as_ref()
    }

    /// Mutable access to the player agent.
    pub fn gamer_mut(&mut self) -> &mut dyn Combatant {
        self.gamer.as_mut()
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every resolved turn, oldest first.
    ///
    /// The log holds one record per turn and is never pruned, so it grows
    /// with the match. Drivers that run uncapped matches and only need the
    /// latest turn should use the event returned by [`Match::advance_turn`].
    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }
}
