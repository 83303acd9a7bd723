//! Game rules for the Light IT duel.
//!
//! A player and a computer opponent trade randomized damage and heal events
//! until one of them runs out of health. This crate holds the health track,
//! both agent kinds, and the turn and win logic. It performs no I/O; a driver
//! such as `lit-cli` advances the match and renders its state.

pub mod agent;
pub mod config;
pub mod duel;
pub mod error;
pub mod event;
pub mod health;

pub use agent::{AgentId, AgentKind, Combatant, Computer, Human, validate_name};
pub use config::{AgentSpec, MatchConfig};
pub use duel::{Match, MatchStatus};
pub use error::{DuelError, DuelResult};
pub use event::{ActionEvent, ActionKind, Side, TurnRecord};
pub use health::{Health, parse_initial_health};
