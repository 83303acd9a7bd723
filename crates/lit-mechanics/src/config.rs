//! Configuration for a match.

use serde_json::{Map, Value};

use crate::agent::COMPUTER_NAME;
use crate::error::{DuelError, DuelResult};
use crate::health::{DEFAULT_HEALTH, Health};

/// Name and initial health of one agent, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSpec {
    /// Display name; `None` when the source did not give one.
    pub name: Option<String>,
    /// Initial health.
    pub health: i64,
}

impl AgentSpec {
    /// Create a spec with the default health.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            health: DEFAULT_HEALTH,
        }
    }

    /// Create a spec with no name and the default health.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            health: DEFAULT_HEALTH,
        }
    }

    /// The configured name, or `fallback` when none was given.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }

    /// Read a spec from a JSON object, falling back to `defaults` for
    /// missing fields.
    pub fn from_json(value: &Value, defaults: &AgentSpec) -> DuelResult<Self> {
        let obj = as_object(value, "agent")?;
        let name = match obj.get("name") {
            None => defaults.name.clone(),
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => return Err(DuelError::NameNotText(other.to_string())),
        };
        let health = match obj.get("health") {
            None => defaults.health,
            Some(v) => Health::from_json(v)?.initial(),
        };
        Ok(Self { name, health })
    }
}

/// Setup for a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// The player.
    pub gamer: AgentSpec,
    /// The computer opponent.
    pub computer: AgentSpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gamer: AgentSpec::unnamed(),
            computer: AgentSpec::new(COMPUTER_NAME),
        }
    }
}

impl MatchConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the player's name.
    pub fn with_gamer_name(mut self, name: impl Into<String>) -> Self {
        self.gamer.name = Some(name.into());
        self
    }

    /// Set the initial health of both agents.
    pub fn with_health(mut self, health: i64) -> Self {
        self.gamer.health = health;
        self.computer.health = health;
        self
    }

    /// Parse a config from JSON text.
    ///
    /// ```json
    /// { "seed": 7, "gamer": { "name": "Ada", "health": 500 }, "computer": { "health": 500 } }
    /// ```
    ///
    /// Every field is optional. Field types are checked individually so a
    /// wrongly typed name or health reports the matching error.
    pub fn from_json(text: &str) -> DuelResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DuelError::MalformedConfig(e.to_string()))?;
        let obj = as_object(&value, "config")?;
        let defaults = Self::default();

        let seed = match obj.get("seed") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or_else(|| {
                DuelError::MalformedConfig(format!("seed must be a non-negative integer, got {v}"))
            })?),
        };
        let gamer = match obj.get("gamer") {
            None => defaults.gamer,
            Some(v) => AgentSpec::from_json(v, &defaults.gamer)?,
        };
        let computer = match obj.get("computer") {
            None => defaults.computer,
            Some(v) => AgentSpec::from_json(v, &defaults.computer)?,
        };

        Ok(Self {
            seed,
            gamer,
            computer,
        })
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> DuelResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DuelError::MalformedConfig(format!("{what} must be an object, got {value}")))
}
