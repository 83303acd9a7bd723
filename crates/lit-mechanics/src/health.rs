//! Clamped health with a cached danger flag and health bar.
//!
//! A [`Health`] value is written only through [`Health::set`], which clamps
//! the stored value into `0..=initial` and recomputes the derived state in
//! the same step. Reads never recompute anything.

use serde_json::Value;

use crate::error::{DuelError, DuelResult};

/// Lowest accepted initial health.
pub const MIN_INITIAL_HEALTH: i64 = 100;
/// Highest accepted initial health.
pub const MAX_INITIAL_HEALTH: i64 = 10_000;
/// Health used when none is given.
pub const DEFAULT_HEALTH: i64 = 100;
/// Percentage of initial health at or below which an agent is in danger.
pub const DANGER_PERCENT: i64 = 35;
/// Glyph count of a full health bar.
pub const BAR_WIDTH: i64 = 50;
/// Glyph used to draw the health bar.
pub const BAR_GLYPH: char = '.';

/// One agent's health track.
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    initial: i64,
    current: i64,
    danger: bool,
    bar: String,
}

impl Health {
    /// Create a full health track, validating the initial value.
    pub fn new(initial: i64) -> DuelResult<Self> {
        if !(MIN_INITIAL_HEALTH..=MAX_INITIAL_HEALTH).contains(&initial) {
            return Err(DuelError::InvalidConfiguration(initial));
        }
        let mut health = Self {
            initial,
            current: initial,
            danger: false,
            bar: String::new(),
        };
        health.set(initial);
        Ok(health)
    }

    /// Create a health track from an untyped JSON value.
    ///
    /// Anything other than a JSON integer is a type mismatch.
    pub fn from_json(value: &Value) -> DuelResult<Self> {
        let initial = value
            .as_i64()
            .ok_or_else(|| DuelError::HealthNotInteger(value.to_string()))?;
        Self::new(initial)
    }

    /// Store `value` clamped into `0..=initial` and recompute the danger flag
    /// and health bar. Returns the stored value.
    pub fn set(&mut self, value: i64) -> i64 {
        self.current = value.clamp(0, self.initial);
        // 0.35 * initial, kept exact in integers
        self.danger = self.current * 100 <= self.initial * DANGER_PERCENT;
        let len = BAR_WIDTH * self.current / self.initial;
        self.bar = std::iter::repeat_n(BAR_GLYPH, len as usize).collect();
        self.current
    }

    /// Like [`Health::set`], but rejects values that are not whole numbers.
    pub fn try_set(&mut self, value: f64) -> DuelResult<i64> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DuelError::InvalidValue(value.to_string()));
        }
        // saturating cast; anything past i64 clamps to a bound anyway
        Ok(self.set(value as i64))
    }

    /// Current health.
    pub fn get(&self) -> i64 {
        self.current
    }

    /// Health the track was created with.
    pub fn initial(&self) -> i64 {
        self.initial
    }

    /// True when current health is at or below 35% of initial health.
    pub fn is_in_danger(&self) -> bool {
        self.danger
    }

    /// The rendered health bar, at most [`BAR_WIDTH`] glyphs long.
    pub fn bar(&self) -> &str {
        &self.bar
    }

    /// Returns true once health has reached zero.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.initial)
    }
}

/// Parse an initial health value from text, as typed on a command line.
pub fn parse_initial_health(s: &str) -> DuelResult<i64> {
    let value = s
        .trim()
        .parse::<i64>()
        .map_err(|_| DuelError::HealthNotInteger(format!("{s:?}")))?;
    Health::new(value)?;
    Ok(value)
}
