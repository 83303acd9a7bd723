//! Action kinds and the events they produce.

use std::ops::RangeInclusive;

use crate::agent::AgentId;

/// One of the three action categories a turn can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Regular damage, 18 to 25 points.
    Damage,
    /// Wide-spread damage, 10 to 35 points.
    LargeDamage,
    /// Healing, 18 to 25 points.
    Heal,
}

impl ActionKind {
    /// All categories, in selection order.
    pub const ALL: [ActionKind; 3] = [Self::Damage, Self::LargeDamage, Self::Heal];

    /// The closed range the magnitude is drawn from.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Self::Damage | Self::Heal => 18..=25,
            Self::LargeDamage => 10..=35,
        }
    }

    /// Signed health change for a drawn magnitude.
    pub fn delta(self, amount: i64) -> i64 {
        match self {
            Self::Heal => amount,
            Self::Damage | Self::LargeDamage => -amount,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = self.range();
        let verb = match self {
            Self::Heal => "healed",
            Self::Damage | Self::LargeDamage => "damaged",
        };
        write!(f, "{verb} ({}-{} diapason)", range.start(), range.end())
    }
}

/// Which seat of a match an agent occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The computer opponent.
    Computer,
    /// The player.
    Gamer,
}

/// What an agent's action did to its own health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    /// Identity of the acting agent.
    pub actor: AgentId,
    /// Display name of the acting agent.
    pub actor_name: String,
    /// The action that was actually applied.
    pub kind: ActionKind,
    /// Drawn magnitude, always positive.
    pub amount: i64,
    /// Health before the action.
    pub before: i64,
    /// Health after clamping.
    pub after: i64,
}

impl std::fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.kind == ActionKind::Heal { '+' } else { '-' };
        write!(f, "{} {}: {sign}{}", self.actor_name, self.kind, self.amount)
    }
}

/// A single resolved turn of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Turn number (1-based).
    pub turn: u32,
    /// The seat that acted.
    pub side: Side,
    /// The category the turn picked. May differ from `event.kind` when the
    /// computer converts damage into a heal.
    pub action: ActionKind,
    /// What happened.
    pub event: ActionEvent,
}
