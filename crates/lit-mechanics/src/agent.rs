//! Combatants: the human player and the computer opponent.
//!
//! Both kinds share one capability set, the [`Combatant`] trait. The shared
//! actions live in the trait's default methods; [`Computer`] overrides only
//! [`Combatant::apply_damage`], healing itself instead while it is in danger.

use std::fmt;

use rand::{Rng, RngCore};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DuelError, DuelResult};
use crate::event::{ActionEvent, ActionKind};
use crate::health::{DEFAULT_HEALTH, Health};

/// Longest accepted name, counted after trimming.
pub const NAME_MAX_LEN: usize = 20;

/// Name given to the computer opponent by default.
pub const COMPUTER_NAME: &str = "Computer";

/// Name given to the player when none is configured.
pub const DEFAULT_GAMER_NAME: &str = "Player";

/// Unique identity of an agent. Clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Generate a new random agent ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which behavior an agent follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Takes every action at face value.
    Human,
    /// Heals instead of taking regular damage while in danger.
    Computer,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// Check that a name has between 1 and 20 characters once trimmed.
pub fn validate_name(name: &str) -> DuelResult<()> {
    let len = name.trim().chars().count();
    if (1..=NAME_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(DuelError::InvalidName(name.to_string()))
    }
}

/// The capability set shared by every agent.
pub trait Combatant: fmt::Debug {
    /// Identity of this agent.
    fn id(&self) -> AgentId;

    /// Display name.
    fn name(&self) -> &str;

    /// Which behavior this agent follows.
    fn kind(&self) -> AgentKind;

    /// Read access to the health track.
    fn health(&self) -> &Health;

    /// Write access to the health track.
    fn health_mut(&mut self) -> &mut Health;

    /// Take 18 to 25 points of damage.
    fn apply_damage(&mut self, rng: &mut dyn RngCore) -> ActionEvent {
        resolve(self, ActionKind::Damage, rng)
    }

    /// Take 10 to 35 points of damage.
    fn apply_large_damage(&mut self, rng: &mut dyn RngCore) -> ActionEvent {
        resolve(self, ActionKind::LargeDamage, rng)
    }

    /// Recover 18 to 25 points of health.
    fn apply_heal(&mut self, rng: &mut dyn RngCore) -> ActionEvent {
        resolve(self, ActionKind::Heal, rng)
    }

    /// Text shown for this agent in status lines.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Draw a magnitude for `kind` and apply it to the agent's health.
fn resolve<C>(agent: &mut C, kind: ActionKind, rng: &mut dyn RngCore) -> ActionEvent
where
    C: Combatant + ?Sized,
{
    let amount = rng.random_range(kind.range());
    let before = agent.health().get();
    debug!(agent = agent.name(), ?kind, amount, before, "applying action");
    let after = agent.health_mut().set(before + kind.delta(amount));
    ActionEvent {
        actor: agent.id(),
        actor_name: agent.name().to_string(),
        kind,
        amount,
        before,
        after,
    }
}

/// Identity and health shared by both agent kinds.
#[derive(Debug, Clone)]
struct Fighter {
    id: AgentId,
    name: String,
    health: Health,
}

impl Fighter {
    fn new(name: impl Into<String>, initial: i64) -> DuelResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: AgentId::new(),
            name,
            health: Health::new(initial)?,
        })
    }
}

/// The human-controlled player.
#[derive(Debug, Clone)]
pub struct Human {
    fighter: Fighter,
}

impl Human {
    /// Create a player with the default health of 100.
    pub fn new(name: impl Into<String>) -> DuelResult<Self> {
        Self::with_health(name, DEFAULT_HEALTH)
    }

    /// Create a player with a custom initial health.
    pub fn with_health(name: impl Into<String>, initial: i64) -> DuelResult<Self> {
        Ok(Self {
            fighter: Fighter::new(name, initial)?,
        })
    }
}

impl Combatant for Human {
    fn id(&self) -> AgentId {
        self.fighter.id
    }

    fn name(&self) -> &str {
        &self.fighter.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn health(&self) -> &Health {
        &self.fighter.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.fighter.health
    }
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fighter.name)
    }
}

/// The computer opponent.
#[derive(Debug, Clone)]
pub struct Computer {
    fighter: Fighter,
}

impl Computer {
    /// Create an opponent with the default health of 100.
    pub fn new(name: impl Into<String>) -> DuelResult<Self> {
        Self::with_health(name, DEFAULT_HEALTH)
    }

    /// Create an opponent with a custom initial health.
    pub fn with_health(name: impl Into<String>, initial: i64) -> DuelResult<Self> {
        Ok(Self {
            fighter: Fighter::new(name, initial)?,
        })
    }
}

impl Combatant for Computer {
    fn id(&self) -> AgentId {
        self.fighter.id
    }

    fn name(&self) -> &str {
        &self.fighter.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }

    fn health(&self) -> &Health {
        &self.fighter.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.fighter.health
    }

    fn apply_damage(&mut self, rng: &mut dyn RngCore) -> ActionEvent {
        if self.fighter.health.is_in_danger() {
            debug!(agent = %self.fighter.name, "in danger, healing instead of taking damage");
            return self.apply_heal(rng);
        }
        resolve(self, ActionKind::Damage, rng)
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fighter.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const LONGEST: &str = "qqqqqqqqqqqqqqqqqqqq";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn create_human() {
        let h = Human::with_health(LONGEST, 1000).unwrap();
        assert_eq!(h.name(), LONGEST);
        assert_eq!(h.health().get(), 1000);
        assert_eq!(h.kind(), AgentKind::Human);
        assert_eq!(h.describe(), LONGEST);
        assert_eq!(h.to_string(), LONGEST);
    }

    #[test]
    fn default_health_is_100() {
        let c = Computer::new(COMPUTER_NAME).unwrap();
        assert_eq!(c.health().initial(), 100);
        assert_eq!(c.kind(), AgentKind::Computer);
    }

    #[test]
    fn invalid_names() {
        assert!(matches!(Human::new(""), Err(DuelError::InvalidName(_))));
        assert!(matches!(Human::new("   "), Err(DuelError::InvalidName(_))));
        let too_long = "q".repeat(21);
        assert!(matches!(
            Computer::new(too_long),
            Err(DuelError::InvalidName(_))
        ));
        // padding does not count against the limit
        assert!(Human::new(format!("  {LONGEST}  ")).is_ok());
    }

    #[test]
    fn invalid_health() {
        assert_eq!(
            Human::with_health("Name", 99).unwrap_err(),
            DuelError::InvalidConfiguration(99)
        );
        assert_eq!(
            Computer::with_health("Name", 10_001).unwrap_err(),
            DuelError::InvalidConfiguration(10_001)
        );
    }

    #[test]
    fn clones_share_identity() {
        let a = Human::new("Alice").unwrap();
        let b = Human::new("Alice").unwrap();
        assert_eq!(a.id(), a.clone().id());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn human_damage() {
        let mut rng = rng();
        let mut h = Human::with_health(LONGEST, 1000).unwrap();
        let event = h.apply_damage(&mut rng);
        assert_eq!(event.kind, ActionKind::Damage);
        assert!(ActionKind::Damage.range().contains(&event.amount));
        assert_eq!(event.before, 1000);
        assert_eq!(event.after, 1000 - event.amount);
        assert_eq!(h.health().get(), event.after);

        h.health_mut().set(18);
        h.apply_damage(&mut rng);
        assert_eq!(h.health().get(), 0);
    }

    #[test]
    fn human_large_damage() {
        let mut rng = rng();
        let mut h = Human::with_health(LONGEST, 1000).unwrap();
        let event = h.apply_large_damage(&mut rng);
        assert!(ActionKind::LargeDamage.range().contains(&event.amount));
        assert!(h.health().get() < 1000);

        h.health_mut().set(10);
        h.apply_large_damage(&mut rng);
        assert_eq!(h.health().get(), 0);
    }

    #[test]
    fn heal_never_exceeds_initial() {
        let mut rng = rng();
        let mut h = Human::with_health(LONGEST, 1000).unwrap();
        let event = h.apply_heal(&mut rng);
        assert_eq!(event.kind, ActionKind::Heal);
        assert_eq!(h.health().get(), 1000);

        h.health_mut().set(1000 - 18);
        h.apply_heal(&mut rng);
        assert_eq!(h.health().get(), 1000);
    }

    #[test]
    fn computer_damage_outside_danger() {
        let mut rng = rng();
        let mut c = Computer::with_health(LONGEST, 1000).unwrap();
        let event = c.apply_damage(&mut rng);
        assert_eq!(event.kind, ActionKind::Damage);
        assert!(c.health().get() < 1000);

        c.health_mut().set(1000 - 18);
        c.apply_damage(&mut rng);
        assert_ne!(c.health().get(), 1000);
    }

    #[test]
    fn computer_heals_when_in_danger() {
        let mut rng = rng();
        let mut c = Computer::with_health(LONGEST, 1000).unwrap();
        for _ in 0..100 {
            c.health_mut().set(350);
            let event = c.apply_damage(&mut rng);
            assert_eq!(event.kind, ActionKind::Heal);
            assert!(c.health().get() > 350);
        }
    }

    #[test]
    fn computer_rechecks_danger_each_call() {
        let mut rng = rng();
        let mut c = Computer::with_health(LONGEST, 1000).unwrap();
        c.health_mut().set(340);
        assert_eq!(c.apply_damage(&mut rng).kind, ActionKind::Heal);
        // at least 358 now, out of danger
        assert_eq!(c.apply_damage(&mut rng).kind, ActionKind::Damage);
    }

    #[test]
    fn computer_large_damage_is_not_overridden() {
        let mut rng = rng();
        let mut c = Computer::with_health(LONGEST, 1000).unwrap();
        c.health_mut().set(10);
        c.apply_large_damage(&mut rng);
        assert_eq!(c.health().get(), 0);
    }

    #[test]
    fn validate_name_counts_chars() {
        assert!(validate_name("ß").is_ok());
        assert!(validate_name(&"é".repeat(20)).is_ok());
        assert!(validate_name(&"é".repeat(21)).is_err());
    }
}
