//! Error types for the duel engine.

/// Errors raised while setting up or mutating a duel.
///
/// Every variant is raised at construction or at an explicit write. Turn
/// resolution itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    /// Initial health is outside the accepted range.
    #[error("initial health must be between 100 and 10000, got {0}")]
    InvalidConfiguration(i64),

    /// Initial health was supplied as something other than an integer.
    #[error("initial health must be an integer, got {0}")]
    HealthNotInteger(String),

    /// A non-integer value was written to a health track.
    #[error("health value must be an integer, got {0}")]
    InvalidValue(String),

    /// A name whose trimmed length is outside the accepted range.
    #[error("name length must be between 1 and 20 characters, got {0:?}")]
    InvalidName(String),

    /// A name was supplied as something other than text.
    #[error("name must be a string, got {0}")]
    NameNotText(String),

    /// The two combatants cannot form a match.
    #[error("invalid participants: {0}")]
    InvalidParticipants(String),

    /// A match configuration could not be read.
    #[error("malformed config: {0}")]
    MalformedConfig(String),
}

/// Convenience result type for duel operations.
pub type DuelResult<T> = Result<T, DuelError>;
