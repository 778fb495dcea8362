use thiserror::Error;

/// Errors surfaced by the simulation.
///
/// Construction time is the only failure surface: once a world is
/// built, the rule engine has no error paths (empty neighborhoods are
/// skipped, the speed cap guards its division).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A config value, radius or coordinate failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
