use thiserror::Error;

/// Validation failures raised by the scorecard store. None of these are
/// transient: the caller supplied bad input and the round is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("player count must be between 1 and 4, got {0}")]
    InvalidPlayerCount(i64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("hole must be between 1 and 18, got {0}")]
    InvalidHole(i64),
    #[error("invalid score: {0}")]
    InvalidScore(String),
}
