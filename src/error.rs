//! Configuration errors.

use thiserror::Error;

/// A configuration value rejected by `validate()`.
///
/// The search procedures themselves are total; only the parameters
/// handed to a runner can be invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive and finite, got {0}")]
    InvalidInitialTemperature(f64),

    #[error("geometric alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("lundy-mees beta must be positive, got {0}")]
    InvalidBeta(f64),

    #[error("inverse stride must be at least 1")]
    ZeroStride,

    #[error("first-choice trial budget must be at least 1")]
    ZeroTrials,

    #[error("restart count must be at least 1")]
    ZeroRestarts,

    #[error("stagnation limit must be at least 1 when set")]
    ZeroStagnationLimit,

    #[error("history interval must be at least 1")]
    ZeroHistoryInterval,
}
