//! Configuration errors.
//!
//! Misconfiguration fails when an agent is built; invalid values are never
//! replaced by defaults.

use thiserror::Error;

/// Errors raised while validating or parsing agent configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("search depth must be a positive integer, got {depth}")]
    InvalidSearchDepth { depth: u32 },

    #[error("maximum iterative-deepening depth must be a positive integer, got {depth}")]
    InvalidMaxDepth { depth: u32 },

    #[error("timer threshold must be a finite, non-negative number of milliseconds, got {threshold}")]
    InvalidTimerThreshold { threshold: f64 },

    #[error("heuristic weight must be finite and positive, got {weight}")]
    InvalidWeight { weight: f64 },

    #[error("unknown search method '{name}' (expected 'minimax' or 'alphabeta')")]
    UnknownSearchMethod { name: String },

    #[error("unknown evaluation function '{name}' (expected one of: {expected})")]
    UnknownEvaluator { name: String, expected: String },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
