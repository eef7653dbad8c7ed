//! Position evaluation for the search leaves.
//!
//! Evaluators are trait-based so the agent can swap them:
//! - `Evaluator`: scores a state for a player (closures qualify too)
//! - `EvaluatorKind`: names a built-in heuristic in configuration
//!
//! ```
//! use isolation_agent::core::PlayerId;
//! use isolation_agent::eval::{Evaluator, ImprovedScore};
//! use isolation_agent::games::isolation::Board;
//!
//! let board = Board::new(7, 7);
//! // Nobody has moved: both players can start anywhere
//! assert_eq!(ImprovedScore.evaluate(&board, PlayerId::FIRST), 0.0);
//! ```

pub mod heuristic;
pub mod kind;

pub use heuristic::{
    Evaluator, ImprovedScore, Mobility, OpenMoveScore, RatioMobilityScore,
    WeightedImprovedScore, WeightedRatioScore,
};
pub use kind::EvaluatorKind;
