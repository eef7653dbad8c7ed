//! # isolation-agent
//!
//! A game-playing agent for Isolation built on time-bounded adversarial
//! search.
//!
//! ## Design Principles
//!
//! 1. **Board-Agnostic**: The search only talks to the `GameState` trait.
//!    Boards define legality, forecasting and win/loss.
//!
//! 2. **Pluggable Evaluation**: Leaves are scored through the `Evaluator`
//!    trait; heuristics are chosen by configuration.
//!
//! 3. **Cooperative Cancellation**: The caller's time-left capability is
//!    polled at every node. A timeout unwinds as `Err(Timeout)` and is
//!    resolved once, by the agent, into the best completed answer.
//!
//! ## Modules
//!
//! - `core`: Player IDs, moves, RNG, configuration errors
//! - `rules`: The `GameState` contract
//! - `eval`: Evaluation heuristics
//! - `search`: Minimax, alpha-beta, iterative deepening, clocks
//! - `agent`: Per-turn move selection and configuration
//! - `games`: Reference knight-move Isolation board

pub mod agent;
pub mod core;
pub mod eval;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Cell, ConfigError, ConfigResult, GameRng, Move, PlayerId, PlayerMap};

pub use crate::rules::{GameResult, GameState};

pub use crate::eval::{
    Evaluator, EvaluatorKind, ImprovedScore, OpenMoveScore, RatioMobilityScore,
    WeightedImprovedScore, WeightedRatioScore,
};

pub use crate::search::{
    Deadline, Deepening, Scored, Search, SearchMethod, SearchStats, SimulatedClock, TimeLeft,
    Timeout,
};

pub use crate::agent::{AgentConfig, IsolationAgent, Player, RandomPlayer};
