//! Core types: players, moves, RNG, configuration errors.
//!
//! These are the game-agnostic building blocks shared by the game-state
//! contract, the evaluators, the search and the agent.

pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use error::{ConfigError, ConfigResult};
pub use moves::{Cell, Move};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
