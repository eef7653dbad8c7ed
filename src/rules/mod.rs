//! Game-state trait for board implementations.
//!
//! Boards implement `GameState` to define:
//! - Legal moves for each player
//! - How a move produces a successor state
//! - Win/loss conditions
//!
//! The evaluators and the search call into `GameState` but never interpret
//! board-specific concepts directly.

pub mod state;

pub use state::{GameResult, GameState};
