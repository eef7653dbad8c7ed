//! Adversarial search for Isolation.
//!
//! ## Overview
//!
//! - **Minimax / alpha-beta**: depth-limited traversals over any
//!   `GameState`, scoring leaves with a pluggable `Evaluator`
//! - **Cooperative cancellation**: every node polls a caller-supplied
//!   `TimeLeft`; once it drops below the timer threshold the search unwinds
//!   with `Timeout` through `?`
//! - **Iterative deepening**: keeps the deepest completed answer, never a
//!   partial one
//!
//! ## Usage
//!
//! ```rust
//! use isolation_agent::core::PlayerId;
//! use isolation_agent::eval::ImprovedScore;
//! use isolation_agent::games::isolation::Board;
//! use isolation_agent::rules::GameState;
//! use isolation_agent::search::{Search, SearchMethod, SimulatedClock};
//!
//! let board = Board::new(4, 4);
//! let clock = SimulatedClock::unlimited();
//! let mut search: Search<'_, Board> = Search::new(&ImprovedScore, &clock, 10.0, PlayerId::FIRST);
//!
//! let result = search.run(SearchMethod::AlphaBeta, &board, 2).unwrap();
//! assert!(board.legal_moves().contains(&result.mv));
//! ```

pub mod alphabeta;
pub mod clock;
pub mod config;
pub mod context;
pub mod iterative;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use clock::{Deadline, SimulatedClock, TimeLeft};
pub use config::SearchMethod;
pub use context::{Scored, Search, SearchResult, Timeout};
pub use iterative::{depth_cap, Deepening};
pub use stats::SearchStats;
