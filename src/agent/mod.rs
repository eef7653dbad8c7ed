//! The game-playing agent.
//!
//! Each turn the agent:
//! 1. returns `Move::NONE` straight away if there is no legal move
//! 2. draws a random legal fallback move, so a timeout still yields a
//!    legal answer
//! 3. searches (iterative deepening or one fixed depth) and returns the best
//!    completed answer, or the fallback if nothing completed
//!
//! ```
//! use isolation_agent::agent::{AgentConfig, IsolationAgent, Player};
//! use isolation_agent::games::isolation::Board;
//! use isolation_agent::rules::GameState;
//! use isolation_agent::search::Deadline;
//!
//! let config = AgentConfig::from_names("improved", "alphabeta").unwrap().with_seed(1);
//! let mut agent: IsolationAgent<Board> = IsolationAgent::new(config).unwrap();
//!
//! let board = Board::new(5, 5);
//! let moves = board.legal_moves();
//! let mv = agent.get_move(&board, &moves, &Deadline::after_millis(50));
//! assert!(moves.contains(&mv));
//! ```

pub mod config;
pub mod player;

pub use config::AgentConfig;
pub use player::{IsolationAgent, Player, RandomPlayer};
