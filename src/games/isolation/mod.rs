//! Knight-move Isolation.
//!
//! The reference board used to exercise the agent:
//! - Two players on a rectangular grid (7x7 by default)
//! - A player's first move may land on any blank cell
//! - After that, every move is a knight's jump to a blank cell
//! - Every occupied cell stays blocked; the player to move with no legal
//!   move loses

mod board;

pub use board::{Board, BoardBuilder, KNIGHT_DIRECTIONS};
