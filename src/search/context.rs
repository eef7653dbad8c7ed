//! Search context shared by the minimax and alpha-beta traversals.
//!
//! A `Search` bundles everything a traversal needs besides the state: the
//! evaluator, the time-left capability, the timer threshold and the player
//! the scores are computed for. It is created per top-level search and
//! dropped afterwards; nothing in it outlives the turn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Move, PlayerId};
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::clock::TimeLeft;
use super::config::SearchMethod;
use super::stats::SearchStats;

/// Cancellation signal: time left fell below the timer threshold.
///
/// Raised at any depth, propagated with `?`, and resolved by the caller of
/// the top-level search into "keep the best move found so far".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search cancelled: time left fell below the timer threshold")]
pub struct Timeout;

/// Result of a search that may be cancelled.
pub type SearchResult<T> = Result<T, Timeout>;

/// Score of a node and the move that achieves it.
///
/// Infinite scores denote a proven win (+inf) or loss (-inf).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub score: f64,
    pub mv: Move,
}

impl Scored {
    #[must_use]
    pub const fn new(score: f64, mv: Move) -> Self {
        Self { score, mv }
    }

    /// Starting point for a node: the worst score for its role, no move.
    #[must_use]
    pub const fn worst(maximizing: bool) -> Self {
        let score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        Self::new(score, Move::NONE)
    }

    /// Whether this is a proven win.
    #[must_use]
    pub fn is_forced_win(&self) -> bool {
        self.score == f64::INFINITY
    }
}

/// One top-level search.
pub struct Search<'a, S: GameState> {
    evaluator: &'a dyn Evaluator<S>,
    clock: &'a dyn TimeLeft,
    timer_threshold: f64,
    player: PlayerId,
    pub(super) stats: SearchStats,
}

impl<'a, S: GameState> Search<'a, S> {
    /// Create a search scoring leaves for `player`.
    pub fn new(
        evaluator: &'a dyn Evaluator<S>,
        clock: &'a dyn TimeLeft,
        timer_threshold: f64,
        player: PlayerId,
    ) -> Self {
        Self {
            evaluator,
            clock,
            timer_threshold,
            player,
            stats: SearchStats::default(),
        }
    }

    /// The player leaves are scored for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the search, keeping its statistics.
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Run one fixed-depth search with the agent's player maximizing.
    pub fn run(&mut self, method: SearchMethod, state: &S, depth: u32) -> SearchResult<Scored> {
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Enter a node: count it and abort if time is nearly up.
    pub(super) fn enter(&mut self) -> SearchResult<()> {
        self.stats.nodes += 1;
        if self.clock.time_left() < self.timer_threshold {
            self.stats.timed_out = true;
            return Err(Timeout);
        }
        Ok(())
    }

    /// Score a leaf for the searching player.
    pub(super) fn leaf(&mut self, state: &S) -> Scored {
        self.stats.leaf_evaluations += 1;
        Scored::new(self.evaluator.evaluate(state, self.player), Move::NONE)
    }
}
