//! Iterative deepening.
//!
//! Runs the selected search at depth 1, 2, 3, ... and keeps the answer of
//! the deepest depth that finished. A depth cut short by the clock is
//! discarded entirely.

use tracing::trace;

use crate::rules::GameState;

use super::config::SearchMethod;
use super::context::{Scored, Search};

/// Outcome of an iterative-deepening run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deepening {
    /// Answer of the deepest completed depth, or the seed if none completed.
    pub best: Scored,

    /// Deepest completed depth (0 if none completed).
    pub completed_depth: u32,

    /// Whether the run ended because the clock ran out.
    pub timed_out: bool,
}

/// Depth cap for a state: the configured cap, but never past the number of
/// blank cells. Each ply fills a blank cell, so deeper searches see the
/// same tree.
pub fn depth_cap<S: GameState>(state: &S, max_depth: u32) -> u32 {
    let blanks = u32::try_from(state.blank_spaces().len()).unwrap_or(u32::MAX);
    max_depth.min(blanks.max(1))
}

impl<'a, S: GameState> Search<'a, S> {
    /// Deepen until a forced win is proven, the depth cap is reached, or
    /// time runs out.
    ///
    /// `seed` is returned unchanged if not even depth 1 completes.
    pub fn iterative_deepening(
        &mut self,
        method: SearchMethod,
        state: &S,
        max_depth: u32,
        seed: Scored,
    ) -> Deepening {
        let cap = depth_cap(state, max_depth);
        let mut outcome = Deepening {
            best: seed,
            completed_depth: 0,
            timed_out: false,
        };

        for depth in 1..=cap {
            match self.run(method, state, depth) {
                Ok(result) => {
                    trace!(depth, score = result.score, mv = %result.mv, "depth completed");
                    outcome.best = result;
                    outcome.completed_depth = depth;
                    self.stats.completed_depth = depth;

                    if result.is_forced_win() {
                        break;
                    }
                }
                Err(_) => {
                    trace!(depth, "depth abandoned on timeout");
                    outcome.timed_out = true;
                    break;
                }
            }
        }

        outcome
    }
}
