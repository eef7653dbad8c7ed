//! Depth-limited minimax with alpha-beta pruning.
//!
//! `alpha` is the score the maximizing player can already guarantee,
//! `beta` the score the minimizing player can already guarantee. A branch
//! whose value falls outside `(alpha, beta)` cannot change the decision at
//! the root, so the rest of it is skipped.

use crate::rules::GameState;

use super::context::{Scored, Search, SearchResult};

impl<'a, S: GameState> Search<'a, S> {
    /// Alpha-beta to `depth` plies, starting on a max or min layer.
    ///
    /// With the full window `(-inf, +inf)` this returns the same score and
    /// move as [`Search::minimax`] while evaluating no more leaves.
    pub fn alphabeta(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> SearchResult<Scored> {
        if maximizing {
            self.max_value(state, depth, alpha, beta)
        } else {
            self.min_value(state, depth, alpha, beta)
        }
    }

    fn max_value(&mut self, state: &S, depth: u32, mut alpha: f64, beta: f64) -> SearchResult<Scored> {
        self.enter()?;

        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.leaf(state));
        }

        let mut best = Scored::worst(true);
        for mv in moves {
            let child = self.min_value(&state.forecast_move(mv), depth - 1, alpha, beta)?;

            if best.mv.is_none() || child.score > best.score {
                best = Scored::new(child.score, mv);
                alpha = alpha.max(best.score);
            }
            if best.score >= beta {
                self.stats.cutoffs += 1;
                return Ok(best);
            }
        }

        Ok(best)
    }

    fn min_value(&mut self, state: &S, depth: u32, alpha: f64, mut beta: f64) -> SearchResult<Scored> {
        self.enter()?;

        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.leaf(state));
        }

        let mut best = Scored::worst(false);
        for mv in moves {
            let child = self.max_value(&state.forecast_move(mv), depth - 1, alpha, beta)?;

            if best.mv.is_none() || child.score < best.score {
                best = Scored::new(child.score, mv);
                beta = beta.min(best.score);
            }
            if best.score <= alpha {
                self.stats.cutoffs += 1;
                return Ok(best);
            }
        }

        Ok(best)
    }
}
