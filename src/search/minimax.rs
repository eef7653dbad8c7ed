//! Depth-limited minimax.

use crate::rules::GameState;

use super::context::{Scored, Search, SearchResult};

impl<'a, S: GameState> Search<'a, S> {
    /// Minimax to `depth` plies.
    ///
    /// `maximizing` is true on layers where the searching player moves. The
    /// first enumerated move with the extremal score wins ties. Nodes at
    /// depth 0, and nodes whose side to move has no legal move, are scored
    /// by the evaluator with `Move::NONE`.
    pub fn minimax(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchResult<Scored> {
        self.enter()?;

        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(self.leaf(state));
        }

        let mut best = Scored::worst(maximizing);
        for mv in moves {
            let child = self.minimax(&state.forecast_move(mv), depth - 1, !maximizing)?;

            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if best.mv.is_none() || improves {
                best = Scored::new(child.score, mv);
            }
        }

        Ok(best)
    }
}
