//! Per-turn move selection.

use tracing::debug;

use crate::core::{ConfigResult, GameRng, Move};
use crate::eval::Evaluator;
use crate::rules::GameState;
use crate::search::{Scored, Search, SearchStats, TimeLeft};

use super::config::AgentConfig;

/// Anything that can take a turn in a match.
pub trait Player<S: GameState> {
    /// Choose a move from `legal_moves` before `time_left` runs out.
    ///
    /// Returns `Move::NONE` if `legal_moves` is empty.
    fn get_move(&mut self, state: &S, legal_moves: &[Move], time_left: &dyn TimeLeft) -> Move;
}

/// Search-based Isolation agent.
///
/// Generic over the game-state type. Owns the configuration, the
/// evaluator and the fallback RNG; the time-left capability is handed in
/// fresh every turn.
pub struct IsolationAgent<S: GameState> {
    config: AgentConfig,
    evaluator: Box<dyn Evaluator<S>>,
    rng: GameRng,
    last_stats: SearchStats,
}

impl<S: GameState + 'static> IsolationAgent<S> {
    /// Create an agent, rejecting invalid configuration.
    pub fn new(config: AgentConfig) -> ConfigResult<Self> {
        config.validate()?;

        let evaluator = config.evaluator.build(config.heuristic_weight);
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(evaluator = %config.evaluator, method = %config.method, seed = rng.seed(), "agent created");

        Ok(Self {
            config,
            evaluator,
            rng,
            last_stats: SearchStats::default(),
        })
    }

    /// Replace the configured heuristic with a custom evaluator.
    pub fn with_evaluator<E: Evaluator<S> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }
}

impl<S: GameState> IsolationAgent<S> {
    /// Get the configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Statistics from the most recent turn.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<S: GameState> Player<S> for IsolationAgent<S> {
    fn get_move(&mut self, state: &S, legal_moves: &[Move], time_left: &dyn TimeLeft) -> Move {
        self.last_stats.reset();

        let fallback = match self.rng.choose(legal_moves) {
            Some(&mv) => mv,
            None => {
                debug!("no legal moves");
                return Move::NONE;
            }
        };

        let method = self.config.method;
        let seed = Scored::new(f64::NEG_INFINITY, fallback);
        let mut search = Search::new(
            self.evaluator.as_ref(),
            time_left,
            self.config.timer_threshold,
            state.active_player(),
        );
        debug!(
            player = %search.player(),
            %method,
            iterative = self.config.iterative,
            %fallback,
            "search started"
        );

        let mut fixed_depth_completed = None;
        let best = if self.config.iterative {
            let outcome = search.iterative_deepening(method, state, self.config.max_depth, seed);
            if outcome.timed_out {
                debug!(depth = outcome.completed_depth, mv = %outcome.best.mv, "time limit reached");
            }
            outcome.best
        } else {
            let depth = self.config.search_depth;
            match search.run(method, state, depth) {
                Ok(result) => {
                    fixed_depth_completed = Some(depth);
                    result
                }
                Err(timeout) => {
                    debug!(%timeout, mv = %fallback, "time limit reached");
                    seed
                }
            }
        };

        self.last_stats = search.into_stats();
        if let Some(depth) = fixed_depth_completed {
            self.last_stats.completed_depth = depth;
        }

        // A completed search of a state with no moves of its own yields NONE
        let chosen = if best.mv.is_none() { fallback } else { best.mv };
        debug!(
            depth = self.last_stats.completed_depth,
            mv = %chosen,
            score = best.score,
            nodes = self.last_stats.nodes,
            cutoff_rate = self.last_stats.cutoff_rate(),
            leaf_ratio = self.last_stats.leaf_ratio(),
            "move selected"
        );
        chosen
    }
}

// =============================================================================
// Baseline players
// =============================================================================

/// Picks uniformly among the legal moves without searching.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn get_move(&mut self, _state: &S, legal_moves: &[Move], _time_left: &dyn TimeLeft) -> Move {
        self.rng.choose(legal_moves).copied().unwrap_or(Move::NONE)
    }
}
