//! Agent configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, ConfigResult};
use crate::eval::EvaluatorKind;
use crate::search::SearchMethod;

/// Agent configuration, fixed for a whole match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Heuristic used at depth-limited leaves.
    pub evaluator: EvaluatorKind,

    /// Opponent-move weight for the weighted heuristics (default: 1.5).
    pub heuristic_weight: f64,

    /// Search variant used at every depth.
    pub method: SearchMethod,

    /// Deepen iteratively (true) or run one fixed-depth search (false).
    pub iterative: bool,

    /// Depth of the fixed-depth search. Ignored when `iterative` is set.
    pub search_depth: u32,

    /// Time left, in milliseconds, below which the search aborts.
    /// Must cover one more node plus unwinding the stack.
    pub timer_threshold: f64,

    /// Hard cap on iterative-deepening depth.
    pub max_depth: u32,

    /// Seed for the fallback-move RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorKind::default(),
            heuristic_weight: 1.5,
            method: SearchMethod::default(),
            iterative: true,
            search_depth: 3,
            timer_threshold: 10.0,
            max_depth: 64,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Build a config from the evaluator and method names.
    ///
    /// ```
    /// use isolation_agent::agent::AgentConfig;
    /// use isolation_agent::search::SearchMethod;
    ///
    /// let config = AgentConfig::from_names("improved", "alphabeta").unwrap();
    /// assert_eq!(config.method, SearchMethod::AlphaBeta);
    ///
    /// assert!(AgentConfig::from_names("improved", "mcts").is_err());
    /// ```
    pub fn from_names(evaluator: &str, method: &str) -> ConfigResult<Self> {
        Ok(Self {
            evaluator: evaluator.parse()?,
            method: method.parse()?,
            ..Self::default()
        })
    }

    /// Set the heuristic.
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Set the weight used by weighted heuristics.
    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Set the search variant.
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Switch to a single fixed-depth search.
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.iterative = false;
        self.search_depth = depth;
        self
    }

    /// Switch to iterative deepening, capped at `max_depth`.
    pub fn with_iterative(mut self, max_depth: u32) -> Self {
        self.iterative = true;
        self.max_depth = max_depth;
        self
    }

    /// Set the timer threshold in milliseconds.
    pub fn with_timer_threshold(mut self, ms: f64) -> Self {
        self.timer_threshold = ms;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every setting; the first invalid one is reported.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.iterative && self.search_depth == 0 {
            return Err(ConfigError::InvalidSearchDepth {
                depth: self.search_depth,
            });
        }
        if self.iterative && self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth {
                depth: self.max_depth,
            });
        }
        if !self.timer_threshold.is_finite() || self.timer_threshold < 0.0 {
            return Err(ConfigError::InvalidTimerThreshold {
                threshold: self.timer_threshold,
            });
        }
        if self.evaluator.is_weighted()
            && !(self.heuristic_weight.is_finite() && self.heuristic_weight > 0.0)
        {
            return Err(ConfigError::InvalidWeight {
                weight: self.heuristic_weight,
            });
        }
        Ok(())
    }
}
