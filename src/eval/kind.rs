//! Configuration-facing selection of a heuristic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::rules::GameState;

use super::heuristic::{
    Evaluator, ImprovedScore, OpenMoveScore, RatioMobilityScore, WeightedImprovedScore,
    WeightedRatioScore,
};

/// Which heuristic an agent evaluates leaves with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Own move count.
    OpenMove,
    /// Own moves minus opponent moves.
    Improved,
    /// Own moves minus weighted opponent moves.
    WeightedImproved,
    /// Own moves over weighted opponent moves.
    WeightedRatio,
    /// Move ratio plus own moves per blank cell.
    #[default]
    RatioMobility,
}

impl EvaluatorKind {
    /// Every kind, in declaration order.
    pub const ALL: [EvaluatorKind; 5] = [
        EvaluatorKind::OpenMove,
        EvaluatorKind::Improved,
        EvaluatorKind::WeightedImproved,
        EvaluatorKind::WeightedRatio,
        EvaluatorKind::RatioMobility,
    ];

    /// The configuration name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EvaluatorKind::OpenMove => "open_move",
            EvaluatorKind::Improved => "improved",
            EvaluatorKind::WeightedImproved => "weighted_improved",
            EvaluatorKind::WeightedRatio => "weighted_ratio",
            EvaluatorKind::RatioMobility => "ratio_mobility",
        }
    }

    /// Whether this heuristic reads the weight setting.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(
            self,
            EvaluatorKind::WeightedImproved | EvaluatorKind::WeightedRatio
        )
    }

    /// Instantiate the heuristic. `weight` is ignored by unweighted kinds.
    pub fn build<S: GameState + 'static>(self, weight: f64) -> Box<dyn Evaluator<S>> {
        match self {
            EvaluatorKind::OpenMove => Box::new(OpenMoveScore),
            EvaluatorKind::Improved => Box::new(ImprovedScore),
            EvaluatorKind::WeightedImproved => Box::new(WeightedImprovedScore { weight }),
            EvaluatorKind::WeightedRatio => Box::new(WeightedRatioScore { weight }),
            EvaluatorKind::RatioMobility => Box::new(RatioMobilityScore),
        }
    }
}

impl std::fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EvaluatorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownEvaluator {
                name: s.to_string(),
                expected: EvaluatorKind::ALL.map(EvaluatorKind::name).join(", "),
            })
    }
}
