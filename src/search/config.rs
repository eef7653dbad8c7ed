//! Search variant selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Tree-search variant used at every depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Plain minimax; explores the full tree.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning; same answer, fewer nodes.
    AlphaBeta,
}

impl SearchMethod {
    /// The configuration name of this method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(ConfigError::UnknownSearchMethod {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("minimax".parse::<SearchMethod>(), Ok(SearchMethod::Minimax));
        assert_eq!("AlphaBeta".parse::<SearchMethod>(), Ok(SearchMethod::AlphaBeta));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        assert_eq!(
            "expectimax".parse::<SearchMethod>(),
            Err(ConfigError::UnknownSearchMethod {
                name: "expectimax".to_string()
            })
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SearchMethod::AlphaBeta).unwrap();
        assert_eq!(json, "\"alphabeta\"");
        let back: SearchMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SearchMethod::AlphaBeta);
    }
}
