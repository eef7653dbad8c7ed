//! Game-state contract consumed by the evaluators and the search.
//!
//! The decision engine never looks inside a board. It only asks a state
//! for legal moves, forecasts successor states, and checks win/loss.

use crate::core::{Cell, Move, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The given player won; the other player ran out of moves.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Immutable two-player game snapshot.
///
/// ## Implementation Notes
///
/// - `legal_moves_for`: must be deterministic; the search breaks ties by
///   enumeration order
/// - `forecast_move`: must not mutate `self`
/// - `is_winner` / `is_loser`: mutually exclusive for a given player on any
///   reachable state
pub trait GameState: Sized {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Legal moves for `player`, in a deterministic order.
    ///
    /// Returns empty if the player cannot move.
    fn legal_moves_for(&self, player: PlayerId) -> Vec<Move>;

    /// The state after the active player makes `mv`.
    fn forecast_move(&self, mv: Move) -> Self;

    /// Whether `player` has already won.
    fn is_winner(&self, player: PlayerId) -> bool;

    /// Whether `player` has already lost.
    fn is_loser(&self, player: PlayerId) -> bool;

    /// All unoccupied cells.
    fn blank_spaces(&self) -> Vec<Cell>;

    // === Convenience Methods ===

    /// The other player.
    fn opponent(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }

    /// Legal moves for the active player.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult> {
        PlayerId::both()
            .find(|&player| self.is_winner(player))
            .map(GameResult::Winner)
    }
}
