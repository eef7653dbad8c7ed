//! Move representation: a board coordinate, or the "no move" sentinel.
//!
//! Isolation moves name the cell a player jumps to, so a `Move` doubles as a
//! cell coordinate (`Cell`). Moves are plain values: copy them freely and
//! compare them only by equality.

use serde::{Deserialize, Serialize};

/// A move to the cell at `(row, col)`.
///
/// `Move::NONE` (`(-1, -1)`) stands for "no legal move".
///
/// ## Example
///
/// ```
/// use isolation_agent::core::Move;
///
/// let mv = Move::new(2, 3);
/// assert!(!mv.is_none());
/// assert_eq!(mv.to_pair(), (2, 3));
///
/// assert!(Move::NONE.is_none());
/// assert_eq!(Move::default(), Move::NONE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

/// Board cells share the move coordinate type.
pub type Cell = Move;

impl Move {
    /// Sentinel value representing no legal move.
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// Create a move to `(row, col)`.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == -1 && self.col == -1
    }

    /// The coordinates as a `(row, col)` tuple.
    #[must_use]
    pub const fn to_pair(self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Offset this coordinate by `(dr, dc)`.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Move(NONE)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
