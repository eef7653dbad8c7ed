//! Knight-move Isolation board.

use im::HashSet;
use smallvec::SmallVec;

use crate::core::{Cell, Move, PlayerId, PlayerMap};
use crate::rules::GameState;

/// Knight jumps, in the order moves are enumerated.
pub const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Immutable Isolation board.
///
/// Every cell a player has occupied stays blocked for the rest of the game.
/// Cloning is O(1): blocked cells live in a persistent `im::HashSet`, so
/// `forecast_move` shares structure with its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: HashSet<Cell>,
    locations: PlayerMap<Option<Cell>>,
    active: PlayerId,
    move_count: u32,
}

/// Builder for creating a Board, empty or mid-game.
pub struct BoardBuilder {
    width: i32,
    height: i32,
    blocked: Vec<Cell>,
    locations: PlayerMap<Option<Cell>>,
    active: PlayerId,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            blocked: Vec::new(),
            locations: PlayerMap::with_value(None),
            active: PlayerId::FIRST,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be positive");
        self.width = width;
        self.height = height;
        self
    }

    /// Block a cell that neither player currently stands on.
    pub fn blocked(mut self, cell: impl Into<Cell>) -> Self {
        self.blocked.push(cell.into());
        self
    }

    /// Place a player on a cell. The cell is blocked as well.
    pub fn location(mut self, player: PlayerId, cell: impl Into<Cell>) -> Self {
        self.locations[player] = Some(cell.into());
        self
    }

    /// Set the player to move.
    pub fn active(mut self, player: PlayerId) -> Self {
        self.active = player;
        self
    }

    /// Build the board.
    pub fn build(self) -> Board {
        let (width, height) = (self.width, self.height);
        let in_bounds =
            |cell: Cell| (0..height).contains(&cell.row) && (0..width).contains(&cell.col);

        let mut blocked = HashSet::new();
        let mut move_count = 0;

        for cell in &self.blocked {
            assert!(in_bounds(*cell), "Blocked cell {} is off the board", cell);
            blocked.insert(*cell);
        }

        for (player, location) in self.locations.iter() {
            if let Some(cell) = *location {
                assert!(in_bounds(cell), "{} placed off the board at {}", player, cell);
                blocked.insert(cell);
                move_count += 1;
            }
        }

        Board {
            width,
            height,
            blocked,
            locations: self.locations,
            active: self.active,
            move_count,
        }
    }
}

impl Board {
    /// An empty board of the given size with the first player to move.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        BoardBuilder::new().size(width, height).build()
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Where a player stands, or `None` before their first move.
    #[must_use]
    pub fn location(&self, player: PlayerId) -> Option<Cell> {
        self.locations[player]
    }

    /// Whether `cell` is on the board and unoccupied.
    #[must_use]
    pub fn move_is_legal(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row)
            && (0..self.width).contains(&cell.col)
            && !self.blocked.contains(&cell)
    }

    /// Knight jumps from `from` that land on blank cells.
    #[must_use]
    pub fn knight_moves(&self, from: Cell) -> SmallVec<[Move; 8]> {
        KNIGHT_DIRECTIONS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&cell| self.move_is_legal(cell))
            .collect()
    }

    /// The same position reflected left-to-right.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let width = self.width;
        let reflect = move |cell: Cell| Move::new(cell.row, width - 1 - cell.col);

        Self {
            width: self.width,
            height: self.height,
            blocked: self.blocked.iter().map(|&cell| reflect(cell)).collect(),
            locations: PlayerMap::new(|player| self.locations[player].map(reflect)),
            active: self.active,
            move_count: self.move_count,
        }
    }
}

impl GameState for Board {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> Vec<Move> {
        match self.locations[player] {
            // A player who has not moved yet may start on any blank cell
            None => self.blank_spaces(),
            Some(from) => self.knight_moves(from).into_vec(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        debug_assert!(self.move_is_legal(mv), "forecast of illegal move {}", mv);

        let mut next = self.clone();
        next.blocked.insert(mv);
        next.locations[self.active] = Some(mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player != self.active && self.legal_moves().is_empty()
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }

    fn blank_spaces(&self) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Move::new(row, col)))
            .filter(|cell| !self.blocked.contains(cell))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let cell = Move::new(row, col);
                let symbol = if self.locations[PlayerId::FIRST] == Some(cell) {
                    " 1 "
                } else if self.locations[PlayerId::SECOND] == Some(cell) {
                    " 2 "
                } else if self.blocked.contains(&cell) {
                    " - "
                } else {
                    "   "
                };
                write!(f, "{}|", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
