//! Cell contents.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Contents of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// PlayerA's marble.
    White,
    /// PlayerB's marble.
    Black,
    /// Neutral marble, scored when pushed off.
    Red,
}

impl Cell {
    /// Check if the cell holds any marble.
    #[must_use]
    pub const fn is_marble(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this marble. `None` for empty and neutral cells.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::White => Some(Player::A),
            Cell::Black => Some(Player::B),
            Cell::Empty | Cell::Red => None,
        }
    }

    /// Single character used in the text board format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Red => 'R',
        }
    }

    /// Parse a text board symbol.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            'R' => Some(Cell::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
