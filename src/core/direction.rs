//! Push directions.
//!
//! Rows grow downward, so `Forward` (away from the player at the bottom
//! edge, the up-arrow key) decreases the row index.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// One of the four axis-aligned push directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward increasing column.
    Right,
    /// Toward decreasing column.
    Left,
    /// Toward decreasing row.
    Forward,
    /// Toward increasing row.
    Backward,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit step `(Δrow, Δcol)`.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Direction after mirroring the board left-to-right.
    #[must_use]
    pub const fn mirror_columns(self) -> Direction {
        match self {
            Direction::Right | Direction::Left => self.opposite(),
            other => other,
        }
    }

    /// Direction after mirroring the board top-to-bottom.
    #[must_use]
    pub const fn mirror_rows(self) -> Direction {
        match self {
            Direction::Forward | Direction::Backward => self.opposite(),
            other => other,
        }
    }

    /// Direction after transposing the board (swapping rows and columns).
    #[must_use]
    pub const fn transpose(self) -> Direction {
        match self {
            Direction::Right => Direction::Backward,
            Direction::Backward => Direction::Right,
            Direction::Left => Direction::Forward,
            Direction::Forward => Direction::Left,
        }
    }

    /// Letter used by input layers: `R`, `L`, `F` or `B`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Right => 'R',
            Direction::Left => 'L',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }

    /// Parse an input letter, case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Direction::Right),
            'L' => Some(Direction::Left),
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseDirectionError(s.to_string())),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
