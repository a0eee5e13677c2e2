//! Board representation.
//!
//! A fixed 7x7 array of [`Cell`]s. Row 0 is the top edge, column 0 the left
//! edge. The text form used by `Display` and `FromStr` is one line per row,
//! cells separated by spaces:
//!
//! ```text
//! W W . . . B B
//! W W . R . B B
//! . . R R R . .
//! . R R R R R .
//! . . R R R . .
//! B B . R . W W
//! B B . . . W W
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::cell::Cell;
use super::direction::Direction;
use crate::error::ParseBoardError;

/// Board size (7x7)
pub const BOARD_SIZE: usize = 7;

const STANDARD_LAYOUT: [[Cell; BOARD_SIZE]; BOARD_SIZE] = {
    use Cell::{Black as B, Empty as E, Red as R, White as W};
    [
        [W, W, E, E, E, B, B],
        [W, W, E, R, E, B, B],
        [E, E, R, R, R, E, E],
        [E, R, R, R, R, R, E],
        [E, E, R, R, R, E, E],
        [B, B, E, R, E, W, W],
        [B, B, E, E, E, W, W],
    ]
};

/// Position on the board.
///
/// Positions are not range-checked on construction so that callers can hand
/// raw input coordinates to the engine and get `OutOfBounds` back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Map a pixel coordinate to the cell under it.
    ///
    /// `x` runs along columns and `y` along rows. The result may be off-board
    /// when the point lies outside the grid.
    ///
    /// ```
    /// use kuba::Pos;
    ///
    /// // 800px window, 7 columns
    /// assert_eq!(Pos::from_pixel(250, 10, 114), Pos::new(0, 2));
    /// ```
    #[must_use]
    pub fn from_pixel(x: u32, y: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            row: (y / cell_size) as usize,
            col: (x / cell_size) as usize,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring position one step in `dir`, or `None` past the edge.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.step();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        next.is_on_board().then_some(next)
    }

    #[must_use]
    pub const fn mirror_columns(self) -> Pos {
        Pos::new(self.row, BOARD_SIZE - 1 - self.col)
    }

    #[must_use]
    pub const fn mirror_rows(self) -> Pos {
        Pos::new(BOARD_SIZE - 1 - self.row, self.col)
    }

    #[must_use]
    pub const fn transpose(self) -> Pos {
        Pos::new(self.col, self.row)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos::new(row, col)
    }
}

/// The 7x7 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no marbles.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting layout: 8 White, 8 Black, 13 Red.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cells: STANDARD_LAYOUT,
        }
    }

    /// Build a board from raw rows.
    #[must_use]
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the cell at `pos`, or `None` if `pos` is off-board.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        pos.is_on_board().then(|| self.cells[pos.row][pos.col])
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Panics if `pos` is off-board.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Builder-style `set`, for test and setup code.
    #[must_use]
    pub fn with(mut self, pos: Pos, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over all positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Marble counts as `(white, black, red)`.
    #[must_use]
    pub fn marble_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::White => counts.0 += 1,
                Cell::Black => counts.1 += 1,
                Cell::Red => counts.2 += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// The board reflected left-to-right.
    #[must_use]
    pub fn mirror_columns(&self) -> Self {
        self.remap(Pos::mirror_columns)
    }

    /// The board reflected top-to-bottom.
    #[must_use]
    pub fn mirror_rows(&self) -> Self {
        self.remap(Pos::mirror_rows)
    }

    /// The board with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        self.remap(Pos::transpose)
    }

    fn remap(&self, map: impl Fn(Pos) -> Pos) -> Self {
        let mut out = Board::empty();
        for pos in Board::positions() {
            out.set(map(pos), self[pos]);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.row][pos.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the text form. Blank lines are skipped and whitespace inside a
    /// row is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength { row, len: symbols.len() });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(ParseBoardError::Symbol { row, col, symbol })?;
                cells[row][col] = cell;
            }
        }
        Ok(Board::from_rows(cells))
    }
}
