//! The 9x9 board.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::{cell_value::CellValue, position::Position};

/// A 9x9 board mapping every position to a [`CellValue`].
///
/// The board is created fully populated with [`CellValue::Empty`] and is
/// never partial: every one of the 81 positions has a value at all times.
/// Cells are stored row-major in a flat array, addressed by
/// [`Position::index`].
///
/// The board performs no legality checks of any kind; it accepts any value
/// at any position.
///
/// # Examples
///
/// ```
/// use gridpen_core::{Board, CellValue, Digit, Position};
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), CellValue::Definite(Digit::D1));
///
/// let first_row: Vec<_> = board.rows().next().unwrap().to_vec();
/// assert_eq!(first_row[0], CellValue::Definite(Digit::D1));
/// assert_eq!(first_row.len(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellValue; 81],
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [CellValue::Empty; 81],
        }
    }

    /// Returns the value at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> CellValue {
        self.cells[pos.index()]
    }

    /// Replaces the value at the given position.
    pub const fn set(&mut self, pos: Position, value: CellValue) {
        self.cells[pos.index()] = value;
    }

    /// Iterates over the nine rows, top to bottom, each a slice of nine
    /// cells in column order.
    ///
    /// The iterator is lazy and restartable; calling `rows()` again yields
    /// the same sequence without side effects.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.chunks_exact(9)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = CellValue;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in self.rows() {
            if !first {
                f.write_str("\n")?;
            }
            for cell in row {
                Display::fmt(cell, f)?;
            }
            first = false;
        }
        Ok(())
    }
}
