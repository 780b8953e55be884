//! Core data structures for the gridpen puzzle editor.
//!
//! This crate holds the pure data layer of the editor: the board, its cells,
//! and the value types that occupy them. There is no input handling here and
//! no rule checking anywhere; a board accepts any value at any position, and
//! deciding what to write is entirely the caller's concern.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the digits 1-9
//! - [`position`]: Board position (x, y) coordinates on the 9x9 grid
//! - [`digit_set`]: A set of digits backed by a bitmask, used for pencil-mark
//!   notes
//! - [`cell_value`]: What occupies a single cell (empty, a definite digit, or
//!   a set of notes)
//! - [`board`]: The 9x9 board, always fully populated
//!
//! # Examples
//!
//! ```
//! use gridpen_core::{Board, CellValue, Digit, Position};
//!
//! let mut board = Board::new();
//! let pos = Position::new(4, 3);
//!
//! assert_eq!(board.get(pos), CellValue::Empty);
//! board.set(pos, CellValue::Definite(Digit::D5));
//! assert_eq!(board.get(pos), CellValue::Definite(Digit::D5));
//! ```

pub mod board;
pub mod cell_value;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::Board, cell_value::CellValue, digit::Digit, digit_set::DigitSet, position::Position,
};
