//! Cell contents.

use std::fmt::{self, Display};

use crate::{digit::Digit, digit_set::DigitSet};

/// What occupies a single cell.
///
/// A cell is always in exactly one of three states: empty, holding a single
/// committed digit, or holding a set of pencil-mark notes. A `Notes` value
/// with an empty set is a distinct state from `Empty`, even though both
/// render as blank.
///
/// # Examples
///
/// ```
/// use gridpen_core::{CellValue, Digit, DigitSet};
///
/// let value = CellValue::Definite(Digit::D5);
/// assert_eq!(value.as_digit(), Some(Digit::D5));
///
/// let blank = CellValue::Notes(DigitSet::EMPTY);
/// assert_ne!(blank, CellValue::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellValue {
    /// No content.
    #[default]
    Empty,
    /// A single committed digit.
    Definite(Digit),
    /// Zero or more candidate digits, noted without committing.
    Notes(DigitSet),
}

impl CellValue {
    /// Returns the committed digit, if this cell holds one.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Definite(digit) => Some(digit),
            Self::Empty | Self::Notes(_) => None,
        }
    }

    /// Returns whether the cell has no content at all.
    ///
    /// An empty note-set is not `Empty`; it is a notes cell with no notes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definite(digit) => Display::fmt(digit, f),
            Self::Empty | Self::Notes(_) => f.write_str(" "),
        }
    }
}
