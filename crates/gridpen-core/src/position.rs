//! Board position coordinates.

use std::fmt::{self, Display};

/// A position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are compared by value and can be used as keys. The
/// mapping to a flat index `y * 9 + x` is bijective over the 81 valid
/// positions.
///
/// # Examples
///
/// ```
/// use gridpen_core::Position;
///
/// let pos = Position::new(4, 3);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 3);
/// assert_eq!(Position::try_new(9, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpen_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "Position out of range");
        Self { x, y }
    }

    /// Creates a position, returning `None` for out-of-range coordinates.
    #[must_use]
    pub const fn try_new(x: u8, y: u8) -> Option<Self> {
        if x < 9 && y < 9 {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the flat row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
