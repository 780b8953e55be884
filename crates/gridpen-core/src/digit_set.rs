//! A set of digits 1-9, backed by a bitmask.

use std::fmt::{self, Display};

use crate::digit::Digit;

/// A set of digits from 1 to 9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively. This is the representation used for pencil-mark notes in
/// a cell; a set may be empty.
///
/// # Examples
///
/// ```
/// use gridpen_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::new();
/// notes.insert(Digit::D1);
/// notes.insert(Digit::D5);
///
/// assert_eq!(notes.len(), 2);
/// assert!(notes.contains(Digit::D5));
/// assert!(!notes.contains(Digit::D9));
///
/// notes.toggle(Digit::D5);
/// assert!(!notes.contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    const MASK: u16 = 0b1_1111_1111;

    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: Self::MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from a raw bitmask, bits 0-8 for digits 1-9.
    ///
    /// Returns `None` if any bit outside the low nine is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Adds the digit if absent, removes it if present.
    pub const fn toggle(&mut self, digit: Digit) {
        self.bits ^= Self::bit(digit);
    }

    /// Returns whether the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the digits in the set, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridpen_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
    /// let collected: Vec<_> = set.iter().collect();
    /// assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for digit in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            Display::fmt(&digit, f)?;
            first = false;
        }
        Ok(())
    }
}
