//! Per-cell play state.

use derive_more::IsVariant;
use nonagrid_core::Digit;

/// The state of one board cell during play.
///
/// Fusing the board value and the given mask into one enum keeps the
/// "givens are never edited" invariant checkable wherever a cell is
/// touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue cell fixed at puzzle creation; never editable.
    Given(Digit),
    /// A digit entered by the player (or placed by a hint).
    Filled(Digit),
    /// An open cell.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit the cell holds, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D4).as_digit(), Some(Digit::D4));
        assert_eq!(CellState::Filled(Digit::D9).as_digit(), Some(Digit::D9));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Given(Digit::D1).is_empty());
    }
}
