//! An 81-cell grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, DigitSet, Position};

/// A 9x9 grid of optional digits in row-major order.
///
/// `None` marks an empty cell. The grid parses from and displays as an
/// 81-character string where `.` (or `0`) is an empty cell and `1`-`9` are
/// digits, which keeps test fixtures and diagnostics compact.
///
/// # Examples
///
/// ```
/// use nonagrid_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_none())
    }

    fn unit_is_full(&self, cells: impl Iterator<Item = Position>) -> bool {
        cells.filter_map(|pos| self.get(pos)).collect::<DigitSet>() == DigitSet::FULL
    }

    /// Returns whether the grid is a complete, valid solution: every row,
    /// column, and 3x3 box holds exactly the digits 1-9.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        (0_u8..9).all(|i| {
            self.unit_is_full((0..9).map(|x| Position::new(x, i)))
                && self.unit_is_full((0..9).map(|y| Position::new(i, y)))
                && self.unit_is_full((0..9).map(|cell| Position::from_box(i, cell)))
        })
    }

    /// Returns whether placing `digit` at `pos` would conflict with another
    /// cell in the same row, column, or 3x3 box.
    ///
    /// The cell at `pos` itself is never scanned, so a value already stored
    /// there does not count as a conflict with itself.
    #[must_use]
    pub fn conflicts(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers()
            .into_iter()
            .any(|peer| self.get(peer) == Some(digit))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    #[display("grid string must be 81 characters, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// The input contained a character other than `.`, `0`, or `1`-`9`.
    #[display("invalid cell character {_0:?}")]
    BadCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 81 {
            return Err(ParseGridError::BadLength(s.chars().count()));
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(s.chars()) {
            let cell = match c {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseGridError::BadCharacter(c)),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_parse_display_round_trip() {
        let grid: DigitGrid = FIXTURE.parse().expect("valid grid string");
        assert_eq!(grid.to_string(), FIXTURE);
        assert!(grid.is_filled());
        assert_eq!(grid.filled_count(), 81);
    }

    #[test]
    fn test_parse_accepts_dot_and_zero_as_empty() {
        let dotted: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
        let zeroed: DigitGrid = format!("5{}", "0".repeat(80)).parse().unwrap();
        assert_eq!(dotted, zeroed);
        assert_eq!(dotted.filled_count(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::BadLength(3))
        );
        let bad = format!("x{}", ".".repeat(80));
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(ParseGridError::BadCharacter('x'))
        );
    }

    #[test]
    fn test_empty_positions_tracks_set_and_clear() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.empty_positions().count(), 81);

        let pos = Position::new(3, 6);
        grid.set(pos, Some(Digit::D2));
        assert_eq!(grid.empty_positions().count(), 80);
        assert!(grid.empty_positions().all(|p| p != pos));

        grid.set(pos, None);
        assert_eq!(grid.empty_positions().count(), 81);
    }

    #[test]
    fn test_is_valid_solution_accepts_only_complete_valid_grids() {
        let mut grid: DigitGrid = FIXTURE.parse().expect("valid grid string");
        assert!(grid.is_valid_solution());

        // A single duplicated digit breaks its row, column, and box.
        let pos = Position::new(0, 0);
        grid.set(pos, Some(Digit::D9));
        assert!(!grid.is_valid_solution());

        // An incomplete grid is never a valid solution.
        grid.set(pos, None);
        assert!(!grid.is_valid_solution());
        assert!(!DigitGrid::new().is_valid_solution());
    }

    #[test]
    fn test_conflicts_scans_row_column_and_box() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(2, 0), Some(Digit::D7));

        // Same row, same column, same box.
        assert!(grid.conflicts(Position::new(5, 0), Digit::D7));
        assert!(grid.conflicts(Position::new(2, 8), Digit::D7));
        assert!(grid.conflicts(Position::new(1, 1), Digit::D7));

        // Unrelated cell and unrelated digit.
        assert!(!grid.conflicts(Position::new(5, 5), Digit::D7));
        assert!(!grid.conflicts(Position::new(5, 0), Digit::D6));

        // The cell itself is not its own conflict.
        assert!(!grid.conflicts(Position::new(2, 0), Digit::D7));
    }
}
