//! Board position types.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to row-major cell indices 0-80.
///
/// # Examples
///
/// ```
/// use nonagrid_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
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
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within
    /// that box (0-8, row-major within the box).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
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

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3x3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the 20 peers of this position: the other cells of its row,
    /// column, and 3x3 box.
    ///
    /// The position itself is never included, so the result is suitable for
    /// conflict scans when the target cell still holds a value.
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut n = 0;
        for i in 0..9 {
            if i != self.x {
                peers[n] = Self { x: i, y: self.y };
                n += 1;
            }
            if i != self.y {
                peers[n] = Self { x: self.x, y: i };
                n += 1;
            }
        }
        let (x0, y0) = (self.x / 3 * 3, self.y / 3 * 3);
        for y in y0..y0 + 3 {
            for x in x0..x0 + 3 {
                if x != self.x && y != self.y {
                    peers[n] = Self { x, y };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
