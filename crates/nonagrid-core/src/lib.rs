//! Core data structures for the nonagrid Sudoku engine.
//!
//! This crate provides the fundamental value types shared by the generator
//! and game crates:
//!
//! - [`digit`]: type-safe Sudoku digits 1-9
//! - [`position`]: board coordinates with row/column/box navigation
//! - [`digit_set`]: a 9-bit set of digits
//! - [`digit_grid`]: an 81-cell grid of optional digits with a string
//!   representation for fixtures and diagnostics
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod position;

pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    position::Position,
};
