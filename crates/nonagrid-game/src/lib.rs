//! Game-play state for the nonagrid Sudoku engine.
//!
//! [`Game`] fuses the three grids of a puzzle instance (the mutable board,
//! the immutable given mask, and the stored solution) into one value object
//! whose methods enforce the play invariants: given cells are never edited,
//! conflicting digits are rejected before mutation, and the one-way
//! Active → Solved phase transition happens inside the object.
//!
//! [`MoveLog`] layers undo/redo on top of the previous-value metadata each
//! successful [`Game::apply_move`] returns.
//!
//! # Examples
//!
//! ```
//! use nonagrid_game::Game;
//! use nonagrid_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
//! let mut game = Game::new(puzzle);
//!
//! assert!(game.phase().is_active());
//! assert!(!game.is_complete());
//! ```

use derive_more::{Display, Error, IsVariant};
use nonagrid_core::{Digit, Position};

pub use self::{
    cell_state::CellState,
    game::{Game, HintPlacement},
    history::MoveLog,
};

mod cell_state;
mod game;
mod history;

/// Error cases for game-play operations.
///
/// All variants are non-fatal: the operation that produced the error did not
/// mutate any state, and the caller can simply try something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Attempted to edit a given (clue) cell.
    #[display("cannot modify a given cell")]
    GivenCell,
    /// The digit already appears in the same row, column, or box.
    #[display("digit conflicts with an existing cell")]
    ConflictingDigit,
    /// The difficulty's hint budget is used up.
    #[display("no hints remaining")]
    HintsExhausted,
    /// A hint was requested but the board has no empty cell.
    #[display("no empty cells to hint")]
    NoEmptyCells,
    /// The puzzle is already solved; no further input is accepted.
    #[display("puzzle is already solved")]
    PuzzleSolved,
}

/// The life-cycle phase of a puzzle instance.
///
/// The transition from Active to Solved is one-way; only a new [`Game`]
/// starts a fresh Active instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum GamePhase {
    /// Accepting moves and hints.
    #[default]
    Active,
    /// The board is complete (or the solution was revealed).
    Solved,
}

/// Record of one successful board mutation, as returned by
/// [`Game::apply_move`].
///
/// Carries the prior cell value so callers can maintain an undo log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The mutated cell.
    pub position: Position,
    /// The player value the cell held before the move.
    pub previous: Option<Digit>,
    /// The value the cell holds after the move.
    pub new: Option<Digit>,
}
