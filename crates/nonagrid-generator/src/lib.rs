//! Puzzle generation for the nonagrid Sudoku engine.
//!
//! Generation runs in two stages:
//!
//! 1. [`SolutionGenerator`] produces a complete, valid solution grid by
//!    filling the three diagonal 3x3 boxes with random permutations and
//!    completing the rest with a randomized, stack-based backtracking
//!    search.
//! 2. [`PuzzleGenerator`] copies the solution and clears a shuffled
//!    selection of cells according to a [`Difficulty`] profile, yielding a
//!    [`GeneratedPuzzle`] with both grids.
//!
//! Every puzzle is driven by a [`PuzzleSeed`]; the same seed always
//! reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use nonagrid_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let puzzle = generator.generate();
//!
//! assert_eq!(puzzle.problem.filled_count(), 31);
//! assert!(puzzle.solution.is_filled());
//! ```

pub use self::{
    difficulty::{Difficulty, DifficultyProfile, ParseDifficultyError},
    puzzle::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solution::SolutionGenerator,
};

mod difficulty;
mod puzzle;
mod seed;
mod solution;
