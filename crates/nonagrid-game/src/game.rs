//! The game value object.

use nonagrid_core::{Digit, DigitGrid, Position};
use nonagrid_generator::{Difficulty, GeneratedPuzzle};
use rand::{Rng, seq::IndexedRandom as _};

use crate::{CellState, GameError, GamePhase, Move};

/// A Sudoku game session.
///
/// Owns the live board (with its given mask folded into [`CellState`]), the
/// stored solution, the difficulty's hint budget, and the
/// [`GamePhase`] machine. Every mutation goes through a method that checks
/// the play invariants first, so an error never leaves the board changed.
///
/// # Examples
///
/// ```
/// use nonagrid_game::Game;
/// use nonagrid_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Medium).generate();
/// let game = Game::new(puzzle);
///
/// assert_eq!(game.board().filled_count(), 31);
/// assert!(game.phase().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    difficulty: Difficulty,
    phase: GamePhase,
    hints_used: u32,
}

/// A hint's outcome: which cell was filled with what, and the running hint
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPlacement {
    /// The cell the hint filled.
    pub position: Position,
    /// The solution digit placed there.
    pub digit: Digit,
    /// Hints taken so far, including this one.
    pub hints_used: u32,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Non-empty problem cells become givens; the rest start empty. The
    /// game begins in the Active phase.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        Self::from_grids(&problem, &solution, difficulty)
    }

    /// Creates a game from a problem grid and its solution.
    ///
    /// This is the restore path for callers that persist game state
    /// externally, and the fixture path for tests. The grids are trusted:
    /// no consistency check is made between `problem` and `solution`.
    #[must_use]
    pub fn from_grids(problem: &DigitGrid, solution: &DigitGrid, difficulty: Difficulty) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution: solution.clone(),
            difficulty,
            phase: GamePhase::Active,
            hints_used: 0,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns a snapshot of the board as a plain digit grid (givens and
    /// player input alike), for rendering or persistence.
    #[must_use]
    pub fn board(&self) -> DigitGrid {
        let mut board = DigitGrid::new();
        for pos in Position::ALL {
            board.set(pos, self.cell(pos).as_digit());
        }
        board
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the difficulty this game was created with.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the current life-cycle phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the number of hints taken so far.
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns the number of hints still available.
    #[must_use]
    pub const fn hints_remaining(&self) -> u32 {
        self.difficulty.profile().max_hints - self.hints_used
    }

    /// Returns whether every cell holds a digit.
    ///
    /// Completeness does not re-validate correctness: every player mutation
    /// was validated before it landed, and hint/reveal fills come straight
    /// from the solution.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns whether `digit` could be placed at `pos` without duplicating
    /// a digit in the same row, column, or 3x3 box.
    ///
    /// The cell at `pos` itself is never scanned, so replacing a cell's own
    /// value does not conflict with itself.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        !pos.house_peers()
            .into_iter()
            .any(|peer| self.cell(peer).as_digit() == Some(digit))
    }

    /// Applies a player move: `Some(digit)` fills the cell, `None` clears
    /// it.
    ///
    /// Clearing always succeeds on a non-given cell. Filling validates the
    /// placement first and mutates only on success. A move that completes
    /// the board transitions the game to the Solved phase.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleSolved`] if the game is already solved,
    /// [`GameError::GivenCell`] if `pos` is a clue cell, and
    /// [`GameError::ConflictingDigit`] if `digit` duplicates a digit in the
    /// same row, column, or box. The board is unchanged in every error
    /// case.
    pub fn apply_move(&mut self, pos: Position, digit: Option<Digit>) -> Result<Move, GameError> {
        if self.phase.is_solved() {
            return Err(GameError::PuzzleSolved);
        }
        let previous = match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::GivenCell),
            CellState::Filled(digit) => Some(digit),
            CellState::Empty => None,
        };
        match digit {
            Some(digit) => {
                if !self.is_valid_placement(pos, digit) {
                    return Err(GameError::ConflictingDigit);
                }
                self.cells[pos.index()] = CellState::Filled(digit);
            }
            None => self.cells[pos.index()] = CellState::Empty,
        }
        self.update_phase();
        Ok(Move {
            position: pos,
            previous,
            new: digit,
        })
    }

    /// Reports every filled cell whose digit disagrees with the solution,
    /// without revealing what the correct digits are.
    #[must_use]
    pub fn check_errors(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| {
                self.cell(*pos)
                    .as_digit()
                    .is_some_and(|digit| self.solution.get(*pos) != Some(digit))
            })
            .collect()
    }

    /// Fills one uniformly random empty cell with its solution digit.
    ///
    /// A hint that completes the board transitions the game to the Solved
    /// phase.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleSolved`] if the game is already solved,
    /// [`GameError::HintsExhausted`] if the difficulty's hint budget is
    /// used up, and [`GameError::NoEmptyCells`] if the board is full.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<HintPlacement, GameError> {
        if self.phase.is_solved() {
            return Err(GameError::PuzzleSolved);
        }
        if self.hints_used >= self.difficulty.profile().max_hints {
            return Err(GameError::HintsExhausted);
        }
        let empties: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect();
        let Some(&pos) = empties.choose(rng) else {
            return Err(GameError::NoEmptyCells);
        };
        let digit = self
            .solution
            .get(pos)
            .expect("solution grid is complete");
        self.cells[pos.index()] = CellState::Filled(digit);
        self.hints_used += 1;
        self.update_phase();
        Ok(HintPlacement {
            position: pos,
            digit,
            hints_used: self.hints_used,
        })
    }

    /// Fills every non-given cell from the solution and gives up the game:
    /// the phase becomes Solved and no further input is accepted.
    pub fn reveal_solution(&mut self) {
        for pos in Position::ALL {
            if !self.cell(pos).is_given() {
                let digit = self
                    .solution
                    .get(pos)
                    .expect("solution grid is complete");
                self.cells[pos.index()] = CellState::Filled(digit);
            }
        }
        self.phase = GamePhase::Solved;
        log::debug!("solution revealed, game over");
    }

    /// Writes a logged value back to a cell, for undo/redo replay.
    ///
    /// Skips conflict validation (the logged value was valid when recorded)
    /// but still refuses given cells.
    pub(crate) fn restore(&mut self, pos: Position, value: Option<Digit>) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::GivenCell);
        }
        self.cells[pos.index()] = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        Ok(())
    }

    fn update_phase(&mut self) {
        if self.phase.is_active() && self.is_complete() {
            self.phase = GamePhase::Solved;
            log::debug!("board complete, puzzle solved");
        }
    }
}
