//! Puzzle derivation from a complete solution.

use nonagrid_core::{DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

use crate::{Difficulty, PuzzleSeed, SolutionGenerator};

/// A generated puzzle: the playable problem grid plus its solution.
///
/// The problem grid is the solution with `cells_to_remove` cells cleared;
/// its non-empty cells are the puzzle's givens. The seed reproduces the
/// puzzle through [`PuzzleGenerator::generate_with_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with cells removed.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The difficulty profile the puzzle was carved with.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generator deriving playable puzzles for a fixed difficulty.
///
/// # Examples
///
/// ```
/// use nonagrid_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
///
/// // Same seed, same puzzle.
/// let again = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator carves for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh entropy-derived seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::from_entropy())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The seed drives both the solution search and the removal shuffle, so
    /// identical seeds yield identical puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = SolutionGenerator::generate(&mut rng);
        let problem = carve(&solution, self.difficulty.profile().cells_to_remove, &mut rng);
        log::debug!(
            "generated {} puzzle with {} givens (seed {seed})",
            self.difficulty,
            problem.filled_count(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}

/// Copies `solution` and clears `cells_to_remove` cells at shuffled
/// positions. Counts beyond the board size are clamped.
fn carve<R: Rng + ?Sized>(
    solution: &DigitGrid,
    cells_to_remove: usize,
    rng: &mut R,
) -> DigitGrid {
    let mut problem = solution.clone();
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    for pos in positions.into_iter().take(cells_to_remove.min(81)) {
        problem.set(pos, None);
    }
    problem
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_generate_respects_difficulty_profile() {
        for difficulty in Difficulty::ALL {
            let puzzle = PuzzleGenerator::new(difficulty).generate();
            let removed = difficulty.profile().cells_to_remove;

            assert_eq!(puzzle.difficulty, difficulty);
            assert!(puzzle.solution.is_valid_solution());
            assert_eq!(puzzle.problem.filled_count(), 81 - removed);
            // Every remaining cell agrees with the solution.
            for pos in Position::ALL {
                if let Some(digit) = puzzle.problem.get(pos) {
                    assert_eq!(puzzle.solution.get(pos), Some(digit));
                }
            }
        }
    }

    #[test]
    fn test_medium_puzzle_has_31_givens() {
        let puzzle = PuzzleGenerator::new(Difficulty::Medium).generate();
        assert_eq!(puzzle.problem.filled_count(), 31);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let seed = PuzzleSeed::from_bytes([42; 32]);
        let generator = PuzzleGenerator::new(Difficulty::Hard);
        let first = generator.generate_with_seed(seed);
        let second = generator.generate_with_seed(seed);
        assert_eq!(first, second);

        // Fresh seeds produce different puzzles.
        let other = generator.generate();
        assert_ne!(other.seed, seed);
    }

    #[test]
    fn test_carve_clamps_to_board_size() {
        let mut rng = Pcg64::seed_from_u64(3);
        let solution = SolutionGenerator::generate(&mut rng);
        let problem = carve(&solution, 200, &mut rng);
        assert_eq!(problem.filled_count(), 0);
    }

    #[test]
    fn test_carve_zero_removes_nothing() {
        let mut rng = Pcg64::seed_from_u64(4);
        let solution = SolutionGenerator::generate(&mut rng);
        let problem = carve(&solution, 0, &mut rng);
        assert_eq!(problem, solution);
    }
}
