//! Complete-solution generation.

use nonagrid_core::{Digit, DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Known-valid solution substituted if the backtracking search ever fails.
///
/// Unreachable for a standard 9x9 grid, but the generator must never leave a
/// caller without a playable grid.
const FALLBACK_SOLUTION: &str =
    "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

/// Generator for complete, valid solution grids.
///
/// The three diagonal 3x3 boxes share no row, column, or box with each
/// other, so they are first filled independently with random permutations of
/// 1-9. The remaining cells are completed by a randomized backtracking
/// search that walks the empty cells in row-major order.
///
/// The search keeps an explicit stack of remaining-candidate frames rather
/// than recursing, one frame per placed cell.
///
/// # Examples
///
/// ```
/// use nonagrid_generator::SolutionGenerator;
///
/// let mut rng = rand::rng();
/// let solution = SolutionGenerator::generate(&mut rng);
/// assert!(solution.is_filled());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionGenerator;

impl SolutionGenerator {
    /// Generates a complete, valid solution grid.
    ///
    /// If the search exhausts every candidate (a theoretical path only), a
    /// hardcoded known-valid grid is substituted so the result is always
    /// playable.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
        let grid = Self::try_generate(rng).unwrap_or_else(|| {
            log::error!("solution search exhausted all candidates, using fallback grid");
            fallback_solution()
        });
        debug_assert!(grid.is_valid_solution());
        grid
    }

    fn try_generate<R: Rng + ?Sized>(rng: &mut R) -> Option<DigitGrid> {
        let mut grid = DigitGrid::new();
        for box_index in [0, 4, 8] {
            let mut digits = Digit::ALL;
            digits.shuffle(rng);
            for (cell, digit) in (0..9).zip(digits) {
                grid.set(Position::from_box(box_index, cell), Some(digit));
            }
        }
        Self::complete(&mut grid, rng).then_some(grid)
    }

    /// Fills every empty cell of `grid`, trying candidate digits in random
    /// order. Returns `false` if no assignment satisfies the constraints.
    fn complete<R: Rng + ?Sized>(grid: &mut DigitGrid, rng: &mut R) -> bool {
        let open: Vec<Position> = grid.empty_positions().collect();
        if open.is_empty() {
            return true;
        }

        let mut frames = vec![shuffled_digits(rng)];
        let mut backtracks = 0_usize;
        while !frames.is_empty() {
            let depth = frames.len() - 1;
            let pos = open[depth];
            match frames[depth].pop() {
                Some(digit) => {
                    if grid.conflicts(pos, digit) {
                        continue;
                    }
                    grid.set(pos, Some(digit));
                    if depth + 1 == open.len() {
                        log::debug!(
                            "solution search placed {} cells with {backtracks} backtracks",
                            open.len()
                        );
                        return true;
                    }
                    frames.push(shuffled_digits(rng));
                }
                None => {
                    // This cell is a dead end; undo the parent placement and
                    // resume with its remaining candidates.
                    frames.pop();
                    backtracks += 1;
                    if let Some(parent) = frames.len().checked_sub(1) {
                        grid.set(open[parent], None);
                    }
                }
            }
        }
        false
    }
}

fn shuffled_digits<R: Rng + ?Sized>(rng: &mut R) -> Vec<Digit> {
    let mut digits = Digit::ALL.to_vec();
    digits.shuffle(rng);
    digits
}

pub(crate) fn fallback_solution() -> DigitGrid {
    FALLBACK_SOLUTION
        .parse()
        .expect("fallback solution string is valid")
}
