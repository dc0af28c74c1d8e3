//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Generate a random puzzle or reproduce one from a seed
//! - Display the problem, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty level (easy, medium, hard, expert):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Reproduce a previously printed puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use clap::Parser;
use nonagrid_core::{DigitGrid, Position};
use nonagrid_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level to carve for.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Difficulty,

    /// Reproduce a specific puzzle by its 64-hex-char seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::new(args.difficulty);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!(
        "  {} ({} givens, {} hints)",
        puzzle.difficulty,
        puzzle.problem.filled_count(),
        puzzle.difficulty.profile().max_hints
    );
    println!();

    println!("Problem:");
    print_grid(&puzzle.problem);
    println!("  {}", puzzle.problem);
    println!();

    println!("Solution:");
    print_grid(&puzzle.solution);
    println!("  {}", puzzle.solution);
}

fn print_grid(grid: &DigitGrid) {
    for y in 0..9 {
        print!("  ");
        for x in 0..9 {
            match grid.get(Position::new(x, y)) {
                Some(digit) => print!("{digit} "),
                None => print!(". "),
            }
            if x == 2 || x == 5 {
                print!("| ");
            }
        }
        println!();
        if y == 2 || y == 5 {
            println!("  ------+-------+------");
        }
    }
}
