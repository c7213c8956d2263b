//! Command-line front end for the sudolve engine.
//!
//! Loads a puzzle from an inline string or a file, solves it, and renders
//! the result.
//!
//! # Usage
//!
//! ```sh
//! sudolve "3.542.81.4879.15.6.29.5637485.793.416132.8957.74.6528.2413.9.655.867.192.965124.8"
//! ```
//!
//! From a file, with an explicit strategy and time limit:
//!
//! ```sh
//! sudolve --file puzzle.txt --strategy backtracking --max-solve-time 10
//! ```
//!
//! The input must contain exactly 81 digits or `.` characters (`.` and `0`
//! mean empty); separators and newlines are ignored. Progress and warnings
//! are logged through `env_logger` (set `RUST_LOG=info` to see them).
//!
//! Exit codes: 0 solved, 1 error (invalid input, no solution, bad
//! configuration), 2 not solved within the configured strategy or time
//! limit.

use std::{
    fs,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

use clap::{Parser, ValueEnum};
use sudolve_core::{Grid, ParseGridError};
use sudolve_solver::{Outcome, Solver, Strategy};

/// Solve a 9x9 Sudoku puzzle.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 digits or `.` characters; separators are ignored.
    #[arg(value_name = "PUZZLE", required_unless_present = "file")]
    puzzle: Option<String>,

    /// Read the puzzle from a file instead.
    #[arg(long, value_name = "PATH", conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Solving strategy.
    #[arg(long, value_enum, value_name = "STRATEGY", default_value = "auto")]
    strategy: StrategyArg,

    /// Time limit in seconds; must be greater than zero.
    #[arg(long, value_name = "SECONDS", default_value_t = 60.0)]
    max_solve_time: f64,
}

/// Strategy flag values, mapped onto [`Strategy`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Constraint propagation first, then backtracking if it stalls.
    Auto,
    /// Naked-single propagation only.
    ConstraintPropagation,
    /// Backtracking search only.
    Backtracking,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::ConstraintPropagation => Strategy::ConstraintPropagation,
            StrategyArg::Backtracking => Strategy::Backtracking,
        }
    }
}

/// Errors loading a puzzle into a grid.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum LoadError {
    /// The puzzle file could not be read.
    #[display("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input did not contain a well-formed puzzle.
    #[from]
    Parse(ParseGridError),
}

fn load_grid(args: &Args) -> Result<Grid, LoadError> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?,
        None => args
            .puzzle
            .clone()
            .expect("clap guarantees a puzzle source"),
    };
    Ok(text.parse()?)
}

fn run(args: &Args) -> Result<Outcome, Box<dyn std::error::Error>> {
    let mut grid = load_grid(args)?;

    // A non-positive flag value maps to a zero duration, which the solver
    // rejects as a configuration error.
    let limit = if args.max_solve_time > 0.0 {
        Duration::from_secs_f64(args.max_solve_time)
    } else {
        Duration::ZERO
    };
    let solver = Solver::new(args.strategy.into(), limit)?;

    let start = Instant::now();
    let outcome = solver.solve(&mut grid)?;
    let elapsed = start.elapsed();

    match outcome {
        Outcome::Solved => log::info!("puzzle solved in {elapsed:.3?}"),
        Outcome::Stalled => {
            log::warn!("not solved by constraint propagation alone; consider backtracking");
        }
        Outcome::TimedOut => {
            log::warn!(
                "time limit of {}s reached; consider increasing --max-solve-time",
                args.max_solve_time
            );
        }
    }
    println!("{grid}");
    Ok(outcome)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::Solved) => {}
        Ok(Outcome::Stalled | Outcome::TimedOut) => process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
