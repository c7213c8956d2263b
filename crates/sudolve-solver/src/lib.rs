//! Solving engine for 9x9 Sudoku puzzles.
//!
//! The engine combines two components over the `sudolve-core` data model:
//!
//! - [`propagate`]: naked-single constraint propagation to a fixpoint
//! - [`search`]: depth-first backtracking with strict undo
//!
//! [`Solver`] orchestrates them under a [`Strategy`] and a cooperative
//! [`Deadline`], classifying every run as a completed grid, a proof of
//! unsolvability ([`SolveError`]), or a non-answer ([`Outcome::Stalled`] /
//! [`Outcome::TimedOut`]).
//!
//! Everything is single-threaded and synchronous: one mutable grid buffer
//! is shared by the whole run, and the only cancellation points are the
//! deadline checks inside the propagation loop and the search recursion.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use sudolve_core::Grid;
//! use sudolve_solver::{Outcome, Solver, Strategy};
//!
//! let mut grid: Grid = "\
//!     ..2.3...8.....8....31.2.....6..5.27..1.....5.\
//!     2.4.6..31....8.6.5.......13..531.4.."
//!     .parse()
//!     .unwrap();
//!
//! let solver = Solver::new(Strategy::Auto, Duration::from_secs(60))?;
//! assert_eq!(solver.solve(&mut grid)?, Outcome::Solved);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    deadline::Deadline,
    error::{ConfigError, SolveError},
    propagate::{Propagation, propagate},
    search::{Search, search},
    solver::{Outcome, Solver, Strategy},
};

mod deadline;
mod error;
mod propagate;
mod search;
mod solver;
