//! Strategy selection, deadline enforcement, and outcome classification.

use std::{str::FromStr, time::Duration};

use sudolve_core::{Grid, validate};

use crate::{ConfigError, Deadline, Propagation, Search, SolveError, propagate, search};

/// Minimum number of givens for a 9x9 puzzle to have a unique solution.
const MINIMUM_CLUES: usize = 17;

/// Which solving components a [`Solver`] may use.
///
/// Parsed from its textual name via [`FromStr`]; any other name is a
/// configuration error.
///
/// # Examples
///
/// ```
/// use sudolve_solver::Strategy;
///
/// let strategy: Strategy = "constraint-propagation".parse()?;
/// assert_eq!(strategy, Strategy::ConstraintPropagation);
/// assert!("guesswork".parse::<Strategy>().is_err());
/// # Ok::<(), sudolve_solver::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Constraint propagation first, then backtracking if it stalls.
    #[default]
    Auto,
    /// Naked-single propagation only; stalling is a reportable outcome,
    /// not a failure.
    ConstraintPropagation,
    /// Backtracking search only.
    Backtracking,
}

impl Strategy {
    const fn permits_propagation(self) -> bool {
        !matches!(self, Self::Backtracking)
    }

    const fn permits_search(self) -> bool {
        !matches!(self, Self::ConstraintPropagation)
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "auto" => Ok(Self::Auto),
            "constraint-propagation" | "constraint_propagation" => Ok(Self::ConstraintPropagation),
            "backtracking" => Ok(Self::Backtracking),
            _ => Err(ConfigError::UnknownStrategy { name: s.to_owned() }),
        }
    }
}

/// How a solve call ended without proving the puzzle unsolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The grid is complete and contradiction-free.
    Solved,
    /// Propagation alone could not finish the grid. Only reachable under
    /// [`Strategy::ConstraintPropagation`]; `Auto` falls through to search
    /// instead.
    Stalled,
    /// The deadline elapsed before a definitive answer. Never to be
    /// confused with unsolvability: an unfinished search proves nothing.
    TimedOut,
}

/// Orchestrates propagation and search over one grid under a strategy and
/// a time limit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use sudolve_core::Grid;
/// use sudolve_solver::{Outcome, Solver, Strategy};
///
/// let solver = Solver::new(Strategy::Auto, Duration::from_secs(60))?;
/// let mut grid: Grid = "\
///     3.542.81.4879.15.6.29.5637485.793.416132.8957\
///     .74.6528.2413.9.655.867.192.965124.8"
///     .parse()
///     .unwrap();
///
/// let outcome = solver.solve(&mut grid).expect("puzzle is solvable");
/// assert_eq!(outcome, Outcome::Solved);
/// assert!(grid.is_full());
/// # Ok::<(), sudolve_solver::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    strategy: Strategy,
    max_solve_time: Duration,
}

impl Solver {
    /// Creates a solver with the given strategy and time limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeLimit`] if `max_solve_time` is zero.
    /// (A `Duration` cannot be negative, so zero is the only rejectable
    /// value.)
    pub fn new(strategy: Strategy, max_solve_time: Duration) -> Result<Self, ConfigError> {
        if max_solve_time.is_zero() {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self {
            strategy,
            max_solve_time,
        })
    }

    /// Solves `grid` in place.
    ///
    /// The grid is scanned for contradictions once up front; during solving
    /// the no-duplicate invariant is kept true by construction, since both
    /// the propagator and the search only place digits absent from the
    /// target cell's peers. On success the grid holds the completed
    /// solution; on any error or timeout it holds the givens plus whatever
    /// the propagator legitimately committed, never a trial digit.
    ///
    /// Grids with fewer than 17 givens necessarily have multiple solutions;
    /// they are solved anyway (the deterministic heuristic and ascending
    /// value order pick one), with a warning logged.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when the puzzle provably has no solution:
    /// duplicate givens, a starved cell, or exhausted search.
    pub fn solve(&self, grid: &mut Grid) -> Result<Outcome, SolveError> {
        validate(grid)?;

        let clues = grid.clue_count();
        if clues < MINIMUM_CLUES {
            log::warn!(
                "puzzle has {clues} clues; fewer than {MINIMUM_CLUES} means multiple solutions exist"
            );
        }

        if grid.is_full() {
            // Validated above, so a full grid is already a solution.
            return Ok(Outcome::Solved);
        }

        let deadline = Deadline::after(self.max_solve_time);

        if self.strategy.permits_propagation() {
            match propagate(grid, &deadline)? {
                Propagation::Solved => {
                    debug_assert!(validate(grid).is_ok());
                    return Ok(Outcome::Solved);
                }
                Propagation::TimedOut => return Ok(Outcome::TimedOut),
                Propagation::Stalled => {
                    if self.strategy.permits_search() {
                        log::debug!("propagation stalled; falling back to search");
                    }
                }
            }
        }

        if self.strategy.permits_search() {
            return match search(grid, &deadline) {
                Search::Solved => {
                    debug_assert!(validate(grid).is_ok());
                    Ok(Outcome::Solved)
                }
                Search::TimedOut => Ok(Outcome::TimedOut),
                Search::Exhausted => Err(SolveError::Unsolvable),
            };
        }

        Ok(Outcome::Stalled)
    }
}
