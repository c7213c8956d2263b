//! Naked-single constraint propagation.

use sudolve_core::{Candidates, Digit, Grid, Position};

use crate::{Deadline, SolveError};

/// How a propagation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// Every cell is filled; the grid holds a solution.
    Solved,
    /// No naked single remains; the grid is incomplete but not necessarily
    /// unsolvable.
    Stalled,
    /// The deadline elapsed before propagation reached its fixpoint.
    TimedOut,
}

/// Repeatedly commits naked singles until the grid is full or none remain.
///
/// Each pass rebuilds every empty cell's candidates from the current grid
/// and commits the first cell (row-major) whose candidate set is a
/// singleton, then starts over; committing one digit can create the next
/// singleton. A pass that finds no singleton ends the run as
/// [`Propagation::Stalled`].
///
/// Only naked singles are applied. Hidden singles, pairs, and the other
/// human techniques are deliberately outside this engine; grids they would
/// crack fall through to the backtracking search instead.
///
/// # Errors
///
/// Returns [`SolveError::NoCandidates`] as soon as any empty cell has no
/// remaining candidate, which proves the grid cannot be completed.
pub fn propagate(grid: &mut Grid, deadline: &Deadline) -> Result<Propagation, SolveError> {
    loop {
        if grid.is_full() {
            return Ok(Propagation::Solved);
        }
        if deadline.elapsed() {
            return Ok(Propagation::TimedOut);
        }
        let candidates = Candidates::from_grid(grid)?;
        let Some((pos, digit)) = first_naked_single(grid, &candidates) else {
            return Ok(Propagation::Stalled);
        };
        grid[pos] = Some(digit);
    }
}

/// First empty cell in row-major order whose candidate set is a singleton.
fn first_naked_single(grid: &Grid, candidates: &Candidates) -> Option<(Position, Digit)> {
    Position::ALL
        .into_iter()
        .filter(|&pos| grid[pos].is_none())
        .find_map(|pos| candidates.at(pos).as_single().map(|digit| (pos, digit)))
}
