//! Per-cell candidate tracking.

use crate::{DigitSet, Grid, Position};

/// The remaining candidate digits for every empty cell of a grid.
///
/// A snapshot derived from one grid state: each empty cell may hold any
/// digit not already present among its 20 peers. The sets for filled cells
/// are empty and carry no meaning. The propagator rebuilds this snapshot on
/// every pass rather than updating it incrementally; the search never
/// mutates it.
///
/// # Examples
///
/// ```
/// use sudolve_core::{Candidates, Grid, Position};
///
/// let grid: Grid = "\
///     3.542.81.4879.15.6.29.5637485.793.416132.8957\
///     .74.6528.2413.9.655.867.192.965124.8"
///     .parse()
///     .unwrap();
/// let candidates = Candidates::from_grid(&grid)?;
///
/// // (1, 0) is empty and its peers rule out everything but 6
/// let set = candidates.at(Position::new(1, 0));
/// assert_eq!(set.len(), 1);
/// # Ok::<(), sudolve_core::NoCandidatesError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Candidates {
    sets: [DigitSet; 81],
}

impl Candidates {
    /// Computes the candidate set of every empty cell of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`NoCandidatesError`] for the first empty cell (row-major)
    /// whose peers already use all nine digits. Such a cell proves the grid
    /// cannot be completed from this state, so the computation fails fast
    /// instead of letting search discover the dead end after exponential
    /// work.
    pub fn from_grid(grid: &Grid) -> Result<Self, NoCandidatesError> {
        let mut sets = [DigitSet::EMPTY; 81];
        for pos in Position::ALL {
            if grid[pos].is_some() {
                continue;
            }
            let set = grid.peer_digits(pos, false).complement();
            if set.is_empty() {
                return Err(NoCandidatesError { position: pos });
            }
            sets[pos.index()] = set;
        }
        Ok(Self { sets })
    }

    /// Candidate set of the cell at `pos`.
    ///
    /// Empty for filled cells.
    #[inline]
    #[must_use]
    pub fn at(&self, pos: Position) -> DigitSet {
        self.sets[pos.index()]
    }
}

/// An empty cell has no remaining candidate digits.
///
/// The grid cannot be completed from the state that produced this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no candidate digits remain for the empty cell at {position}")]
pub struct NoCandidatesError {
    /// The starved cell.
    pub position: Position,
}
