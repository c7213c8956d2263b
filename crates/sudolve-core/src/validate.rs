//! Row/column/box contradiction detection.

use crate::{Grid, Position};

/// Checks every filled cell of `grid` against its 20 peers.
///
/// A grid is contradiction-free when no filled cell's digit appears among
/// its peers. Complete grids that pass this check are solutions; partial
/// grids that pass it are at least not already broken.
///
/// # Errors
///
/// Returns [`ContradictionError`] citing the first cell (row-major) whose
/// digit also appears in its row, column, or box.
///
/// # Examples
///
/// ```
/// use sudolve_core::{Grid, validate};
///
/// let grid: Grid = "\
///     974236158638591742125487936316754289742918563\
///     589362417867125394253649871491873625"
///     .parse()
///     .unwrap();
/// assert!(validate(&grid).is_ok());
/// ```
pub fn validate(grid: &Grid) -> Result<(), ContradictionError> {
    for pos in Position::ALL {
        if let Some(digit) = grid[pos] {
            if grid.peer_digits(pos, true).contains(digit) {
                return Err(ContradictionError { position: pos });
            }
        }
    }
    Ok(())
}

/// Two peer cells share a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("duplicate digit at {position}")]
pub struct ContradictionError {
    /// A cell participating in the conflict.
    pub position: Position,
}
