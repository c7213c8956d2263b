//! The 9x9 grid and its peer queries.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, DigitSet, Position};

/// A 9x9 Sudoku grid.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell. A grid is a plain
/// owned value with no hidden shared state: solving routines borrow it
/// mutably for the duration of one solving session, and nothing else
/// observes it in between.
///
/// Construction goes through one of the typed entry points, [`FromStr`]
/// for the 81-character puzzle notation or `TryFrom<[[u8; 9]; 9]>` for an
/// already-shaped array, both converging on the same validated cell range.
///
/// # Examples
///
/// ```
/// use sudolve_core::{Grid, Position};
///
/// let grid: Grid = "\
///     974236158638591742125487936316754289742918563\
///     589362417867125394253649871491873625"
///     .parse()?;
///
/// assert!(grid.is_full());
/// assert_eq!(grid[Position::new(0, 0)].unwrap().value(), 9);
/// # Ok::<(), sudolve_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the set of digits present in the row, column, and 3x3 box
    /// of `pos`: the 20 peer cells, plus optionally the cell itself.
    ///
    /// `exclude_self` must be `true` when checking a *filled* cell against
    /// its own peers; otherwise the cell trivially "contains itself" and
    /// every filled cell looks contradictory. For candidate computation on
    /// an empty cell the flag is irrelevant (an empty cell contributes no
    /// digit) and `false` is passed by convention.
    #[must_use]
    pub fn peer_digits(&self, pos: Position, exclude_self: bool) -> DigitSet {
        let mut digits = DigitSet::new();
        let mut collect = |p: Position| {
            if exclude_self && p == pos {
                return;
            }
            if let Some(digit) = self[p] {
                digits.insert(digit);
            }
        };
        for i in 0..9 {
            collect(Position::new(i, pos.y()));
            collect(Position::new(pos.x(), i));
        }
        let origin = pos.box_origin();
        for dy in 0..3 {
            for dx in 0..3 {
                collect(Position::new(origin.x() + dx, origin.y() + dy));
            }
        }
        digits
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// Error parsing a grid from its 81-character puzzle notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected exactly 81 digit or '.' characters, found {found}")]
pub struct ParseGridError {
    /// Number of digit/`.` characters actually present in the input.
    pub found: usize,
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the 81-character puzzle notation.
    ///
    /// Every character that is a digit or `.` is a cell (`.` and `0` mean
    /// empty); everything else (separators, newlines, box decorations)
    /// is discarded. The input must contain exactly 81 cell characters.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; 81];
        let mut found = 0_usize;
        for ch in s.chars() {
            let cell = if ch == '.' {
                None
            } else if ch.is_ascii_digit() {
                Digit::new(ch as u8 - b'0')
            } else {
                continue;
            };
            if found < 81 {
                cells[found] = cell;
            }
            found += 1;
        }
        if found != 81 {
            return Err(ParseGridError { found });
        }
        Ok(Self { cells })
    }
}

/// Error constructing a grid from an array holding a value outside 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell value {value} at {position} is outside the range 0-9")]
pub struct GridValueError {
    /// The offending cell.
    pub position: Position,
    /// The rejected value.
    pub value: u8,
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = GridValueError;

    /// Builds a grid from a row-major array of values 0-9, 0 meaning empty.
    ///
    /// The 9x9 shape is enforced by the array type itself; only the value
    /// range needs checking here.
    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, GridValueError> {
        let mut grid = Self::new();
        for (y, row) in (0..).zip(&rows) {
            for (x, &value) in (0..).zip(row) {
                let position = Position::new(x, y);
                grid[position] = match value {
                    0 => None,
                    _ => Some(Digit::new(value).ok_or(GridValueError { position, value })?),
                };
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Renders the grid with `|` after columns 3 and 6 and a
    /// `---+---+---` rule after rows 3 and 6; empty cells print as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_str("\n")?;
            }
            if y == 3 || y == 6 {
                f.write_str("---+---+---\n")?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    f.write_str("|")?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("0")?,
                }
            }
        }
        Ok(())
    }
}
