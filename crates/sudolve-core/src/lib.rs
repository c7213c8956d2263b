//! Core data model for the sudolve solving engine.
//!
//! This crate owns the representation of a Sudoku puzzle and the queries
//! the solving engine is built on:
//!
//! - [`digit`]: type-safe digits 1-9 ([`Digit`])
//! - [`digit_set`]: digit subsets as 9-bit masks ([`DigitSet`])
//! - [`position`]: cell addresses with row/column/box arithmetic
//!   ([`Position`])
//! - [`grid`]: the 9x9 board, peer queries, parsing, and rendering
//!   ([`Grid`])
//! - [`candidates`]: per-empty-cell remaining-digit tracking
//!   ([`Candidates`])
//! - [`validate`]: row/column/box contradiction detection
//!
//! No solving logic lives here; the `sudolve-solver` crate drives these
//! types. The crate performs no file or terminal I/O: parsing consumes a
//! string the caller already holds, and rendering produces one.
//!
//! # Examples
//!
//! ```
//! use sudolve_core::{Candidates, Grid, Position, validate};
//!
//! let grid: Grid = "\
//!     3.542.81.4879.15.6.29.5637485.793.416132.8957\
//!     .74.6528.2413.9.655.867.192.965124.8"
//!     .parse()?;
//!
//! validate(&grid).expect("no duplicate givens");
//!
//! let candidates = Candidates::from_grid(&grid).expect("no starved cell");
//! assert!(!candidates.at(Position::new(1, 0)).is_empty());
//! # Ok::<(), sudolve_core::ParseGridError>(())
//! ```

pub mod candidates;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod validate;

pub use self::{
    candidates::{Candidates, NoCandidatesError},
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridValueError, ParseGridError},
    position::Position,
    validate::{ContradictionError, validate},
};
