//! Solver error types.

use sudolve_core::{ContradictionError, NoCandidatesError};

/// Reasons a solve call can fail outright.
///
/// Every variant is a definitive negative answer about the puzzle itself.
/// A deadline running out is *not* an error: an unfinished search proves
/// nothing, so it is reported as [`Outcome::TimedOut`] instead.
///
/// [`Outcome::TimedOut`]: crate::Outcome::TimedOut
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum SolveError {
    /// Two peer cells already share a digit; the input was never solvable.
    #[display("puzzle is invalid: {_0}")]
    #[from]
    Contradiction(#[error(source)] ContradictionError),
    /// A reachable state left an empty cell with no candidate digits.
    #[display("puzzle has no solution: {_0}")]
    #[from]
    NoCandidates(#[error(source)] NoCandidatesError),
    /// Backtracking exhausted every branch from the root.
    #[display("puzzle has no solution: search exhausted all branches")]
    Unsolvable,
}

/// Rejected solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The strategy name is not one of the known strategies.
    #[display(
        "unknown strategy `{name}`; expected `auto`, `constraint-propagation`, or `backtracking`"
    )]
    UnknownStrategy {
        /// The rejected name.
        name: String,
    },
    /// The time limit must be greater than zero.
    #[display("max solve time must be greater than zero")]
    ZeroTimeLimit,
}

#[cfg(test)]
mod tests {
    use sudolve_core::Position;

    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SolveError::from(ContradictionError {
            position: Position::new(5, 3),
        });
        assert_eq!(
            err.to_string(),
            "puzzle is invalid: duplicate digit at row 3, column 5"
        );

        let err = SolveError::from(NoCandidatesError {
            position: Position::new(0, 4),
        });
        assert_eq!(
            err.to_string(),
            "puzzle has no solution: no candidate digits remain for the empty cell at row 4, column 0"
        );

        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "puzzle has no solution: search exhausted all branches"
        );

        let err = ConfigError::UnknownStrategy {
            name: "guess".to_owned(),
        };
        assert!(err.to_string().contains("`guess`"));
        assert_eq!(
            ConfigError::ZeroTimeLimit.to_string(),
            "max solve time must be greater than zero"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let inner = ContradictionError {
            position: Position::new(1, 1),
        };
        let err = SolveError::from(inner);
        assert!(err.source().is_some());
        assert!(SolveError::Unsolvable.source().is_none());
    }
}
