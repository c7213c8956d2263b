//! Monotonic solve deadline.

use std::time::{Duration, Instant};

/// A monotonic point in time after which solving must stop.
///
/// Deadline checks are cooperative: the propagator tests the deadline at
/// the top of each pass and the search at each recursive entry. There is
/// no preemptive interruption, so overshoot past the deadline is bounded
/// by the cost of a single such step.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use sudolve_solver::Deadline;
///
/// let deadline = Deadline::after(Duration::from_secs(60));
/// assert!(!deadline.elapsed());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// Starts the clock: the deadline elapses `limit` from now.
    #[must_use]
    pub fn after(limit: Duration) -> Self {
        Self {
            end: Instant::now() + limit,
        }
    }

    /// Returns `true` once the deadline has passed.
    #[must_use]
    pub fn elapsed(&self) -> bool {
        Instant::now() >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generous_deadline_has_not_elapsed() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.elapsed());
    }

    #[test]
    fn test_zero_deadline_elapses_immediately() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.elapsed());
    }
}
