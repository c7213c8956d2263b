//! Depth-first backtracking search.

use sudolve_core::{Grid, Position};

use crate::Deadline;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Search {
    /// The grid holds a solution; trial assignments were left in place.
    Solved,
    /// Every branch from the entry state was tried without completing the
    /// grid. From the root this is proof that no solution exists.
    Exhausted,
    /// The deadline elapsed mid-search; the entry state was restored.
    TimedOut,
}

/// Depth-first trial assignment with strict undo on failure.
///
/// The branching cell is the empty cell whose peers hold the most distinct
/// digits, ties broken by first occurrence in row-major order. Peer-fill
/// count is a cheap approximation of the most-constrained-variable rule:
/// it avoids rebuilding all 81 candidate sets at every node and agrees
/// with the exact rule whenever the counted peers are pairwise distinct.
/// The approximation is a deliberate speed/accuracy trade, kept as-is.
///
/// Candidate digits for the chosen cell *are* computed exactly, from the
/// live grid (it has mutated since the last propagation pass), and tried
/// in ascending numeric order, so the search is fully deterministic.
///
/// A branch that fails restores the grid to exactly the state it found,
/// including when the deadline cuts the search short, so the caller and
/// sibling branches never observe a dangling trial digit. The recursion
/// depth is bounded by the 81 cells, one frame per assignment.
pub fn search(grid: &mut Grid, deadline: &Deadline) -> Search {
    if grid.is_full() {
        return Search::Solved;
    }
    if deadline.elapsed() {
        return Search::TimedOut;
    }

    let pos = branching_cell(grid);
    let candidates = grid.peer_digits(pos, false).complement();
    for digit in candidates {
        grid[pos] = Some(digit);
        match search(grid, deadline) {
            Search::Solved => return Search::Solved,
            Search::Exhausted => grid[pos] = None,
            Search::TimedOut => {
                grid[pos] = None;
                return Search::TimedOut;
            }
        }
    }
    Search::Exhausted
}

/// Empty cell with the most distinct digits among its peers; row-major
/// first occurrence wins ties.
///
/// Callers guarantee the grid is not full.
fn branching_cell(grid: &Grid) -> Position {
    let mut best: Option<(Position, usize)> = None;
    for pos in Position::ALL {
        if grid[pos].is_some() {
            continue;
        }
        let filled = grid.peer_digits(pos, false).len();
        match best {
            Some((_, count)) if count >= filled => {}
            _ => best = Some((pos, filled)),
        }
    }
    let (pos, _) = best.expect("search never branches on a full grid");
    pos
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sudolve_core::{Digit, validate};

    use super::*;

    fn far_deadline() -> Deadline {
        Deadline::after(Duration::from_secs(3600))
    }

    #[test]
    fn test_solves_a_puzzle_propagation_cannot() {
        let mut grid: Grid = "\
            ..2.3...8.....8....31.2.....6..5.27..1.....5.\
            2.4.6..31....8.6.5.......13..531.4.."
            .parse()
            .unwrap();
        let result = search(&mut grid, &far_deadline());
        assert_eq!(result, Search::Solved);

        let expected: Grid = "\
            672435198549178362831629547368951274917243856\
            254867931193784625486592713725316489"
            .parse()
            .unwrap();
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_fills_an_empty_grid_deterministically() {
        let mut first = Grid::new();
        assert_eq!(search(&mut first, &far_deadline()), Search::Solved);
        assert!(first.is_full());
        assert!(validate(&first).is_ok());

        let mut second = Grid::new();
        assert_eq!(search(&mut second, &far_deadline()), Search::Solved);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhaustion_restores_the_entry_state() {
        // Unsolvable without a duplicate given: search must fail and undo.
        let mut grid: Grid = "\
            9..1....4.14.3.8....3....9....7.8..18....3...\
            .......3..21....7...9.4.5..5...16..3"
            .parse()
            .unwrap();
        let snapshot = grid.clone();
        let result = search(&mut grid, &far_deadline());
        assert_eq!(result, Search::Exhausted);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_expired_deadline_restores_the_entry_state() {
        let mut grid: Grid = "\
            ..2.3...8.....8....31.2.....6..5.27..1.....5.\
            2.4.6..31....8.6.5.......13..531.4.."
            .parse()
            .unwrap();
        let snapshot = grid.clone();
        let result = search(&mut grid, &Deadline::after(Duration::ZERO));
        assert_eq!(result, Search::TimedOut);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_branching_cell_prefers_most_constrained() {
        let mut grid = Grid::new();
        // (4, 4) sees three distinct digits; every other empty cell sees
        // at most two.
        grid[Position::new(0, 4)] = Some(Digit::new(1).unwrap());
        grid[Position::new(4, 0)] = Some(Digit::new(2).unwrap());
        grid[Position::new(3, 3)] = Some(Digit::new(3).unwrap());
        assert_eq!(branching_cell(&grid), Position::new(4, 4));
    }

    #[test]
    fn test_branching_cell_breaks_ties_row_major() {
        // All empty cells of an empty grid tie at zero filled peers.
        let grid = Grid::new();
        assert_eq!(branching_cell(&grid), Position::new(0, 0));
    }
}
