//! Benchmarks for the solving engine.
//!
//! Measures the two solving paths separately:
//!
//! - **`propagation`**: a puzzle that falls entirely to naked singles.
//! - **`search`**: a puzzle that stalls propagation and requires
//!   backtracking.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sudolve_core::Grid;
use sudolve_solver::{Solver, Strategy};

const NAKED_SINGLES: &str = "\
    3.542.81.4879.15.6.29.5637485.793.416132.8957\
    .74.6528.2413.9.655.867.192.965124.8";
const HIDDEN_SINGLES: &str = "\
    ..2.3...8.....8....31.2.....6..5.27..1.....5.\
    2.4.6..31....8.6.5.......13..531.4..";

fn bench_propagation(c: &mut Criterion) {
    let grid: Grid = NAKED_SINGLES.parse().unwrap();
    let solver = Solver::new(Strategy::ConstraintPropagation, Duration::from_secs(60)).unwrap();

    c.bench_function("propagation", |b| {
        b.iter_batched(
            || hint::black_box(grid.clone()),
            |mut grid| solver.solve(&mut grid).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let grid: Grid = HIDDEN_SINGLES.parse().unwrap();
    let solver = Solver::new(Strategy::Backtracking, Duration::from_secs(60)).unwrap();

    c.bench_function("search", |b| {
        b.iter_batched(
            || hint::black_box(grid.clone()),
            |mut grid| solver.solve(&mut grid).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_propagation, bench_search);
criterion_main!(benches);
