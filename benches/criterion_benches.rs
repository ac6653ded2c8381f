#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use fifteen_solver::config::Heuristic;
use fifteen_solver::{LoadState, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_easy_manhattan(c: &mut Criterion) {
    // 9 moves
    bench_puzzle(c, Heuristic::Manhattan, "puzzles/easy.txt", 100);
}

#[allow(unused)]
fn bench_easy_misplaced(c: &mut Criterion) {
    bench_puzzle(c, Heuristic::MisplacedTiles, "puzzles/easy.txt", 100);
}

#[allow(unused)]
fn bench_medium_manhattan(c: &mut Criterion) {
    // 24 moves, ~1.3k expansions
    bench_puzzle(c, Heuristic::Manhattan, "puzzles/medium.txt", 50);
}

#[allow(unused)]
fn bench_medium_misplaced(c: &mut Criterion) {
    // ~28k expansions
    bench_puzzle(c, Heuristic::MisplacedTiles, "puzzles/medium.txt", 10);
}

fn bench_puzzle(c: &mut Criterion, heuristic: Heuristic, puzzle_path: &str, samples: usize) {
    let state = puzzle_path.load_state().unwrap();

    c.bench(
        &format!("{}", heuristic),
        Benchmark::new(puzzle_path, move |b| {
            b.iter(|| criterion::black_box(state.solve(criterion::black_box(heuristic), None)))
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_easy_manhattan,
    bench_easy_misplaced,
    bench_medium_manhattan,
    //bench_medium_misplaced,
);
criterion_main!(benches);
