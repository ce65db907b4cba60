//! Criterion benchmarks for tracing and solving random levels.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lazor_bench::random_level;
use lazor_engine::{Solver, SolverConfig, Tracer};

/// Benchmark: trace every edge laser of a 32x32 level one at a time.
fn bench_trace_32(c: &mut Criterion) {
    let level = random_level(42, 32, 32, 0.2);
    let tracer = Tracer::new(&level.grid, &level.targets);

    c.bench_function("trace_all_32x32", |b| {
        b.iter(|| {
            for ray in &level.rays {
                let mut ray = *ray;
                black_box(tracer.trace(&mut ray));
            }
        });
    });
}

/// Benchmark: sequential and parallel solve on 32x32 and 256x256 levels.
///
/// Targets are cleared so every laser runs to completion.
fn bench_solve(c: &mut Criterion) {
    let sequential = Solver::default();
    let parallel = Solver::new(SolverConfig {
        workers: Some(4),
        ..Default::default()
    })
    .unwrap();

    for size in [32usize, 256] {
        let mut level = random_level(42, size, size, 0.2);
        level.targets.clear();

        c.bench_function(&format!("solve_seq_{size}x{size}"), |b| {
            b.iter(|| black_box(sequential.solve(&level.rays, &level.grid, &level.targets)));
        });
        c.bench_function(&format!("solve_par4_{size}x{size}"), |b| {
            b.iter(|| black_box(parallel.solve(&level.rays, &level.grid, &level.targets)));
        });
    }
}

criterion_group!(benches, bench_trace_32, bench_solve);
criterion_main!(benches);
