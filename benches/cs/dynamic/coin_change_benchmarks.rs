use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_drills::cs::dynamic::{MinCoinSolver, SolverConfig, Sweep};

fn bench_sweeps(c: &mut Criterion) {
    let coins: [usize; 4] = [186, 419, 83, 408];
    let mut group = c.benchmark_group("min_coins");

    for &amount in &[6_249usize, 100_000, 1_000_000] {
        for sweep in [Sweep::Push, Sweep::Pull] {
            let solver = MinCoinSolver::new(SolverConfig::new().with_sweep(sweep));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", sweep), amount),
                &amount,
                |b, &amount| b.iter(|| solver.solve(black_box(amount), black_box(&coins))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sweeps);
criterion_main!(benches);
