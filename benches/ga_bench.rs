//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Uses cities evenly spaced on a circle, whose optimal tour is known, to
//! compare the random swap and guided 2-opt mutation strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_ga::ga::local_search::two_opt;
use tsp_ga::ga::{FitnessEvaluator, GaConfig, GaRunner, GeneticAlgorithm, MutationStrategy};
use tsp_ga::DistanceMatrix;

// ===========================================================================
// Circle instance
// ===========================================================================

fn circle(n: usize) -> DistanceMatrix {
    let pts: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            (100.0 * a.cos(), 100.0 * a.sin())
        })
        .collect();
    let rows = pts
        .iter()
        .map(|p| pts.iter().map(|q| (p.0 - q.0).hypot(p.1 - q.1)).collect())
        .collect();
    DistanceMatrix::from_rows(rows).unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_circle");
    group.sample_size(10);

    for strategy in [MutationStrategy::RandomSwap, MutationStrategy::Guided] {
        for (n, pop, gen) in [(10usize, 50usize, 50usize), (30, 100, 50)] {
            let matrix = circle(n);
            let config = GaConfig::new(pop, n)
                .with_max_generations(gen)
                .with_mutation(strategy)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), format!("n{n}_p{pop}_g{gen}")),
                &(matrix, config),
                |b, (m, c)| {
                    b.iter(|| {
                        let mut ga = GeneticAlgorithm::new(black_box(c), m).unwrap();
                        black_box(GaRunner::run(&mut ga).unwrap())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");
    group.sample_size(10);

    for &n in &[10usize, 30, 60] {
        let matrix = circle(n);
        // visit even positions first, then odd: many crossings to remove
        let tour: Vec<usize> = (0..n).step_by(2).chain((1..n).step_by(2)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, tour), |b, (m, t)| {
            let eval = FitnessEvaluator::new(m);
            b.iter(|| black_box(two_opt(black_box(t), &eval).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_circle, bench_two_opt);
criterion_main!(benches);
