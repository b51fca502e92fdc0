//! Benchmarks for the scoring path.
//!
//! Run: cargo bench -p objective-engine

#![allow(clippy::unwrap_used, missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use objective_engine::{
    Coefficients, MarketObservation, ObjectiveEngine, Portfolio, quadratic_form,
};

/// Diagonal-dominant covariance for `n` assets.
fn covariance(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0.04 } else { 0.001 })
                .collect()
        })
        .collect()
}

fn portfolio(n: usize) -> Portfolio {
    let weight = 1.0 / n as f64;
    Portfolio::new(
        vec![weight; n],
        covariance(n),
        vec![0.001; n],
        vec![0.05; n],
    )
    .unwrap()
}

fn bench_quadratic_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_form");
    for n in [10, 100, 500] {
        let p = portfolio(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| quadratic_form(black_box(p.weights()), black_box(p.cov_matrix())));
        });
    }
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let engine = ObjectiveEngine::default();
    let observations = vec![
        MarketObservation::new("ecb", "EURUSD", 1.1025),
        MarketObservation::new("oanda", "EURUSD", 1.1026),
        MarketObservation::new("fxcm", "EURUSD", 1.1024),
    ];
    let coefficients = Coefficients::new(1.65, 10.0, 5.0, 0.5);

    let mut group = c.benchmark_group("score");
    for n in [10, 100] {
        let p = portfolio(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &p, |b, p| {
            b.iter(|| engine.score(black_box(p), &observations, 0.0003, &coefficients));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadratic_form, bench_score);
criterion_main!(benches);
