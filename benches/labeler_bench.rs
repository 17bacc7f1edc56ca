//! Criterion benchmarks for label annealing.
//!
//! Uses synthetic scattered layouts to measure sweep cost as the number
//! of labels grows (energy evaluation is linear in the label count, so a
//! sweep is quadratic).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_labeler::labeler::{
    AnchorPoint, Boundary, DefaultEnergy, EnergyStrategy, LabelBox, Labeler, LabelerConfig,
};
use u_labeler::random::create_rng;

// ===========================================================================
// Synthetic layout: anchors scattered over a canvas, labels on top of them
// ===========================================================================

const CANVAS: f64 = 1000.0;

fn scattered(n: usize, seed: u64) -> (Vec<AnchorPoint>, Vec<LabelBox>) {
    let mut rng = create_rng(seed);
    let anchors: Vec<AnchorPoint> = (0..n)
        .map(|_| {
            AnchorPoint::new(
                rng.random_range(50.0..CANVAS - 50.0),
                rng.random_range(50.0..CANVAS - 50.0),
                4.0,
            )
        })
        .collect();
    let labels = anchors
        .iter()
        .map(|a| LabelBox::new(a.x + 2.0, a.y - 2.0, 60.0, 14.0))
        .collect();
    (anchors, labels)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for &n in &[10usize, 100, 500] {
        let (anchors, labels) = scattered(n, 42);
        let energy = DefaultEnergy::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(anchors, labels),
            |b, (a, l)| b.iter(|| black_box(energy.energy(black_box(0), l, a))),
        );
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    group.sample_size(10);

    for (n, sweeps) in [(10usize, 1000usize), (50, 500), (200, 100)] {
        let (anchors, labels) = scattered(n, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_s{}", n, sweeps), n),
            &(anchors, labels),
            |b, (a, l)| {
                b.iter(|| {
                    let mut labeler = Labeler::new(LabelerConfig::default().with_seed(42))
                        .with_boundary(Boundary::new(0.0, 0.0, CANVAS, CANVAS))
                        .with_anchors(a.clone())
                        .with_labels(l.clone());
                    black_box(labeler.run(black_box(sweeps)))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_energy, bench_run);
criterion_main!(benches);
