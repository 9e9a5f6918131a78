//! Benchmarks for training and evaluation.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use perceptron_winnow::{
    BalancedWinnow, BiasSweep, Config, ConfusionMatrix, Dataset, Label, OnlineLearner, metrics,
    perceptron, roc, utils::rng_from_seed, winnow
};
use rand::Rng;

fn blobs(n_samples: usize, dim: usize) -> Dataset {
    let mut rng = rng_from_seed(42);
    let pairs = (0..n_samples).map(|i| {
        let positive = i % 2 == 0;
        let x: Vec<f64> = (0..dim)
            .map(|j| {
                let bright = (j < dim / 2) == positive;
                let base = if bright { 0.6 } else { 0.0 };
                base + rng.random::<f64>() * 0.4
            })
            .collect();
        (x, if positive { 1.0 } else { -1.0 })
    });
    Dataset::from_signed(pairs).unwrap()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for dim in [64, 256, 784] {
        let p = perceptron_winnow::Perceptron::from_weights(vec![0.5; dim]);
        let bw = BalancedWinnow::new(dim, 0.05).unwrap();
        let x: Vec<f64> = (0..dim).map(|i| (i % 7) as f64 / 7.0).collect();

        group.bench_with_input(BenchmarkId::new("perceptron", dim), &dim, |b, _| {
            b.iter(|| black_box(p.score(black_box(&x))));
        });
        group.bench_with_input(BenchmarkId::new("winnow", dim), &dim, |b, _| {
            b.iter(|| black_box(bw.score(black_box(&x))));
        });
    }

    group.finish();
}

fn bench_winnow_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("winnow_update");

    for dim in [64, 256, 784] {
        let x: Vec<f64> = (0..dim).map(|i| (i % 5) as f64 / 5.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &d| {
            let mut bw = BalancedWinnow::new(d, 0.05).unwrap();
            b.iter(|| bw.update(black_box(&x), Label::Positive));
        });
    }

    group.finish();
}

fn bench_train_epoch(c: &mut Criterion) {
    let data = blobs(1000, 784);
    let config = Config::builder().epochs(1).learning_rate(0.05).build().unwrap();

    c.bench_function("perceptron_epoch_1000x784", |b| {
        b.iter(|| black_box(perceptron::train(black_box(&data), &config).unwrap()));
    });

    c.bench_function("winnow_epoch_1000x784", |b| {
        b.iter(|| black_box(winnow::train(black_box(&data), &config).unwrap()));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let data = blobs(1000, 784);
    let config = Config::builder().epochs(5).build().unwrap();
    let result = perceptron::train(&data, &config).unwrap();
    let w = result.final_weights().unwrap().to_vec();

    c.bench_function("accuracy_curve_5_epochs", |b| {
        b.iter(|| black_box(metrics::accuracy_curve(&data, result.snapshots()).unwrap()));
    });

    c.bench_function("confusion_matrix", |b| {
        b.iter(|| black_box(ConfusionMatrix::compute(&data, black_box(&w), 0.0).unwrap()));
    });

    let mut group = c.benchmark_group("roc");
    for num_points in [100, 1000] {
        let sweep = BiasSweep::new(-1000.0, 1000.0, num_points).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &num_points,
            |b, _| {
                b.iter(|| black_box(roc::roc(&data, &w, &sweep).unwrap().auc()));
            }
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_score,
    bench_winnow_update,
    bench_train_epoch,
    bench_evaluate
);
criterion_main!(benches);
