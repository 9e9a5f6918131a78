//! Perceptron and Balanced Winnow on a tiny separable dataset.

use perceptron_winnow::{
    BiasSweep, Config, ConfusionMatrix, Dataset, metrics, perceptron, roc, winnow
};

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let data = Dataset::from_signed(vec![
        (vec![1.0, 0.2, 0.0], 1.0),
        (vec![0.9, 0.0, 0.3], 1.0),
        (vec![0.1, 1.0, 0.2], -1.0),
        (vec![0.0, 0.8, 0.9], -1.0),
    ])
    .expect("valid dataset");

    let config = Config::builder()
        .epochs(50)
        .learning_rate(0.5)
        .build()
        .expect("valid config");

    println!("Training perceptron...");
    let p = perceptron::train(&data, &config).expect("non-empty dataset");
    report("perceptron", &data, p.snapshots());

    println!("\nTraining balanced winnow (eta = {})...", config.learning_rate);
    let bw = winnow::train(&data, &config).expect("non-empty dataset");
    report("winnow", &data, bw.snapshots());
}

fn report(name: &str, data: &Dataset, snapshots: &[Vec<f64>]) {
    let curve = metrics::accuracy_curve(data, snapshots).expect("non-empty dataset");
    println!("  {name}: {} epochs, accuracy per epoch {:?}", curve.len(), curve);

    let Some(w) = snapshots.last() else {
        return;
    };
    let cm = ConfusionMatrix::compute(data, w, 0.0).expect("matching dimension");
    println!("  confusion matrix: {cm}");

    let roc = roc::roc(data, w, &BiasSweep::new(-5.0, 5.0, 1001).expect("valid sweep"))
        .expect("both classes present");
    println!("  AUC: {:.4}", roc.auc());
}
