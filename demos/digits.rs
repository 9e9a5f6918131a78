//! Digit "4" versus "9" on the IDX handwritten-digit files.
//!
//! Usage: `cargo run --release --example digits -- <dir>` where `<dir>` holds
//! `train-images-idx3-ubyte[.gz]`, `train-labels-idx1-ubyte[.gz]`,
//! `t10k-images-idx3-ubyte[.gz]` and `t10k-labels-idx1-ubyte[.gz]`
//! (default: `MNIST_data`).

use std::path::PathBuf;

use perceptron_winnow::{
    BiasSweep, Config, ConfusionMatrix, Dataset, Result,
    idx::{self, Split},
    metrics, perceptron, roc, winnow
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("MNIST_data"), PathBuf::from);

    let train = Dataset::binary_subset(idx::load_split(&dir, Split::Train)?, 4, 9)?;
    let test = Dataset::binary_subset(idx::load_split(&dir, Split::Test)?, 4, 9)?;
    println!(
        "4 vs 9: {} training samples, {} test samples, {} features",
        train.len(),
        test.len(),
        train.dim()
    );

    // Perceptron: accuracy over epochs on both sets.
    let config = Config::builder().epochs(500).build()?;
    let result = perceptron::train(&train, &config)?;
    let train_acc = metrics::accuracy_curve(&train, result.snapshots())?;
    let test_acc = metrics::accuracy_curve(&test, result.snapshots())?;
    println!("\nPerceptron ({} epochs)", result.epochs_run);
    print_curve("train", &train_acc);
    print_curve("test", &test_acc);

    if let Some(w) = result.final_weights() {
        println!("  test accuracy: {:.4}", metrics::accuracy(&test, w)?);
        println!("  confusion matrix: {}", ConfusionMatrix::compute(&test, w, 0.0)?);
    }

    // ROC for an under-trained and a well-trained model.
    let sweep = BiasSweep::new(-1000.0, 1000.0, 1000)?;
    let third = (test.len() + 1) / 3;
    let w_prime = perceptron::train(&train.head(third), &Config::builder().epochs(1).build()?)?;
    let w_star = perceptron::train(&train, &Config::builder().epochs(100).build()?)?;
    if let (Some(wp), Some(ws)) = (w_prime.final_weights(), w_star.final_weights()) {
        let roc_prime = roc::roc(&test.head(third), wp, &sweep)?;
        let roc_star = roc::roc(&test, ws, &sweep)?;
        println!("\nAUC w': {:.4}", roc_prime.auc());
        println!("AUC w*: {:.4}", roc_star.auc());
    }

    // Balanced Winnow.
    let config = Config::builder().epochs(30).learning_rate(0.05).build()?;
    let result = winnow::train(&train, &config)?;
    println!("\nBalanced Winnow (eta = 0.05, {} epochs)", result.epochs_run);
    print_curve("train", &metrics::accuracy_curve(&train, result.snapshots())?);
    if let Some(w) = result.final_weights() {
        println!("  test accuracy: {:.4}", metrics::accuracy(&test, w)?);
        println!("  confusion matrix: {}", ConfusionMatrix::compute(&test, w, 0.0)?);
    }

    // Learning-rate sweep.
    let rates: Vec<f64> = (4..=11).map(|i| f64::from(i) / 100.0).collect();
    println!("\nLearning-rate sweep");
    for point in winnow::sweep(&train, &train, &config, &rates)? {
        print_curve(&format!("eta {:.2}", point.learning_rate), &point.accuracy);
    }

    Ok(())
}

fn print_curve(name: &str, curve: &[f64]) {
    let last = curve.last().copied().unwrap_or_default();
    let best = curve.iter().copied().fold(0.0, f64::max);
    println!(
        "  {name:>9}: {} epochs, final {last:.4}, best {best:.4}",
        curve.len()
    );
}
