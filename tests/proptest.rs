//! Property-based tests for the online learners and evaluation metrics.

use perceptron_winnow::{
    BalancedWinnow, BiasSweep, Config, ConfusionMatrix, Dataset, Label, OnlineLearner, metrics,
    perceptron, roc, winnow
};
use proptest::prelude::*;

/// Random dataset with both classes present.
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..8, 2usize..24).prop_flat_map(|(dim, n)| {
        prop::collection::vec(
            (prop::collection::vec(0.0f64..1.0, dim), any::<bool>()),
            n
        )
        .prop_map(|rows| {
            let pairs = rows.into_iter().enumerate().map(|(i, (x, positive))| {
                // Pin the first two labels so both classes always appear.
                let y = match i {
                    0 => 1.0,
                    1 => -1.0,
                    _ if positive => 1.0,
                    _ => -1.0
                };
                (x, y)
            });
            Dataset::from_signed(pairs).unwrap()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Accuracy of every perceptron snapshot is within [0, 1].
    #[test]
    fn perceptron_accuracy_in_range(data in dataset_strategy(), epochs in 1usize..20) {
        let config = Config::builder().epochs(epochs).build().unwrap();
        let result = perceptron::train(&data, &config).unwrap();

        prop_assert!(result.history.len() <= epochs);
        prop_assert_eq!(result.history.len(), result.history.mistakes().len());
        for acc in metrics::accuracy_curve(&data, result.snapshots()).unwrap() {
            prop_assert!((0.0..=1.0).contains(&acc));
        }
    }

    /// Accuracy of every winnow snapshot is within [0, 1].
    #[test]
    fn winnow_accuracy_in_range(
        data in dataset_strategy(),
        epochs in 1usize..20,
        eta in 0.01f64..2.0
    ) {
        let config = Config::builder().epochs(epochs).learning_rate(eta).build().unwrap();
        let result = winnow::train(&data, &config).unwrap();

        prop_assert!(result.history.len() <= epochs);
        for acc in metrics::accuracy_curve(&data, result.snapshots()).unwrap() {
            prop_assert!((0.0..=1.0).contains(&acc));
        }
    }

    /// Winnow weights stay non-negative with unit total mass after any
    /// sequence of updates.
    #[test]
    fn winnow_mass_invariant(
        dim in 1usize..16,
        eta in 0.001f64..5.0,
        steps in prop::collection::vec((any::<bool>(), prop::collection::vec(-3.0f64..3.0, 16)), 1..40)
    ) {
        let mut bw = BalancedWinnow::new(dim, eta).unwrap();
        prop_assert!((bw.mass() - 1.0).abs() < 1e-12);

        for (positive, x) in steps {
            let label = if positive { Label::Positive } else { Label::Negative };
            bw.update(&x[..dim], label);

            prop_assert!((bw.mass() - 1.0).abs() < 1e-9);
            prop_assert!(bw.positive().iter().chain(bw.negative()).all(|&w| w >= 0.0 && w.is_finite()));
        }
    }

    /// Confusion matrix counts partition the dataset by true label.
    #[test]
    fn confusion_matrix_partitions(
        data in dataset_strategy(),
        seed_w in prop::collection::vec(-1.0f64..1.0, 8),
        bias in -2.0f64..2.0
    ) {
        let w = &seed_w[..data.dim()];
        let cm = ConfusionMatrix::compute(&data, w, bias).unwrap();
        let (positives, negatives) = data.class_counts();

        prop_assert_eq!(cm.total(), data.len());
        prop_assert_eq!(cm.tp + cm.fn_, positives);
        prop_assert_eq!(cm.fp + cm.tn, negatives);
    }

    /// With bias 0 the confusion matrix agrees with `accuracy`.
    #[test]
    fn confusion_matrix_matches_accuracy(
        data in dataset_strategy(),
        seed_w in prop::collection::vec(-1.0f64..1.0, 8)
    ) {
        let w = &seed_w[..data.dim()];
        let cm = ConfusionMatrix::compute(&data, w, 0.0).unwrap();
        let acc = metrics::accuracy(&data, w).unwrap();

        prop_assert!((cm.accuracy().unwrap() - acc).abs() < 1e-12);
    }

    /// Closing the curve at (0, 0) beforehand does not change the area.
    #[test]
    fn auc_endpoint_idempotent(
        points in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 0..50)
    ) {
        let (fpr, tpr): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        let open = roc::auc(&fpr, &tpr).unwrap();

        let mut closed_fpr = fpr.clone();
        let mut closed_tpr = tpr.clone();
        closed_fpr.push(0.0);
        closed_tpr.push(0.0);

        prop_assert_eq!(roc::auc(&closed_fpr, &closed_tpr).unwrap(), open);
        prop_assert_eq!(roc::auc(&fpr, &tpr).unwrap(), open);
    }

    /// The all-zero weight vector scores 0.5 when the sweep skips bias 0.
    #[test]
    fn zero_weights_half_auc(data in dataset_strategy(), half in 1usize..100) {
        let sweep = BiasSweep::new(-10.0, 10.0, 2 * half).unwrap();
        let curve = roc::roc(&data, &vec![0.0; data.dim()], &sweep).unwrap();

        prop_assert!((curve.auc() - 0.5).abs() < 1e-12);
    }

    /// ROC rates are always valid probabilities.
    #[test]
    fn roc_rates_in_range(
        data in dataset_strategy(),
        seed_w in prop::collection::vec(-1.0f64..1.0, 8),
        num_points in 1usize..200
    ) {
        let w = &seed_w[..data.dim()];
        let curve = roc::roc(&data, w, &BiasSweep::new(-5.0, 5.0, num_points).unwrap()).unwrap();

        prop_assert_eq!(curve.len(), num_points);
        prop_assert!(curve.points().all(|(x, y)| (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)));
    }

    /// A perceptron snapshot after a mistake-free epoch classifies every
    /// training sample correctly.
    #[test]
    fn converged_perceptron_is_perfect(data in dataset_strategy()) {
        let config = Config::builder().epochs(50).build().unwrap();
        let result = perceptron::train(&data, &config).unwrap();

        if result.converged {
            let w = result.final_weights().unwrap();
            prop_assert_eq!(metrics::accuracy(&data, w).unwrap(), 1.0);
            let all_correct = data.iter().all(|s| {
                let mut p = perceptron_winnow::Perceptron::from_weights(w.to_vec());
                !p.observe(s)
            });
            prop_assert!(all_correct);
        }
    }
}
