//! Accuracy and confusion matrices for fixed weight vectors.
//!
//! A sample counts as correct only when `label * (w·x - bias) > 0`; a zero
//! margin is an error, matching the training mistake rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Dataset, Label,
    error::{Error, Result},
    utils::dot
};

/// # Overview
///
/// Fraction of samples in `dataset` classified correctly by `weights`.
///
/// # Errors
///
/// [`Error::DivisionByZero`] on an empty dataset and
/// [`Error::DimensionMismatch`] if `weights` has the wrong length.
pub fn accuracy(dataset: &Dataset, weights: &[f64]) -> Result<f64> {
    if dataset.is_empty() {
        return Err(Error::DivisionByZero {
            quantity: "accuracy"
        });
    }
    dataset.check_weights(weights)?;
    let correct = dataset
        .iter()
        .filter(|s| s.label.sign() * dot(weights, &s.features) > 0.0)
        .count();
    Ok(correct as f64 / dataset.len() as f64)
}

/// # Overview
///
/// Accuracy of each weight snapshot, aligned with epoch index.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{Dataset, metrics::accuracy_curve};
///
/// let data = Dataset::from_signed(vec![(vec![1.0], 1.0), (vec![-1.0], -1.0)]).unwrap();
/// let curve = accuracy_curve(&data, &[vec![0.0], vec![2.0], vec![-1.0]]).unwrap();
///
/// assert_eq!(curve, vec![0.0, 1.0, 0.0]);
/// ```
pub fn accuracy_curve(dataset: &Dataset, snapshots: &[Vec<f64>]) -> Result<Vec<f64>> {
    snapshots.iter().map(|w| accuracy(dataset, w)).collect()
}

/// # Overview
///
/// Counts of true/false positives and negatives at one decision threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfusionMatrix {
    pub tp:  usize,
    pub fp:  usize,
    pub fn_: usize,
    pub tn:  usize
}

impl ConfusionMatrix {
    /// # Overview
    ///
    /// Tabulates `sign(w·x - bias)` against the true labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use perceptron_winnow::{ConfusionMatrix, Dataset};
    ///
    /// let data = Dataset::from_signed(vec![
    ///     (vec![1.0, 0.0], 1.0),
    ///     (vec![2.0, 0.0], 1.0),
    ///     (vec![-1.0, 0.0], -1.0),
    ///     (vec![0.0, 1.0], -1.0),
    /// ])
    /// .unwrap();
    ///
    /// let cm = ConfusionMatrix::compute(&data, &[1.0, -1.0], 0.0).unwrap();
    /// assert_eq!(cm.as_array(), [[2, 0], [0, 2]]);
    /// ```
    pub fn compute(dataset: &Dataset, weights: &[f64], bias: f64) -> Result<Self> {
        dataset.check_weights(weights)?;
        let scored: Vec<(f64, Label)> = dataset
            .iter()
            .map(|s| (dot(weights, &s.features), s.label))
            .collect();
        Ok(Self::from_scores(&scored, bias))
    }

    /// # Overview
    ///
    /// Tabulates precomputed `(w·x, label)` pairs at `bias`.
    #[must_use]
    pub fn from_scores(scored: &[(f64, Label)], bias: f64) -> Self {
        let mut cm = Self::default();
        for &(score, label) in scored {
            let correct = (score - bias) * label.sign() > 0.0;
            match (correct, label) {
                (true, Label::Positive) => cm.tp += 1,
                (true, Label::Negative) => cm.tn += 1,
                (false, Label::Positive) => cm.fn_ += 1,
                (false, Label::Negative) => cm.fp += 1
            }
        }
        cm
    }

    /// `[[tp, fp], [fn, tn]]`.
    #[must_use]
    pub fn as_array(&self) -> [[usize; 2]; 2] {
        [[self.tp, self.fp], [self.fn_, self.tn]]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// # Overview
    ///
    /// `TP / (TP + FN)`; fails when there are no positive samples.
    pub fn tpr(&self) -> Result<f64> {
        ratio(self.tp, self.tp + self.fn_, "true positive rate")
    }

    /// # Overview
    ///
    /// `FP / (FP + TN)`; fails when there are no negative samples.
    pub fn fpr(&self) -> Result<f64> {
        ratio(self.fp, self.fp + self.tn, "false positive rate")
    }

    pub fn accuracy(&self) -> Result<f64> {
        ratio(self.tp + self.tn, self.total(), "accuracy")
    }
}

impl core::fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.tp, self.fp, self.fn_, self.tn)
    }
}

fn ratio(num: usize, den: usize, quantity: &'static str) -> Result<f64> {
    if den == 0 {
        return Err(Error::DivisionByZero {
            quantity
        });
    }
    Ok(num as f64 / den as f64)
}
