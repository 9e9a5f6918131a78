//! ROC curves from a bias sweep and trapezoidal AUC.

use core::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ConfusionMatrix, Dataset, Label,
    error::{Error, Result},
    utils::{dot, linspace}
};

/// # Overview
///
/// Evenly spaced decision thresholds from `start` to `stop`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BiasSweep {
    pub start:      f64,
    pub stop:       f64,
    pub num_points: usize
}

impl Default for BiasSweep {
    fn default() -> Self {
        Self {
            start:      -10.0,
            stop:       10.0,
            num_points: 100
        }
    }
}

impl BiasSweep {
    /// # Overview
    ///
    /// Creates a validated sweep.
    pub fn new(start: f64, stop: f64, num_points: usize) -> Result<Self> {
        let sweep = Self {
            start,
            stop,
            num_points
        };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_points == 0 || !self.start.is_finite() || !self.stop.is_finite() {
            return Err(Error::InvalidSweep);
        }
        Ok(())
    }

    #[must_use]
    pub fn biases(&self) -> Vec<f64> {
        linspace(self.start, self.stop, self.num_points)
    }
}

/// # Overview
///
/// ROC points in bias-sweep order.
///
/// Points follow the sweep, not FPR order; with an increasing sweep both
/// rates generally fall, but neither sequence is guaranteed monotone.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RocCurve {
    biases: Vec<f64>,
    fpr:    Vec<f64>,
    tpr:    Vec<f64>
}

impl RocCurve {
    #[must_use]
    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    #[must_use]
    pub fn fpr(&self) -> &[f64] {
        &self.fpr
    }

    #[must_use]
    pub fn tpr(&self) -> &[f64] {
        &self.tpr
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.biases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }

    /// `(fpr, tpr)` pairs in sweep order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }

    /// # Overview
    ///
    /// Area under this curve, see [`auc`].
    #[must_use]
    pub fn auc(&self) -> f64 {
        closed_area(&self.fpr, &self.tpr)
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.fpr, self.tpr)
    }
}

/// # Overview
///
/// Sweeps the bias over `sweep` and records FPR/TPR at each value.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if the dataset has no positive samples (TPR is
/// undefined) or no negative samples (FPR is undefined);
/// [`Error::InvalidSweep`] for an empty or non-finite sweep;
/// [`Error::DimensionMismatch`] for weights of the wrong length.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{BiasSweep, Dataset, roc};
///
/// let data = Dataset::from_signed(vec![(vec![1.0], 1.0), (vec![-1.0], -1.0)]).unwrap();
/// let curve = roc::roc(&data, &[1.0], &BiasSweep::default()).unwrap();
///
/// assert_eq!(curve.len(), 100);
/// assert!((curve.auc() - 1.0).abs() < 1e-12);
/// ```
pub fn roc(dataset: &Dataset, weights: &[f64], sweep: &BiasSweep) -> Result<RocCurve> {
    sweep.validate()?;
    dataset.check_weights(weights)?;
    let (positives, negatives) = dataset.class_counts();
    if positives == 0 {
        return Err(Error::DivisionByZero {
            quantity: "true positive rate"
        });
    }
    if negatives == 0 {
        return Err(Error::DivisionByZero {
            quantity: "false positive rate"
        });
    }

    let scored: Vec<(f64, Label)> = dataset
        .iter()
        .map(|s| (dot(weights, &s.features), s.label))
        .collect();

    let biases = sweep.biases();
    let mut fpr = Vec::with_capacity(biases.len());
    let mut tpr = Vec::with_capacity(biases.len());
    for &bias in &biases {
        let cm = ConfusionMatrix::from_scores(&scored, bias);
        fpr.push(cm.fpr()?);
        tpr.push(cm.tpr()?);
    }

    Ok(RocCurve {
        biases,
        fpr,
        tpr
    })
}

/// # Overview
///
/// Signed trapezoidal area under an ROC polyline.
///
/// The curve is closed with a `(0, 0)` endpoint and the area is
/// `sum((x[i] - x[i+1]) * (y[i+1] + y[i])) / 2`. The inputs are left
/// untouched, and a curve that already ends at `(0, 0)` gives the same value
/// since the extra segment has zero width.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::roc::auc;
///
/// let area = auc(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(area, 1.0);
/// assert_eq!(auc(&[1.0, 0.0, 0.0], &[1.0, 1.0, 0.0]).unwrap(), area);
/// ```
pub fn auc(fpr: &[f64], tpr: &[f64]) -> Result<f64> {
    if fpr.len() != tpr.len() {
        return Err(Error::LengthMismatch {
            fpr: fpr.len(),
            tpr: tpr.len()
        });
    }
    Ok(closed_area(fpr, tpr))
}

fn closed_area(fpr: &[f64], tpr: &[f64]) -> f64 {
    let points: Vec<(f64, f64)> = fpr
        .iter()
        .copied()
        .zip(tpr.iter().copied())
        .chain(iter::once((0.0, 0.0)))
        .collect();
    points
        .windows(2)
        .map(|w| (w[0].0 - w[1].0) * (w[1].1 + w[0].1))
        .sum::<f64>()
        / 2.0
}
