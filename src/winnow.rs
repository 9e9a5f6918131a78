//! Balanced Winnow: two non-negative weight vectors with multiplicative
//! updates, jointly normalised to unit mass.
//!
//! On a mistake on `(x, y)` every coordinate is rescaled
//!
//! ```text
//! wp[j] *= exp( eta * y * x[j])
//! wn[j] *= exp(-eta * y * x[j])
//! ```
//!
//! and both vectors are divided by `sum(wp) + sum(wn)`. The rescale and the
//! division are done in log space with a log-sum-exp, which gives the same
//! weights without the intermediate mass ever overflowing for large `eta` or
//! large features.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Config, Dataset, Label, OnlineLearner,
    error::{Error, Result},
    metrics::accuracy_curve,
    training::{self, FitResult},
    utils::dot
};

/// # Overview
///
/// Balanced Winnow learner.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::BalancedWinnow;
///
/// let bw = BalancedWinnow::new(4, 0.05).unwrap();
/// assert!((bw.mass() - 1.0).abs() < 1e-12);
/// assert!(bw.positive().iter().all(|&w| w == 0.125));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancedWinnow {
    positive:      Vec<f64>,
    negative:      Vec<f64>,
    learning_rate: f64
}

impl BalancedWinnow {
    /// # Overview
    ///
    /// Creates a learner with every weight of both vectors at `1 / (2 * dim)`.
    pub fn new(dim: usize, learning_rate: f64) -> Result<Self> {
        if dim == 0 {
            return Err(Error::ZeroDimension);
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(Error::InvalidLearningRate);
        }
        let init = 1.0 / (2 * dim) as f64;
        Ok(Self {
            positive: vec![init; dim],
            negative: vec![init; dim],
            learning_rate
        })
    }

    #[inline]
    #[must_use]
    pub fn positive(&self) -> &[f64] {
        &self.positive
    }

    #[inline]
    #[must_use]
    pub fn negative(&self) -> &[f64] {
        &self.negative
    }

    #[inline]
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// # Overview
    ///
    /// Total mass `sum(wp) + sum(wn)`; 1 up to rounding.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.positive.iter().chain(&self.negative).sum()
    }

    /// # Overview
    ///
    /// Combined weights `wp - wn`.
    #[must_use]
    pub fn combined(&self) -> Vec<f64> {
        self.positive
            .iter()
            .zip(&self.negative)
            .map(|(p, n)| p - n)
            .collect()
    }
}

impl OnlineLearner for BalancedWinnow {
    #[inline]
    fn dim(&self) -> usize {
        self.positive.len()
    }

    #[inline]
    fn score(&self, x: &[f64]) -> f64 {
        dot(&self.positive, x) - dot(&self.negative, x)
    }

    fn update(&mut self, x: &[f64], label: Label) {
        let step = self.learning_rate * label.sign();

        // Weights become log-weights for the rescale.
        for ((p, n), &xj) in self.positive.iter_mut().zip(self.negative.iter_mut()).zip(x) {
            *p = p.ln() + step * xj;
            *n = n.ln() - step * xj;
        }

        let max = self
            .positive
            .iter()
            .chain(&self.negative)
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let log_mass = max
            + self
                .positive
                .iter()
                .chain(&self.negative)
                .map(|&l| (l - max).exp())
                .sum::<f64>()
                .ln();

        for w in self.positive.iter_mut().chain(self.negative.iter_mut()) {
            *w = (*w - log_mass).exp();
        }
        trace!(log_mass, "renormalized");
    }

    fn weights(&self) -> Vec<f64> {
        self.combined()
    }
}

/// # Overview
///
/// Trains a fresh Balanced Winnow with `config.learning_rate`, returning one
/// combined weight snapshot per epoch.
pub fn train(dataset: &Dataset, config: &Config) -> Result<FitResult> {
    dataset.ensure_not_empty()?;
    let mut model = BalancedWinnow::new(dataset.dim(), config.learning_rate)?;
    training::fit(&mut model, dataset, config)
}

/// Accuracy curve of one learning rate in a sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepPoint {
    pub learning_rate: f64,
    /// Accuracy on the evaluation set of each epoch's snapshot.
    pub accuracy:      Vec<f64>
}

/// # Overview
///
/// Trains one model per learning rate on `train_set` and scores every epoch
/// snapshot on `eval_set`. Results keep the order of `rates`.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{Config, Dataset, winnow};
///
/// let data = Dataset::from_signed(vec![(vec![1.0, 0.0], 1.0), (vec![0.0, 1.0], -1.0)]).unwrap();
/// let config = Config::builder().epochs(20).build().unwrap();
///
/// let sweep = winnow::sweep(&data, &data, &config, &[0.05, 0.1]).unwrap();
/// assert_eq!(sweep.len(), 2);
/// assert_eq!(sweep[1].learning_rate, 0.1);
/// ```
pub fn sweep(
    train_set: &Dataset,
    eval_set: &Dataset,
    config: &Config,
    rates: &[f64]
) -> Result<Vec<SweepPoint>> {
    rates
        .iter()
        .map(|&eta| {
            let config = config.with_learning_rate(eta)?;
            let result = train(train_set, &config)?;
            let accuracy = accuracy_curve(eval_set, result.snapshots())?;
            debug!(learning_rate = eta, epochs = result.epochs_run, "sweep point");
            Ok(SweepPoint {
                learning_rate: eta,
                accuracy
            })
        })
        .collect()
}
