//! Mistake-driven Perceptron with additive updates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Config, Dataset, Label, OnlineLearner,
    error::Result,
    training::{self, FitResult},
    utils::dot
};

/// # Overview
///
/// Perceptron through the origin. On a mistake `w += y * x`.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{OnlineLearner, Perceptron};
///
/// let p = Perceptron::new(784);
/// assert!(p.weights().iter().all(|&w| w == 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perceptron {
    weights: Vec<f64>
}

impl Perceptron {
    /// # Overview
    ///
    /// Creates a perceptron with all-zero weights.
    pub fn new(dim: usize) -> Self {
        Self {
            weights: vec![0.0; dim]
        }
    }

    /// # Overview
    ///
    /// Resumes from existing weights.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self {
            weights
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    #[must_use]
    pub fn into_weights(self) -> Vec<f64> {
        self.weights
    }
}

impl OnlineLearner for Perceptron {
    #[inline]
    fn dim(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    fn score(&self, x: &[f64]) -> f64 {
        dot(&self.weights, x)
    }

    fn update(&mut self, x: &[f64], label: Label) {
        let y = label.sign();
        for (w, &xj) in self.weights.iter_mut().zip(x) {
            *w += y * xj;
        }
    }

    fn weights(&self) -> Vec<f64> {
        self.weights.clone()
    }
}

/// # Overview
///
/// Trains a fresh perceptron on `dataset`, returning one weight snapshot per
/// epoch.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{Config, Dataset, perceptron};
///
/// let data = Dataset::from_signed(vec![(vec![1.0, 0.0], 1.0), (vec![-1.0, 0.0], -1.0)]).unwrap();
/// let config = Config::builder().epochs(10).build().unwrap();
///
/// let result = perceptron::train(&data, &config).unwrap();
/// assert_eq!(result.final_weights(), Some(&[1.0, 0.0][..]));
/// ```
pub fn train(dataset: &Dataset, config: &Config) -> Result<FitResult> {
    dataset.ensure_not_empty()?;
    let mut model = Perceptron::new(dataset.dim());
    training::fit(&mut model, dataset, config)
}
