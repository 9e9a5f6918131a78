//! Training configuration and builder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default convergence threshold: only a perfect epoch stops training early.
pub const DEFAULT_CONVERGENCE: f64 = 1.0;

/// Default Balanced Winnow learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// # Overview
///
/// Parameters shared by the Perceptron and Balanced Winnow trainers.
///
/// `learning_rate` is only read by Balanced Winnow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub epochs:        usize,
    pub convergence:   f64,
    pub learning_rate: f64,
    pub shuffle_seed:  Option<u64>
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::MissingEpochs);
        }
        if !(0.0..=1.0).contains(&self.convergence) {
            return Err(Error::InvalidConvergence);
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidLearningRate);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Copy of this config with a different learning rate, validated.
    pub fn with_learning_rate(self, learning_rate: f64) -> Result<Self> {
        let config = Self {
            learning_rate,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// # Overview
    ///
    /// Whether an epoch with `mistakes` errors over `n` samples meets the
    /// convergence threshold.
    #[inline]
    #[must_use]
    pub fn converged(&self, mistakes: usize, n: usize) -> bool {
        1.0 - mistakes as f64 / n as f64 >= self.convergence
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    epochs:        Option<usize>,
    convergence:   Option<f64>,
    learning_rate: Option<f64>,
    shuffle_seed:  Option<u64>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the maximum number of epochs (required).
    pub fn epochs(mut self, n: usize) -> Self {
        self.epochs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the training accuracy at which iteration stops early
    /// (default: 1.0).
    pub fn convergence(mut self, threshold: f64) -> Self {
        self.convergence = Some(threshold);
        self
    }

    /// # Overview
    ///
    /// Sets the Balanced Winnow learning rate eta (default: 0.1).
    pub fn learning_rate(mut self, eta: f64) -> Self {
        self.learning_rate = Some(eta);
        self
    }

    /// # Overview
    ///
    /// Visits samples in a fresh seeded permutation each epoch instead of
    /// dataset order.
    pub fn shuffle(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            epochs:        self.epochs.ok_or(Error::MissingEpochs)?,
            convergence:   self.convergence.unwrap_or(DEFAULT_CONVERGENCE),
            learning_rate: self.learning_rate.unwrap_or(DEFAULT_LEARNING_RATE),
            shuffle_seed:  self.shuffle_seed
        };
        config.validate()?;
        Ok(config)
    }
}
