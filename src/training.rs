//! Shared epoch loop, weight history and training results.

use tracing::{debug, info};

use crate::{
    Config, Dataset, OnlineLearner,
    error::{Error, Result},
    utils::{rng_from_seed, shuffle}
};

/// Progress callback type for training.
///
/// Called after each epoch with (epoch, in-epoch accuracy).
/// Return `false` to stop training early.
pub type ProgressCallback = Box<dyn FnMut(usize, f64) -> bool + Send>;

/// Weight snapshots taken at the end of each epoch, in epoch order, with the
/// number of mistakes made during that epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochHistory {
    snapshots: Vec<Vec<f64>>,
    mistakes:  Vec<usize>
}

impl EpochHistory {
    /// Creates an empty history with room for `epochs` entries.
    #[must_use]
    pub fn with_capacity(epochs: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(epochs),
            mistakes:  Vec::with_capacity(epochs)
        }
    }

    /// Records one finished epoch.
    pub fn push(&mut self, weights: Vec<f64>, mistakes: usize) {
        self.snapshots.push(weights);
        self.mistakes.push(mistakes);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Weight vector after each epoch.
    #[must_use]
    pub fn snapshots(&self) -> &[Vec<f64>] {
        &self.snapshots
    }

    /// Mistakes made during each epoch.
    #[must_use]
    pub fn mistakes(&self) -> &[usize] {
        &self.mistakes
    }

    /// Weights after the final epoch.
    #[must_use]
    pub fn last(&self) -> Option<&[f64]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    #[must_use]
    pub fn into_snapshots(self) -> Vec<Vec<f64>> {
        self.snapshots
    }
}

/// Result of training.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Number of epochs actually run.
    pub epochs_run:     usize,
    /// Whether the convergence threshold ended training.
    pub converged:      bool,
    /// Whether the progress callback ended training.
    pub stopped_early:  bool,
    /// Weight snapshot and mistake count per epoch.
    pub history:        EpochHistory,
    /// `1 - mistakes / n` per epoch, measured while the weights were moving.
    pub epoch_accuracy: Vec<f64>
}

impl FitResult {
    /// Weights after the final epoch.
    #[must_use]
    pub fn final_weights(&self) -> Option<&[f64]> {
        self.history.last()
    }

    /// Weight snapshots, one per epoch.
    #[must_use]
    pub fn snapshots(&self) -> &[Vec<f64>] {
        self.history.snapshots()
    }
}

/// Runs the online epoch loop until convergence or `config.epochs`.
///
/// # Errors
///
/// [`Error::EmptyDataset`] for an empty dataset, and
/// [`Error::DimensionMismatch`] if the learner and dataset disagree on the
/// feature dimension.
pub fn fit<L: OnlineLearner>(learner: &mut L, dataset: &Dataset, config: &Config) -> Result<FitResult> {
    fit_with_callback(learner, dataset, config, |_, _| true)
}

/// Training with a progress callback.
///
/// The callback receives (epoch, in-epoch accuracy) after each epoch's
/// snapshot is recorded. Return `false` to stop training early.
pub fn fit_with_callback<L, F>(
    learner: &mut L,
    dataset: &Dataset,
    config: &Config,
    mut callback: F
) -> Result<FitResult>
where
    L: OnlineLearner,
    F: FnMut(usize, f64) -> bool
{
    config.validate()?;
    dataset.ensure_not_empty()?;
    if learner.dim() != dataset.dim() {
        return Err(Error::DimensionMismatch {
            expected: dataset.dim(),
            got:      learner.dim()
        });
    }

    let samples = dataset.samples();
    let n = samples.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = config.shuffle_seed.map(rng_from_seed);

    let mut history = EpochHistory::with_capacity(config.epochs);
    let mut epoch_accuracy = Vec::with_capacity(config.epochs);
    let mut converged = false;
    let mut stopped_early = false;

    for epoch in 1..=config.epochs {
        if let Some(rng) = rng.as_mut() {
            shuffle(&mut order, rng);
        }

        let mut mistakes = 0;
        for &i in &order {
            if learner.observe(&samples[i]) {
                mistakes += 1;
            }
        }

        history.push(learner.weights(), mistakes);
        let accuracy = 1.0 - mistakes as f64 / n as f64;
        epoch_accuracy.push(accuracy);
        debug!(epoch, mistakes, accuracy, "epoch finished");

        if config.converged(mistakes, n) {
            info!(epoch, accuracy, threshold = config.convergence, "converged");
            converged = true;
            break;
        }

        if !callback(epoch, accuracy) {
            info!(epoch, accuracy, "stopped by callback");
            stopped_early = true;
            break;
        }
    }

    Ok(FitResult {
        epochs_run: history.len(),
        converged,
        stopped_early,
        history,
        epoch_accuracy
    })
}
