//! Unified trait for mistake-driven online linear learners.

use crate::dataset::{Label, Sample};

/// Interface shared by the Perceptron and Balanced Winnow learners.
///
/// A learner scores a feature vector with a linear function through the
/// origin and only changes its state when it makes a mistake. The epoch
/// loop in [`crate::training`] is written against this trait.
///
/// # Example
///
/// ```
/// use perceptron_winnow::{Label, OnlineLearner, Perceptron, Sample};
///
/// let mut p = Perceptron::new(2);
/// let sample = Sample::new(vec![1.0, 0.0], Label::Positive);
///
/// // w = 0 scores every sample 0, which counts as a mistake.
/// assert!(p.observe(&sample));
/// assert!(!p.observe(&sample));
/// ```
pub trait OnlineLearner {
    /// Feature dimension this learner was built for.
    fn dim(&self) -> usize;

    /// Raw linear score `w·x`.
    fn score(&self, x: &[f64]) -> f64;

    /// Applies the learner's update rule for a misclassified sample.
    fn update(&mut self, x: &[f64], label: Label);

    /// Combined weight vector representing the current decision boundary.
    fn weights(&self) -> Vec<f64>;

    /// Whether the sample is misclassified. A zero score is a mistake.
    #[inline]
    fn is_mistake(&self, sample: &Sample) -> bool {
        sample.label.sign() * self.score(&sample.features) <= 0.0
    }

    /// Tests one sample and updates in place on a mistake.
    ///
    /// Returns `true` if the sample was a mistake.
    fn observe(&mut self, sample: &Sample) -> bool {
        let mistake = self.is_mistake(sample);
        if mistake {
            self.update(&sample.features, sample.label);
        }
        mistake
    }
}
