//! Labeled samples, ordered datasets and the two-class relabeling adapter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// Binary class label, `-1` or `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Negative,
    Positive
}

impl Label {
    /// # Overview
    ///
    /// Numeric sign of the label: `-1.0` or `1.0`.
    #[inline(always)]
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0
        }
    }

    /// # Overview
    ///
    /// Parses a numeric `-1` / `+1` label.
    #[must_use]
    pub fn from_sign(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Self::Positive)
        } else if value == -1.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }
}

/// # Overview
///
/// A feature vector paired with its label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub features: Vec<f64>,
    pub label:    Label
}

impl Sample {
    pub fn new(features: Vec<f64>, label: Label) -> Self {
        Self {
            features,
            label
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// # Overview
///
/// Ordered sequence of samples sharing one feature dimension.
///
/// Order is significant: online trainers visit samples in this order.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::{Dataset, Label, Sample};
///
/// let data = Dataset::new(vec![
///     Sample::new(vec![1.0, 0.0], Label::Positive),
///     Sample::new(vec![-1.0, 0.0], Label::Negative),
/// ])
/// .unwrap();
///
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.dim(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Sample>", into = "Vec<Sample>"))]
pub struct Dataset {
    samples: Vec<Sample>,
    dim:     usize
}

impl Dataset {
    /// # Overview
    ///
    /// Wraps samples after checking they all share the first sample's
    /// dimension.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        let dim = samples.first().map_or(0, Sample::dim);
        if let Some(bad) = samples.iter().find(|s| s.dim() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                got:      bad.dim()
            });
        }
        Ok(Self {
            samples,
            dim
        })
    }

    /// # Overview
    ///
    /// Builds a dataset from `(features, label)` pairs with numeric labels,
    /// rejecting any label other than `-1` or `+1`.
    pub fn from_signed<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<f64>, f64)>
    {
        let samples = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (features, y))| {
                Label::from_sign(y)
                    .map(|label| Sample::new(features, label))
                    .ok_or(Error::InvalidLabel {
                        index,
                        value: y.to_string()
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(samples)
    }

    /// # Overview
    ///
    /// Keeps only samples of the two given raw classes, mapping `negative`
    /// to `-1` and `positive` to `+1`. Relative order is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use perceptron_winnow::{Dataset, Label};
    ///
    /// let raw = vec![(vec![0.1], 4u8), (vec![0.2], 7), (vec![0.3], 9)];
    /// let data = Dataset::binary_subset(raw, 4, 9).unwrap();
    ///
    /// assert_eq!(data.len(), 2);
    /// assert_eq!(data.samples()[0].label, Label::Negative);
    /// assert_eq!(data.samples()[1].label, Label::Positive);
    /// ```
    pub fn binary_subset<I, C>(pairs: I, negative: C, positive: C) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<f64>, C)>,
        C: PartialEq
    {
        let samples = pairs
            .into_iter()
            .filter_map(|(features, class)| {
                if class == negative {
                    Some(Sample::new(features, Label::Negative))
                } else if class == positive {
                    Some(Sample::new(features, Label::Positive))
                } else {
                    None
                }
            })
            .collect();
        Self::new(samples)
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Feature dimension (0 for an empty dataset).
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// # Overview
    ///
    /// Number of positive and negative samples.
    #[must_use]
    pub fn class_counts(&self) -> (usize, usize) {
        let positives = self.samples.iter().filter(|s| s.label.is_positive()).count();
        (positives, self.samples.len() - positives)
    }

    /// # Overview
    ///
    /// The first `n` samples in order (all of them if `n >= len`).
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            samples: self.samples.iter().take(n).cloned().collect(),
            dim:     self.dim
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// # Overview
    ///
    /// Fails with [`Error::EmptyDataset`] if there are no samples.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(())
    }

    /// # Overview
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `weights` matches the
    /// feature dimension. An empty dataset accepts any weight length.
    pub fn check_weights(&self, weights: &[f64]) -> Result<()> {
        if !self.is_empty() && weights.len() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                got:      weights.len()
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Sample>> for Dataset {
    type Error = Error;

    fn try_from(samples: Vec<Sample>) -> Result<Self> {
        Self::new(samples)
    }
}

impl From<Dataset> for Vec<Sample> {
    fn from(dataset: Dataset) -> Self {
        dataset.samples
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = core::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_signs() {
        assert_eq!(Label::Positive.sign(), 1.0);
        assert_eq!(Label::Negative.sign(), -1.0);
        assert_eq!(Label::from_sign(1.0), Some(Label::Positive));
        assert_eq!(Label::from_sign(-1.0), Some(Label::Negative));
        assert_eq!(Label::from_sign(0.0), None);
    }

    #[test]
    fn rejects_mixed_dimensions() {
        let result = Dataset::new(vec![
            Sample::new(vec![1.0, 2.0], Label::Positive),
            Sample::new(vec![1.0], Label::Negative),
        ]);
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        );
    }

    #[test]
    fn conversion_from_samples_checks_dimension() {
        let mixed = vec![
            Sample::new(vec![1.0, 2.0], Label::Positive),
            Sample::new(vec![1.0], Label::Negative),
        ];
        assert_eq!(
            Dataset::try_from(mixed),
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        );

        let samples = vec![Sample::new(vec![0.5, 0.5], Label::Negative)];
        let data = Dataset::try_from(samples.clone()).unwrap();
        assert_eq!(data.dim(), 2);
        assert_eq!(Vec::<Sample>::from(data), samples);
    }

    #[test]
    fn from_signed_rejects_bad_label() {
        let result = Dataset::from_signed(vec![(vec![1.0], 1.0), (vec![2.0], 0.0)]);
        assert_eq!(
            result,
            Err(Error::InvalidLabel {
                index: 1,
                value: "0".into()
            })
        );
    }

    #[test]
    fn binary_subset_filters_and_relabels() {
        let raw = vec![
            (vec![0.0, 1.0], 9u8),
            (vec![1.0, 0.0], 4),
            (vec![1.0, 1.0], 3),
            (vec![0.5, 0.5], 9),
        ];
        let data = Dataset::binary_subset(raw, 4, 9).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.class_counts(), (2, 1));
        let labels: Vec<Label> = data.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Label::Positive, Label::Negative, Label::Positive]);
        assert_eq!(data.samples()[2].features, vec![0.5, 0.5]);
    }

    #[test]
    fn empty_dataset() {
        let data = Dataset::new(Vec::new()).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.dim(), 0);
        assert_eq!(data.ensure_not_empty(), Err(Error::EmptyDataset));
        assert!(data.check_weights(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn head_truncates() {
        let data =
            Dataset::from_signed((0..10).map(|i| (vec![i as f64], if i % 2 == 0 { 1.0 } else { -1.0 })))
                .unwrap();

        let first = data.head(3);
        assert_eq!(first.len(), 3);
        assert_eq!(first.dim(), 1);
        assert_eq!(first.samples()[2].features, vec![2.0]);
        assert_eq!(data.head(100).len(), 10);
    }

    #[test]
    fn check_weights_dimension() {
        let data = Dataset::from_signed(vec![(vec![1.0, 2.0, 3.0], 1.0)]).unwrap();
        assert!(data.check_weights(&[0.0; 3]).is_ok());
        assert_eq!(
            data.check_weights(&[0.0; 2]),
            Err(Error::DimensionMismatch {
                expected: 3,
                got:      2
            })
        );
    }
}
