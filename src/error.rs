//! Error types for the online linear classifiers and their evaluation.

use core::fmt;

/// # Overview
///
/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed data or parameters supplied by the caller.
    InvalidInput,
    /// A rate or fraction whose denominator is zero.
    DivisionByZero
}

/// # Overview
///
/// Errors that can occur when building a dataset, training a model or
/// evaluating weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyDataset,
    DimensionMismatch { expected: usize, got: usize },
    ZeroDimension,
    InvalidLabel { index: usize, value: String },
    MissingEpochs,
    InvalidConvergence,
    InvalidLearningRate,
    InvalidSweep,
    LengthMismatch { fpr: usize, tpr: usize },
    InvalidIdx { reason: String },
    Io { message: String },
    DivisionByZero { quantity: &'static str }
}

impl Error {
    /// # Overview
    ///
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero {
                ..
            } => ErrorKind::DivisionByZero,
            _ => ErrorKind::InvalidInput
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::ZeroDimension => write!(f, "feature dimension must be > 0"),
            Self::InvalidLabel {
                index,
                value
            } => {
                write!(f, "sample {index}: label must be -1 or +1, got {value}")
            }
            Self::MissingEpochs => write!(f, "epochs is required and must be > 0"),
            Self::InvalidConvergence => write!(f, "convergence must be in [0, 1]"),
            Self::InvalidLearningRate => write!(f, "learning rate must be finite and > 0"),
            Self::InvalidSweep => {
                write!(f, "bias sweep needs finite bounds and at least one point")
            }
            Self::LengthMismatch {
                fpr,
                tpr
            } => {
                write!(f, "ROC length mismatch: {fpr} FPR values, {tpr} TPR values")
            }
            Self::InvalidIdx {
                reason
            } => write!(f, "invalid IDX data: {reason}"),
            Self::Io {
                message
            } => write!(f, "i/o error: {message}"),
            Self::DivisionByZero {
                quantity
            } => write!(f, "division by zero computing {quantity}")
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string()
        }
    }
}

/// # Overview
///
/// Result type for classifier operations.
pub type Result<T> = core::result::Result<T, Error>;
