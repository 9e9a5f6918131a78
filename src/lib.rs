//! # Perceptron and Balanced Winnow
//!
//! Online, mistake-driven linear classifiers for two-class data, plus the
//! metrics used to judge them: accuracy over epochs, confusion matrices, ROC
//! curves from a bias sweep, and trapezoidal AUC.
//!
//! # Features
//!
//! - `serde`: Serialization support for datasets, configs, learners and
//!   evaluation results
//!
//! # Examples
//!
//! ```
//! use perceptron_winnow::{BiasSweep, Config, ConfusionMatrix, Dataset, metrics, perceptron, roc};
//!
//! let data = Dataset::from_signed(vec![
//!     (vec![2.0, 1.0], 1.0),
//!     (vec![1.0, 3.0], 1.0),
//!     (vec![-1.0, -2.0], -1.0),
//!     (vec![-3.0, 1.0], -1.0),
//! ])
//! .unwrap();
//!
//! let config = Config::builder().epochs(100).build().unwrap();
//! let result = perceptron::train(&data, &config).unwrap();
//!
//! let curve = metrics::accuracy_curve(&data, result.snapshots()).unwrap();
//! assert_eq!(curve.last(), Some(&1.0));
//!
//! let w = result.final_weights().unwrap();
//! let cm = ConfusionMatrix::compute(&data, w, 0.0).unwrap();
//! assert_eq!(cm.as_array(), [[2, 0], [0, 2]]);
//!
//! let roc = roc::roc(&data, w, &BiasSweep::new(-100.0, 100.0, 2001).unwrap()).unwrap();
//! assert!((roc.auc() - 1.0).abs() < 1e-9);
//! ```

mod config;
mod dataset;
pub mod error;
pub mod idx;
pub mod metrics;
mod model;
pub mod perceptron;
pub mod roc;
pub mod training;
pub mod utils;
pub mod winnow;

pub use config::{Config, ConfigBuilder, DEFAULT_CONVERGENCE, DEFAULT_LEARNING_RATE};
pub use dataset::{Dataset, Label, Sample};
pub use error::{Error, ErrorKind, Result};
pub use metrics::ConfusionMatrix;
pub use model::OnlineLearner;
pub use perceptron::Perceptron;
pub use roc::{BiasSweep, RocCurve};
pub use training::{EpochHistory, FitResult, ProgressCallback};
pub use winnow::{BalancedWinnow, SweepPoint};
