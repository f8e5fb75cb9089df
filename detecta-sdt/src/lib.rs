//! Signal detection theory measures and ROC analysis.
//!
//! - [`rates`] — hit and false-alarm rates with a zero-denominator fallback
//! - [`sensitivity`] — d′ and criterion from rates
//! - [`detection`] — [`SignalDetection`], one 2×2 table of counts
//! - [`curve`] — ROC points and trapezoidal AUC
//! - [`experiment`] — [`Experiment`], the ROC aggregator over conditions
//! - [`plot`] — the hand-off to a plotting backend
//!
//! ```
//! use detecta_sdt::{Experiment, SignalDetection};
//!
//! let mut exp = Experiment::new();
//! exp.add_condition(SignalDetection::from_counts(0, 0, 0, 0), Some("origin"));
//! exp.add_condition(SignalDetection::from_counts(10, 0, 0, 10), Some("perfect"));
//! exp.add_condition(SignalDetection::from_counts(10, 0, 10, 0), Some("always yes"));
//!
//! assert!((exp.compute_auc()? - 1.0).abs() < 1e-12);
//! # Ok::<(), detecta_core::DetectaError>(())
//! ```

pub mod curve;
pub mod detection;
pub mod experiment;
pub mod plot;
pub mod rates;
pub mod sensitivity;

pub use curve::{trapezoidal_auc, RocCurve, RocPoint};
pub use detection::SignalDetection;
pub use experiment::{Condition, Experiment};
pub use plot::{ChartStyle, RocChart, RocPlotter};
