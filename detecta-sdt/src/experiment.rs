//! ROC analysis across experimental conditions.
//!
//! An [`Experiment`] collects [`SignalDetection`] measurements, one per
//! condition, in the order they were added. Queries order the conditions by
//! false-alarm rate to form a ROC curve and integrate it with the
//! trapezoidal rule.

use std::cmp::Ordering;
use std::sync::Arc;

use detecta_core::{Annotated, DetectaError, Result, Summarizable};

use crate::curve::{trapezoidal_auc, RocCurve, RocPoint};
use crate::detection::SignalDetection;
use crate::plot::{ChartStyle, RocChart, RocPlotter};

/// One registered condition: a shared measurement and an optional label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    measurement: Arc<SignalDetection>,
    label: Option<String>,
}

impl Condition {
    /// The measurement for this condition.
    pub fn measurement(&self) -> &SignalDetection {
        &self.measurement
    }

    /// A shared handle to the measurement.
    pub fn shared_measurement(&self) -> Arc<SignalDetection> {
        Arc::clone(&self.measurement)
    }

    /// The display label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Annotated for Condition {
    fn name(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// An ordered, append-only set of conditions.
///
/// Appending takes `&mut self`; wrap the experiment in a lock to share it
/// between threads.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experiment {
    conditions: Vec<Condition>,
}

impl Experiment {
    /// Create an empty experiment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a condition.
    ///
    /// `measurement` can be an owned [`SignalDetection`] or an
    /// `Arc<SignalDetection>` the caller keeps a handle to.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use detecta_sdt::{Experiment, SignalDetection};
    ///
    /// let shared = Arc::new(SignalDetection::from_counts(8, 2, 3, 12));
    /// let mut exp = Experiment::new();
    /// exp.add_condition(Arc::clone(&shared), Some("shared"));
    /// exp.add_condition(SignalDetection::from_counts(5, 5, 10, 5), None);
    /// assert_eq!(exp.len(), 2);
    /// ```
    ///
    /// Anything that is not a measurement is rejected at compile time:
    ///
    /// ```compile_fail
    /// use detecta_sdt::Experiment;
    ///
    /// let mut exp = Experiment::new();
    /// exp.add_condition("invalid_object", Some("Invalid"));
    /// ```
    pub fn add_condition(
        &mut self,
        measurement: impl Into<Arc<SignalDetection>>,
        label: Option<&str>,
    ) {
        let condition = Condition {
            measurement: measurement.into(),
            label: label.map(str::to_owned),
        };
        tracing::debug!(
            index = self.conditions.len(),
            label = condition.label(),
            "adding condition"
        );
        self.conditions.push(condition);
    }

    /// Registered conditions, in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Iterate over registered conditions, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    /// Number of registered conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether no conditions have been registered.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// ROC points as two aligned sequences `(false_alarm_rates, hit_rates)`,
    /// ordered by ascending false-alarm rate.
    ///
    /// The sort is stable: conditions with equal false-alarm rates keep
    /// their insertion order. NaN rates (from NaN or infinite counts) sort
    /// after every number.
    ///
    /// # Errors
    ///
    /// Returns an error if no conditions have been added.
    pub fn sorted_roc_points(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let points = self.sorted_points()?;
        Ok(points
            .into_iter()
            .map(|p| (p.false_alarm_rate, p.hit_rate))
            .unzip())
    }

    /// Area under the ROC curve through the sorted points.
    ///
    /// A single condition yields 0.0. The result is not clamped to [0, 1].
    ///
    /// # Errors
    ///
    /// Returns an error if no conditions have been added.
    pub fn compute_auc(&self) -> Result<f64> {
        let (x, y) = self.sorted_roc_points()?;
        let auc = trapezoidal_auc(&x, &y)?;
        tracing::debug!(points = x.len(), auc, "computed AUC");
        Ok(auc)
    }

    /// The sorted ROC curve, with condition labels, and its AUC.
    ///
    /// # Errors
    ///
    /// Returns an error if no conditions have been added.
    pub fn roc_curve(&self) -> Result<RocCurve> {
        let points = self.sorted_points()?;
        let x: Vec<f64> = points.iter().map(|p| p.false_alarm_rate).collect();
        let y: Vec<f64> = points.iter().map(|p| p.hit_rate).collect();
        let auc = trapezoidal_auc(&x, &y)?;
        tracing::debug!(points = points.len(), auc, "built ROC curve");
        Ok(RocCurve { points, auc })
    }

    /// Hand the sorted ROC curve to a plotting backend.
    ///
    /// # Errors
    ///
    /// Returns an error if no conditions have been added, if `style` is
    /// invalid, or if the plotter fails.
    pub fn plot_roc_curve<P: RocPlotter>(
        &self,
        plotter: &mut P,
        style: ChartStyle,
    ) -> Result<P::Output> {
        let curve = self.roc_curve()?;
        let chart = RocChart::from_curve(&curve, style)?;
        tracing::debug!(points = chart.len(), "plotting ROC curve");
        plotter.plot(&chart)
    }

    fn sorted_points(&self) -> Result<Vec<RocPoint>> {
        if self.conditions.is_empty() {
            return Err(DetectaError::EmptyState(
                "no conditions added to the experiment".into(),
            ));
        }

        let mut points: Vec<RocPoint> = self
            .conditions
            .iter()
            .map(|c| RocPoint {
                false_alarm_rate: c.measurement.false_alarm_rate(),
                hit_rate: c.measurement.hit_rate(),
                label: c.label.clone(),
            })
            .collect();

        // `sort_by` is stable; ties keep insertion order
        points.sort_by(|a, b| by_rate(a.false_alarm_rate, b.false_alarm_rate));
        Ok(points)
    }
}

/// Total order on rates: numbers ascending (`-0.0 == 0.0`), then NaN.
fn by_rate(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

impl<'a> IntoIterator for &'a Experiment {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

impl Summarizable for Experiment {
    fn summary(&self) -> String {
        if self.is_empty() {
            return "0 conditions".to_string();
        }
        match self.compute_auc() {
            Ok(auc) => format!("{} conditions, AUC={:.4}", self.len(), auc),
            Err(e) => format!("{} conditions, AUC unavailable: {}", self.len(), e),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
