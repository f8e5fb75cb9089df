//! ROC curve points and trapezoidal area estimation.
//!
//! A ROC curve here is a sequence of (false-alarm rate, hit rate) points,
//! one per experimental condition, ordered by false-alarm rate. The area
//! under it is estimated with the composite trapezoidal rule, without
//! clamping or smoothing.

use detecta_core::{DetectaError, Result};

// ---------------------------------------------------------------------------
// ROC Curve
// ---------------------------------------------------------------------------

/// A single point on the ROC curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPoint {
    /// False-alarm rate: FA / (FA + CR).
    pub false_alarm_rate: f64,
    /// Hit rate: H / (H + M).
    pub hit_rate: f64,
    /// Label of the condition this point came from.
    pub label: Option<String>,
}

/// ROC curve with AUC.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// Points on the curve, in non-decreasing false-alarm-rate order.
    pub points: Vec<RocPoint>,
    /// Area under the ROC curve (trapezoidal rule).
    pub auc: f64,
}

impl RocCurve {
    /// The x coordinates, in curve order.
    pub fn false_alarm_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.false_alarm_rate).collect()
    }

    /// The y coordinates, in curve order.
    pub fn hit_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.hit_rate).collect()
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------

/// Trapezoidal AUC: sum of `(x[i+1] - x[i]) * (y[i+1] + y[i]) / 2` over
/// consecutive points.
///
/// Points are integrated in the order given. Widths are signed, so an
/// unsorted `x` is integrated mechanically rather than rejected. Fewer than
/// two points give 0.0.
///
/// # Errors
///
/// Returns an error if `x` and `y` have different lengths.
pub fn trapezoidal_auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(DetectaError::InvalidInput(format!(
            "x length {} != y length {}",
            x.len(),
            y.len()
        )));
    }
    let mut auc = 0.0;
    for i in 1..x.len() {
        auc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
    }
    Ok(auc)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
