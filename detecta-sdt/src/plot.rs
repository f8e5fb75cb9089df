//! Hand-off of a ROC curve to a plotting backend.
//!
//! Rendering is left to the caller. This module fixes the data a renderer
//! receives ([`RocChart`]), its presentation settings ([`ChartStyle`]), and
//! the trait a renderer implements ([`RocPlotter`]).

use detecta_core::{DetectaError, Result};

use crate::curve::RocCurve;

/// Presentation settings for a ROC chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartStyle {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Legend entry for the ROC series.
    pub curve_label: String,
    /// Legend entry for the chance diagonal.
    pub chance_label: String,
    /// Figure width in inches.
    pub width: f64,
    /// Figure height in inches.
    pub height: f64,
    /// Draw a background grid.
    pub grid: bool,
    /// Draw a marker at every condition.
    pub markers: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "ROC Curve".into(),
            x_label: "False Alarm Rate".into(),
            y_label: "Hit Rate".into(),
            curve_label: "ROC Curve".into(),
            chance_label: "Chance Level".into(),
            width: 6.0,
            height: 6.0,
            grid: true,
            markers: true,
        }
    }
}

impl ChartStyle {
    /// Check that the figure size is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DetectaError::InvalidInput(format!(
                    "chart {} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Everything a renderer needs to draw one ROC chart.
///
/// `false_alarm_rates` and `hit_rates` are aligned index-for-index and are
/// meant to be connected in order. The chance diagonal runs from `(0, 0)`
/// to `(1, 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocChart {
    false_alarm_rates: Vec<f64>,
    hit_rates: Vec<f64>,
    point_labels: Vec<Option<String>>,
    style: ChartStyle,
}

impl RocChart {
    /// Endpoints of the chance-level diagonal.
    pub const CHANCE_LINE: [(f64, f64); 2] = [(0.0, 0.0), (1.0, 1.0)];

    /// Build a chart from aligned coordinate sequences.
    ///
    /// Points get no labels; see [`RocChart::from_curve`] to carry condition
    /// labels through.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length or the style is
    /// invalid.
    pub fn new(
        false_alarm_rates: Vec<f64>,
        hit_rates: Vec<f64>,
        style: ChartStyle,
    ) -> Result<Self> {
        if false_alarm_rates.len() != hit_rates.len() {
            return Err(DetectaError::InvalidInput(format!(
                "false alarm rates length {} != hit rates length {}",
                false_alarm_rates.len(),
                hit_rates.len()
            )));
        }
        style.validate()?;
        let point_labels = vec![None; false_alarm_rates.len()];
        Ok(Self {
            false_alarm_rates,
            hit_rates,
            point_labels,
            style,
        })
    }

    /// Build a chart from a computed ROC curve, keeping condition labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is invalid.
    pub fn from_curve(curve: &RocCurve, style: ChartStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            false_alarm_rates: curve.false_alarm_rates(),
            hit_rates: curve.hit_rates(),
            point_labels: curve.points.iter().map(|p| p.label.clone()).collect(),
            style,
        })
    }

    /// X coordinates, in drawing order.
    pub fn false_alarm_rates(&self) -> &[f64] {
        &self.false_alarm_rates
    }

    /// Y coordinates, in drawing order.
    pub fn hit_rates(&self) -> &[f64] {
        &self.hit_rates
    }

    /// Per-point condition labels, aligned with the coordinates.
    pub fn point_labels(&self) -> &[Option<String>] {
        &self.point_labels
    }

    /// Presentation settings.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Number of points in the ROC series.
    pub fn len(&self) -> usize {
        self.false_alarm_rates.len()
    }

    /// Whether the ROC series has no points.
    pub fn is_empty(&self) -> bool {
        self.false_alarm_rates.is_empty()
    }
}

/// A backend that turns a [`RocChart`] into something visible: a window,
/// an image file, an SVG string.
pub trait RocPlotter {
    /// What the backend produces (a file path, encoded bytes, `()`).
    type Output;

    /// Render one chart.
    fn plot(&mut self, chart: &RocChart) -> Result<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::RocPoint;

    #[test]
    fn default_style_matches_conventional_roc_plot() {
        let style = ChartStyle::default();
        assert_eq!(style.title, "ROC Curve");
        assert_eq!(style.x_label, "False Alarm Rate");
        assert_eq!(style.y_label, "Hit Rate");
        assert_eq!(style.chance_label, "Chance Level");
        assert_eq!((style.width, style.height), (6.0, 6.0));
        assert!(style.validate().is_ok());
    }

    #[test]
    fn invalid_figure_size() {
        let style = ChartStyle {
            width: 0.0,
            ..ChartStyle::default()
        };
        assert!(style.validate().unwrap_err().is_invalid_input());
        let style = ChartStyle {
            height: f64::NAN,
            ..ChartStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn new_rejects_misaligned_sequences() {
        let err = RocChart::new(vec![0.0, 1.0], vec![0.0], ChartStyle::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn new_leaves_points_unlabeled() {
        let chart = RocChart::new(vec![0.0, 0.5], vec![0.2, 0.9], ChartStyle::default()).unwrap();
        assert_eq!(chart.len(), 2);
        assert!(chart.point_labels().iter().all(Option::is_none));
    }

    #[test]
    fn from_curve_carries_labels() {
        let curve = RocCurve {
            points: vec![
                RocPoint {
                    false_alarm_rate: 0.2,
                    hit_rate: 0.5,
                    label: Some("lenient".into()),
                },
                RocPoint {
                    false_alarm_rate: 0.4,
                    hit_rate: 0.9,
                    label: None,
                },
            ],
            auc: 0.14,
        };
        let chart = RocChart::from_curve(&curve, ChartStyle::default()).unwrap();
        assert_eq!(chart.false_alarm_rates(), &[0.2, 0.4]);
        assert_eq!(chart.hit_rates(), &[0.5, 0.9]);
        assert_eq!(chart.point_labels()[0].as_deref(), Some("lenient"));
        assert_eq!(chart.point_labels()[1], None);
    }

    #[test]
    fn chance_line_spans_unit_square() {
        assert_eq!(RocChart::CHANCE_LINE, [(0.0, 0.0), (1.0, 1.0)]);
    }
}
