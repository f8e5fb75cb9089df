//! A single signal-detection measurement.
//!
//! [`SignalDetection`] holds the four cells of a 2×2 signal-response table
//! and derives rates, d′ and criterion on demand. Nothing is cached; the
//! counts are fixed at construction.

use detecta_core::{DetectaError, Result, Summarizable};

use crate::{rates, sensitivity};

/// Counts from one experimental condition.
///
/// | Signal  | "yes" response | "no" response        |
/// |---------|----------------|----------------------|
/// | present | `hits`         | `misses`             |
/// | absent  | `false_alarms` | `correct_rejections` |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalDetection {
    hits: f64,
    misses: f64,
    false_alarms: f64,
    correct_rejections: f64,
}

impl SignalDetection {
    /// Create a measurement from raw counts.
    ///
    /// No validation is performed; see [`SignalDetection::checked`] for a
    /// constructor that rejects negative or non-finite counts.
    pub fn new(hits: f64, misses: f64, false_alarms: f64, correct_rejections: f64) -> Self {
        Self {
            hits,
            misses,
            false_alarms,
            correct_rejections,
        }
    }

    /// Create a measurement from integer trial counts.
    pub fn from_counts(hits: u64, misses: u64, false_alarms: u64, correct_rejections: u64) -> Self {
        Self::new(
            hits as f64,
            misses as f64,
            false_alarms as f64,
            correct_rejections as f64,
        )
    }

    /// Create a measurement, rejecting negative, NaN or infinite counts.
    ///
    /// # Errors
    ///
    /// Returns [`DetectaError::InvalidInput`] naming the first offending count.
    pub fn checked(
        hits: f64,
        misses: f64,
        false_alarms: f64,
        correct_rejections: f64,
    ) -> Result<Self> {
        let cells = [
            ("hits", hits),
            ("misses", misses),
            ("false_alarms", false_alarms),
            ("correct_rejections", correct_rejections),
        ];
        for (name, value) in cells {
            if !value.is_finite() || value < 0.0 {
                return Err(DetectaError::InvalidInput(format!(
                    "{} must be a finite non-negative count, got {}",
                    name, value
                )));
            }
        }
        Ok(Self::new(hits, misses, false_alarms, correct_rejections))
    }

    /// Signal-present trials answered "yes".
    pub fn hits(&self) -> f64 {
        self.hits
    }

    /// Signal-present trials answered "no".
    pub fn misses(&self) -> f64 {
        self.misses
    }

    /// Signal-absent trials answered "yes".
    pub fn false_alarms(&self) -> f64 {
        self.false_alarms
    }

    /// Signal-absent trials answered "no".
    pub fn correct_rejections(&self) -> f64 {
        self.correct_rejections
    }

    /// `hits / (hits + misses)`, or 0.0 when there were no signal trials.
    pub fn hit_rate(&self) -> f64 {
        rates::hit_rate(self.hits, self.misses)
    }

    /// `false_alarms / (false_alarms + correct_rejections)`, or 0.0 when
    /// there were no noise trials.
    pub fn false_alarm_rate(&self) -> f64 {
        rates::false_alarm_rate(self.false_alarms, self.correct_rejections)
    }

    /// Sensitivity d′ = z(H) − z(F).
    ///
    /// Infinite when exactly one rate is 0 or 1, NaN when both saturate
    /// at the same extreme.
    pub fn d_prime(&self) -> f64 {
        let d = sensitivity::d_prime(self.hit_rate(), self.false_alarm_rate());
        if !d.is_finite() {
            tracing::trace!(measurement = ?self, d_prime = d, "non-finite d'");
        }
        d
    }

    /// Criterion c = −0.5 · (z(H) + z(F)).
    pub fn criterion(&self) -> f64 {
        let c = sensitivity::criterion(self.hit_rate(), self.false_alarm_rate());
        if !c.is_finite() {
            tracing::trace!(measurement = ?self, criterion = c, "non-finite criterion");
        }
        c
    }
}

impl Summarizable for SignalDetection {
    fn summary(&self) -> String {
        format!(
            "H={}, M={}, FA={}, CR={}: hit_rate={:.4}, fa_rate={:.4}, d'={:.4}, c={:.4}",
            self.hits,
            self.misses,
            self.false_alarms,
            self.correct_rejections,
            self.hit_rate(),
            self.false_alarm_rate(),
            self.d_prime(),
            self.criterion(),
        )
    }
}
