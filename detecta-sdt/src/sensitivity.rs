//! Equal-variance Gaussian sensitivity and bias.
//!
//! Rates are mapped to z-scores with the standard-normal quantile function,
//! then combined:
//!
//! - `d' = z(H) - z(F)`
//! - `c  = -0.5 * (z(H) + z(F))`
//!
//! Rates of exactly 0 or 1 are not corrected. Their z-scores are infinite,
//! so d′ and c can come out as ±∞, or NaN when both rates saturate at the
//! same extreme. Those values are returned as is.

use detecta_stats::probit;

/// Sensitivity index d′ from a hit rate and a false-alarm rate.
pub fn d_prime(hit_rate: f64, false_alarm_rate: f64) -> f64 {
    probit(hit_rate) - probit(false_alarm_rate)
}

/// Response criterion c from a hit rate and a false-alarm rate.
///
/// Positive values mean a conservative observer, negative a liberal one.
pub fn criterion(hit_rate: f64, false_alarm_rate: f64) -> f64 {
    -0.5 * (probit(hit_rate) + probit(false_alarm_rate))
}
