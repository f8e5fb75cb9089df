//! Response rates from 2×2 signal-response counts.
//!
//! Both rates share one policy: when the denominator is zero the rate is
//! `0.0`, never NaN and never an error. A condition with no signal trials
//! therefore reports a hit rate of 0 rather than "undefined".

/// Hit rate: `hits / (hits + misses)`.
///
/// Returns 0.0 if `hits + misses == 0`.
pub fn hit_rate(hits: f64, misses: f64) -> f64 {
    proportion(hits, misses)
}

/// False-alarm rate: `false_alarms / (false_alarms + correct_rejections)`.
///
/// Returns 0.0 if `false_alarms + correct_rejections == 0`.
pub fn false_alarm_rate(false_alarms: f64, correct_rejections: f64) -> f64 {
    proportion(false_alarms, correct_rejections)
}

fn proportion(part: f64, rest: f64) -> f64 {
    let total = part + rest;
    if total == 0.0 {
        return 0.0;
    }
    part / total
}
