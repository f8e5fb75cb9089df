//! Standard-normal quantile function.
//!
//! [`probit`] maps a probability to the z-score that cuts off that much of
//! the lower tail of N(0, 1). Signal-detection sensitivity and bias are
//! built on it.

// Acklam's rational approximation to Φ⁻¹, relative error < 1.15e-9.
const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ACKLAM_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ACKLAM_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Break-point between the central and tail approximations.
const P_LOW: f64 = 0.02425;

/// Standard-normal quantile function Φ⁻¹(p), also known as the probit.
///
/// Boundary behaviour follows the usual quantile-function convention:
///
/// - `probit(0.0)` is `-∞` and `probit(1.0)` is `+∞`
/// - `p` outside `[0, 1]` (or NaN) yields NaN
///
/// Uses Acklam's algorithm: a rational approximation on the central region
/// `[0.02425, 0.97575]` and a rational function of `sqrt(-2 ln p)` in the
/// tails. Absolute error is below 1e-8 for `p` in `[1e-10, 1 - 1e-10]`.
pub fn probit(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        let a = &ACKLAM_A;
        let b = &ACKLAM_B;
        (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
            / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

/// Lower-tail rational function shared by both tails (upper tail negates it).
fn tail(q: f64) -> f64 {
    let c = &ACKLAM_C;
    let d = &ACKLAM_D;
    (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
        / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
}
