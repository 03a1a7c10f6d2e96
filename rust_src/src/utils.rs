//! Shared numeric helpers.

/// Half an ulp below 1.0; `1.0 - PROB_EPSILON` is the largest f64 under 1.
pub const PROB_EPSILON: f64 = f64::EPSILON / 2.0;

/// Logistic function, evaluated so that `exp` never sees a positive argument.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let exp_x = x.exp();
        exp_x / (1.0 + exp_x)
    }
}

#[inline]
pub fn log_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        -(-x).exp().ln_1p()
    } else {
        x - x.exp().ln_1p()
    }
}

#[inline]
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}
