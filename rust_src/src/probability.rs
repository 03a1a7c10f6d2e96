//! Rasch success probability and the quantities derived from it.

use ndarray::ArrayView1;

use crate::error::{RaschError, Result};
use crate::response::ResponseMatrix;
use crate::utils::{clip, log_sigmoid, sigmoid, PROB_EPSILON};

/// Probability that a person of ability `theta` answers an item of the given
/// difficulty correctly: `1 / (1 + exp(-(theta - difficulty)))`.
///
/// The result stays inside `[PROB_EPSILON, 1 - PROB_EPSILON]`, so it never
/// reaches 0 or 1 even when the gap saturates `f64`. Below that clip the curve
/// is strictly monotone out to gaps of roughly 36 logits.
#[inline]
pub fn rasch_probability(theta: f64, difficulty: f64) -> f64 {
    clip(sigmoid(theta - difficulty), PROB_EPSILON, 1.0 - PROB_EPSILON)
}

/// Fisher information of a Rasch item at `theta`, `p * (1 - p)`.
#[inline]
pub fn item_information(theta: f64, difficulty: f64) -> f64 {
    let p = rasch_probability(theta, difficulty);
    p * (1.0 - p)
}

/// Joint log-likelihood of the response matrix at the given parameters.
pub fn log_likelihood(
    responses: &ResponseMatrix,
    theta: ArrayView1<'_, f64>,
    difficulty: ArrayView1<'_, f64>,
) -> Result<f64> {
    check_dims(responses, theta, difficulty)?;
    Ok(log_likelihood_unchecked(responses, theta, difficulty))
}

pub(crate) fn log_likelihood_unchecked(
    responses: &ResponseMatrix,
    theta: ArrayView1<'_, f64>,
    difficulty: ArrayView1<'_, f64>,
) -> f64 {
    let mut ll = 0.0;
    for (i, &t) in theta.iter().enumerate() {
        for (j, &b) in difficulty.iter().enumerate() {
            let z = t - b;
            if responses.get(i, j) == 1 {
                ll += log_sigmoid(z);
            } else {
                ll += log_sigmoid(-z);
            }
        }
    }
    ll
}

pub(crate) fn check_dims(
    responses: &ResponseMatrix,
    theta: ArrayView1<'_, f64>,
    difficulty: ArrayView1<'_, f64>,
) -> Result<()> {
    if theta.len() != responses.n_persons() {
        return Err(RaschError::DimensionMismatch {
            expected: responses.n_persons(),
            actual: theta.len(),
        });
    }
    if difficulty.len() != responses.n_items() {
        return Err(RaschError::DimensionMismatch {
            expected: responses.n_items(),
            actual: difficulty.len(),
        });
    }
    Ok(())
}
