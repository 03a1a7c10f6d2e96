//! Seeded simulation of Rasch response data from known parameters.

use ndarray::{Array1, Array2, ArrayView1};
use rand::prelude::*;
use rand_distr::Normal;
use rand_pcg::Pcg64;
use rayon::prelude::*;

use crate::error::{RaschError, Result};
use crate::probability::rasch_probability;
use crate::response::ResponseMatrix;

/// Draw `n` abilities from `Normal(mean, sd)`.
pub fn simulate_abilities(n: usize, mean: f64, sd: f64, seed: u64) -> Result<Array1<f64>> {
    if !mean.is_finite() || !(sd.is_finite() && sd > 0.0) {
        return Err(RaschError::InvalidArgument(format!(
            "ability distribution needs a finite mean and positive finite sd, got mean {mean}, sd {sd}"
        )));
    }
    let normal = Normal::new(mean, sd).map_err(|e| {
        RaschError::InvalidArgument(format!("invalid normal distribution: {e}"))
    })?;
    let mut rng = Pcg64::seed_from_u64(seed);
    Ok((0..n).map(|_| normal.sample(&mut rng)).collect())
}

/// Draw a response matrix where cell `(i, j)` is 1 with probability
/// `rasch_probability(theta[i], difficulty[j])`.
///
/// Each person gets its own generator seeded from `seed` and the row index,
/// so the result depends only on the inputs and not on thread scheduling.
pub fn simulate_responses(
    theta: ArrayView1<'_, f64>,
    difficulty: ArrayView1<'_, f64>,
    seed: u64,
) -> Result<ResponseMatrix> {
    let n_persons = theta.len();
    let n_items = difficulty.len();
    if n_persons == 0 || n_items == 0 {
        return Err(RaschError::EmptyMatrix { n_persons, n_items });
    }
    if theta.iter().chain(difficulty.iter()).any(|x| !x.is_finite()) {
        return Err(RaschError::InvalidArgument(
            "abilities and difficulties must be finite".to_string(),
        ));
    }

    let diff_vec: Vec<f64> = difficulty.to_vec();
    let theta_vec: Vec<f64> = theta.to_vec();

    let rows: Vec<Vec<u8>> = (0..n_persons)
        .into_par_iter()
        .map(|i| {
            let mut rng = Pcg64::seed_from_u64(seed.wrapping_add(i as u64));
            let theta_i = theta_vec[i];

            diff_vec
                .iter()
                .map(|&b| {
                    let u: f64 = rng.random();
                    if u < rasch_probability(theta_i, b) {
                        1
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();

    let mut result = Array2::zeros((n_persons, n_items));
    for (i, row) in rows.iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            result[[i, j]] = val;
        }
    }

    Ok(ResponseMatrix::from_binary(result))
}
