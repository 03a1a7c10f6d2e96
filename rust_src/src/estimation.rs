//! Rasch parameter estimation by alternating coordinate gradient updates.
//!
//! Each iteration runs two phases in a fixed order:
//! 1. abilities move along their gradient against the current difficulties;
//! 2. difficulties move along their gradient against the abilities produced
//!    by phase 1.
//!
//! Gradients for one person (or item) are summed sequentially in index order.
//! With `parallel` enabled only the persons (or items) of a phase are spread
//! across rayon workers, so serial and parallel runs give identical bits.

use ndarray::Array1;
use rayon::prelude::*;

use crate::config::EstimatorConfig;
use crate::error::{RaschError, Result};
use crate::probability::{log_likelihood_unchecked, rasch_probability};
use crate::recommend::recommend_items;
use crate::response::ResponseMatrix;

const TRACE_EVERY: usize = 100;

/// Final parameter estimates, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RaschEstimate {
    pub abilities: Array1<f64>,
    pub difficulties: Array1<f64>,
    pub iterations: usize,
    pub log_likelihood: f64,
}

impl RaschEstimate {
    /// Nearest-difficulty item for every person.
    pub fn recommendations(&self) -> Result<Vec<usize>> {
        recommend_items(self.abilities.view(), self.difficulties.view())
    }
}

/// Owns the working ability and difficulty vectors for one estimation run.
///
/// Both vectors start at zero. They can be read between steps but only the
/// estimator mutates them.
#[derive(Debug, Clone)]
pub struct RaschEstimator<'a> {
    responses: &'a ResponseMatrix,
    config: EstimatorConfig,
    theta: Array1<f64>,
    difficulty: Array1<f64>,
    iterations_run: usize,
}

impl<'a> RaschEstimator<'a> {
    pub fn new(responses: &'a ResponseMatrix, config: EstimatorConfig) -> Result<Self> {
        config.validate()?;

        // Every gradient is bounded by the larger matrix dimension, so this
        // product bounds how far any parameter can move over the whole run.
        let max_dim = responses.n_persons().max(responses.n_items()) as f64;
        let max_drift = config.learning_rate * config.iterations as f64 * max_dim;
        if !max_drift.is_finite() {
            return Err(RaschError::InvalidConfig(format!(
                "learning rate {} over {} iterations can overflow a {} x {} estimation",
                config.learning_rate,
                config.iterations,
                responses.n_persons(),
                responses.n_items()
            )));
        }

        Ok(Self {
            responses,
            config,
            theta: Array1::zeros(responses.n_persons()),
            difficulty: Array1::zeros(responses.n_items()),
            iterations_run: 0,
        })
    }

    pub fn abilities(&self) -> &Array1<f64> {
        &self.theta
    }

    pub fn difficulties(&self) -> &Array1<f64> {
        &self.difficulty
    }

    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn log_likelihood(&self) -> f64 {
        log_likelihood_unchecked(self.responses, self.theta.view(), self.difficulty.view())
    }

    /// Phase 1: `theta_i += lr * sum_j (x_ij - p(theta_i, b_j))`.
    pub(crate) fn update_abilities(&mut self) {
        let responses = self.responses;
        let difficulty = &self.difficulty;
        let theta = &self.theta;
        let gradient = |i: usize| ability_gradient(responses, i, theta[i], difficulty);

        let grads: Vec<f64> = if self.config.parallel {
            (0..responses.n_persons()).into_par_iter().map(gradient).collect()
        } else {
            (0..responses.n_persons()).map(gradient).collect()
        };

        let lr = self.config.learning_rate;
        for (t, g) in self.theta.iter_mut().zip(grads) {
            *t += lr * g;
        }
    }

    /// Phase 2: `b_j += lr * sum_i (p(theta_i, b_j) - x_ij)`.
    pub(crate) fn update_difficulties(&mut self) {
        let responses = self.responses;
        let difficulty = &self.difficulty;
        let theta = &self.theta;
        let gradient = |j: usize| difficulty_gradient(responses, j, difficulty[j], theta);

        let grads: Vec<f64> = if self.config.parallel {
            (0..responses.n_items()).into_par_iter().map(gradient).collect()
        } else {
            (0..responses.n_items()).map(gradient).collect()
        };

        let lr = self.config.learning_rate;
        for (b, g) in self.difficulty.iter_mut().zip(grads) {
            *b += lr * g;
        }
    }

    /// One full iteration: abilities first, then difficulties against the
    /// freshly updated abilities.
    pub fn step(&mut self) {
        self.update_abilities();
        self.update_difficulties();
        self.iterations_run += 1;
    }

    /// Finish the configured number of iterations, counting any steps
    /// already taken, and hand back the estimates.
    pub fn run(mut self) -> RaschEstimate {
        log::debug!(
            "Rasch estimation: {} persons x {} items, {} iterations, learning rate {}, parallel={}",
            self.responses.n_persons(),
            self.responses.n_items(),
            self.config.iterations,
            self.config.learning_rate,
            self.config.parallel
        );

        while self.iterations_run < self.config.iterations {
            self.step();
            if self.iterations_run % TRACE_EVERY == 0 && log::log_enabled!(log::Level::Trace) {
                log::trace!(
                    "iteration {}: log-likelihood {:.6}",
                    self.iterations_run,
                    self.log_likelihood()
                );
            }
        }

        let log_likelihood = self.log_likelihood();
        log::info!(
            "Rasch estimation finished after {} iterations, log-likelihood {:.6}",
            self.iterations_run,
            log_likelihood
        );

        RaschEstimate {
            abilities: self.theta,
            difficulties: self.difficulty,
            iterations: self.iterations_run,
            log_likelihood,
        }
    }
}

#[inline]
fn ability_gradient(
    responses: &ResponseMatrix,
    person: usize,
    theta: f64,
    difficulty: &Array1<f64>,
) -> f64 {
    let mut grad = 0.0;
    for (j, &b) in difficulty.iter().enumerate() {
        grad += responses.get(person, j) as f64 - rasch_probability(theta, b);
    }
    grad
}

#[inline]
fn difficulty_gradient(
    responses: &ResponseMatrix,
    item: usize,
    difficulty: f64,
    theta: &Array1<f64>,
) -> f64 {
    let mut grad = 0.0;
    for (i, &t) in theta.iter().enumerate() {
        grad += rasch_probability(t, difficulty) - responses.get(i, item) as f64;
    }
    grad
}

/// Estimate abilities and difficulties for a validated response matrix.
pub fn estimate(responses: &ResponseMatrix, config: &EstimatorConfig) -> Result<RaschEstimate> {
    Ok(RaschEstimator::new(responses, *config)?.run())
}

/// Validate raw rows and the configuration, then estimate.
///
/// Nothing is allocated for abilities or difficulties unless every check
/// passes.
pub fn estimate_from_rows<R: AsRef<[i32]>>(
    rows: &[R],
    config: &EstimatorConfig,
) -> Result<RaschEstimate> {
    config.validate()?;
    let responses = ResponseMatrix::from_rows(rows)?;
    estimate(&responses, config)
}
