//! Estimator configuration.

use crate::error::{RaschError, Result};

pub const DEFAULT_ITERATIONS: usize = 500;
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Settings for [`RaschEstimator`](crate::estimation::RaschEstimator).
///
/// The defaults reproduce the fixed 500 iterations at step size 0.01. No
/// convergence tolerance exists; the loop always runs `iterations` times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    pub iterations: usize,
    pub learning_rate: f64,
    /// Spread per-person and per-item gradient work across rayon workers.
    pub parallel: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            parallel: false,
        }
    }
}

impl EstimatorConfig {
    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        Self {
            iterations,
            learning_rate,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RaschError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RaschError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
