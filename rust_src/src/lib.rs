//! Rasch (one-parameter logistic IRT) estimation in Rust.
//!
//! This crate provides:
//! - The Rasch success probability, item information and joint log-likelihood
//! - Validated binary response matrices
//! - Ability and difficulty estimation by alternating coordinate gradient updates
//! - Nearest-difficulty item recommendation
//! - Seeded response simulation for parameter-recovery checks
//! - Optional Python bindings (`python` feature)
//!
//! ```
//! use rasch_rs::{estimate, recommend_item, EstimatorConfig, ResponseMatrix};
//!
//! let responses =
//!     ResponseMatrix::from_rows(&[vec![1, 0, 1, 1], vec![0, 0, 1, 0], vec![1, 1, 1, 1]])?;
//! let fit = estimate(&responses, &EstimatorConfig::default())?;
//! let item = recommend_item(fit.abilities[0], fit.difficulties.as_slice().unwrap_or(&[]))?;
//! assert!(item < responses.n_items());
//! # Ok::<(), rasch_rs::RaschError>(())
//! ```

pub mod utils;

pub mod config;
pub mod error;
pub mod estimation;
pub mod probability;
pub mod recommend;
pub mod response;
pub mod simulation;

#[cfg(feature = "python")]
pub mod python;

pub use config::EstimatorConfig;
pub use error::{RaschError, Result};
pub use estimation::{estimate, estimate_from_rows, RaschEstimate, RaschEstimator};
pub use probability::{item_information, log_likelihood, rasch_probability};
pub use recommend::{recommend_item, recommend_items};
pub use response::ResponseMatrix;
pub use simulation::{simulate_abilities, simulate_responses};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module for rasch_rs
#[cfg(feature = "python")]
#[pymodule]
fn rasch_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)?;
    Ok(())
}
