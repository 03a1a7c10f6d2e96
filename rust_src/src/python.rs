//! Python bindings for Rasch estimation and item recommendation.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{EstimatorConfig, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE};
use crate::error::RaschError;
use crate::estimation::estimate;
use crate::probability;
use crate::recommend;
use crate::response::ResponseMatrix;
use crate::simulation;

impl From<RaschError> for PyErr {
    fn from(err: RaschError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Estimate Rasch abilities and difficulties by coordinate gradient descent
#[pyfunction]
#[pyo3(signature = (responses, iterations=DEFAULT_ITERATIONS, learning_rate=DEFAULT_LEARNING_RATE, parallel=false))]
pub fn rasch_estimate<'py>(
    py: Python<'py>,
    responses: PyReadonlyArray2<i32>,
    iterations: usize,
    learning_rate: f64,
    parallel: bool,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let config = EstimatorConfig::new(iterations, learning_rate).with_parallel(parallel);
    config.validate()?;
    let responses = ResponseMatrix::from_array(responses.as_array())?;

    let result = py.detach(|| estimate(&responses, &config))?;

    Ok((
        result.abilities.to_pyarray(py),
        result.difficulties.to_pyarray(py),
    ))
}

/// Probability of a correct response at the given ability and difficulty
#[pyfunction]
pub fn rasch_probability(theta: f64, difficulty: f64) -> f64 {
    probability::rasch_probability(theta, difficulty)
}

/// Item whose difficulty is closest to theta (lowest index on ties)
#[pyfunction]
pub fn recommend_item(theta: f64, difficulties: PyReadonlyArray1<f64>) -> PyResult<usize> {
    let diff = difficulties.as_array().to_vec();
    Ok(recommend::recommend_item(theta, &diff)?)
}

/// Closest-difficulty item for each ability
#[pyfunction]
pub fn recommend_items<'py>(
    py: Python<'py>,
    thetas: PyReadonlyArray1<f64>,
    difficulties: PyReadonlyArray1<f64>,
) -> PyResult<Bound<'py, PyArray1<i64>>> {
    let items = recommend::recommend_items(thetas.as_array(), difficulties.as_array())?;
    let items: Vec<i64> = items.into_iter().map(|j| j as i64).collect();
    Ok(items.to_pyarray(py))
}

/// Simulate a 0/1 response matrix from known abilities and difficulties
#[pyfunction]
pub fn simulate_responses<'py>(
    py: Python<'py>,
    theta: PyReadonlyArray1<f64>,
    difficulty: PyReadonlyArray1<f64>,
    seed: u64,
) -> PyResult<Bound<'py, PyArray2<i32>>> {
    let responses = simulation::simulate_responses(theta.as_array(), difficulty.as_array(), seed)?;
    Ok(responses.view().mapv(i32::from).to_pyarray(py))
}

/// Register Rasch functions with the Python module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rasch_estimate, m)?)?;
    m.add_function(wrap_pyfunction!(rasch_probability, m)?)?;
    m.add_function(wrap_pyfunction!(recommend_item, m)?)?;
    m.add_function(wrap_pyfunction!(recommend_items, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_responses, m)?)?;
    Ok(())
}
