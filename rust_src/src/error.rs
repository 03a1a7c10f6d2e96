//! Error types for rasch_rs.

use thiserror::Error;

/// Errors raised while validating inputs or selecting items.
///
/// Every variant is reported before any ability or difficulty vector is
/// allocated, so a failed call never leaves partially updated state behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RaschError {
    /// The response matrix has no persons or no items
    #[error("Empty response matrix: {n_persons} persons x {n_items} items")]
    EmptyMatrix { n_persons: usize, n_items: usize },

    /// A row length differs from the first row
    #[error("Ragged response matrix: row {row} has {actual} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell holds something other than 0 or 1
    #[error("Invalid response {value} at ({row}, {col}): responses must be 0 or 1")]
    InvalidResponse { row: usize, col: usize, value: i64 },

    /// Estimator configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Bad argument to a non-estimation call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Vector length does not line up with the matrix it is paired with
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, RaschError>;
