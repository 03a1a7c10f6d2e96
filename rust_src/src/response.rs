//! Validated binary person-by-item response matrix.

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{RaschError, Result};

/// Rectangular N x M matrix of 0/1 responses, rows are persons and columns
/// are items. Construction validates shape and values; the matrix is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMatrix {
    data: Array2<u8>,
}

impl ResponseMatrix {
    /// Build from nested rows of integers.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let n_persons = rows.len();
        let n_items = rows.first().map_or(0, |r| r.as_ref().len());
        if n_persons == 0 || n_items == 0 {
            return Err(RaschError::EmptyMatrix { n_persons, n_items });
        }

        let mut data = Array2::zeros((n_persons, n_items));
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_items {
                return Err(RaschError::RaggedMatrix {
                    row: i,
                    expected: n_items,
                    actual: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = to_binary(value, i, j)?;
            }
        }

        Ok(Self { data })
    }

    /// Build from an integer array view (for example one handed over from numpy).
    pub fn from_array(responses: ArrayView2<'_, i32>) -> Result<Self> {
        let (n_persons, n_items) = responses.dim();
        if n_persons == 0 || n_items == 0 {
            return Err(RaschError::EmptyMatrix { n_persons, n_items });
        }

        let mut data = Array2::zeros((n_persons, n_items));
        for ((i, j), &value) in responses.indexed_iter() {
            data[[i, j]] = to_binary(value, i, j)?;
        }

        Ok(Self { data })
    }

    /// Wrap data already known to be non-empty and binary.
    pub(crate) fn from_binary(data: Array2<u8>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        debug_assert!(data.iter().all(|&x| x <= 1));
        Self { data }
    }

    pub fn n_persons(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_items(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn get(&self, person: usize, item: usize) -> u8 {
        self.data[[person, item]]
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Number of correct responses per person.
    pub fn person_scores(&self) -> Array1<usize> {
        self.data.map_axis(Axis(1), |row| row.iter().map(|&x| x as usize).sum())
    }

    /// Number of correct responses per item.
    pub fn item_scores(&self) -> Array1<usize> {
        self.data.map_axis(Axis(0), |col| col.iter().map(|&x| x as usize).sum())
    }
}

#[inline]
fn to_binary(value: i32, row: usize, col: usize) -> Result<u8> {
    match value {
        0 => Ok(0),
        1 => Ok(1),
        other => Err(RaschError::InvalidResponse {
            row,
            col,
            value: other as i64,
        }),
    }
}
