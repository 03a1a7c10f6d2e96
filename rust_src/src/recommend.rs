//! Nearest-difficulty item recommendation.

use ndarray::ArrayView1;

use crate::error::{RaschError, Result};

/// Index of the item whose difficulty is closest to `theta`.
///
/// Items are scanned in index order and the best candidate only changes on a
/// strict improvement, so among equally close items the lowest index wins.
pub fn recommend_item(theta: f64, difficulties: &[f64]) -> Result<usize> {
    if difficulties.is_empty() {
        return Err(RaschError::InvalidArgument(
            "cannot recommend from an empty difficulty vector".to_string(),
        ));
    }

    let mut best_item = 0;
    let mut min_diff = f64::INFINITY;
    for (j, &b) in difficulties.iter().enumerate() {
        let diff = (theta - b).abs();
        if diff < min_diff {
            min_diff = diff;
            best_item = j;
        }
    }

    Ok(best_item)
}

/// One recommendation per ability, in the same order as `abilities`.
pub fn recommend_items(
    abilities: ArrayView1<'_, f64>,
    difficulties: ArrayView1<'_, f64>,
) -> Result<Vec<usize>> {
    if difficulties.is_empty() {
        return Err(RaschError::InvalidArgument(
            "cannot recommend from an empty difficulty vector".to_string(),
        ));
    }
    let difficulties = difficulties.to_vec();
    abilities
        .iter()
        .map(|&theta| recommend_item(theta, &difficulties))
        .collect()
}
