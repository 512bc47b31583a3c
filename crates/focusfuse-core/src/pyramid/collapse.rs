use ndarray::Array2;

use crate::error::Result;

use super::sampling::{crop_to_match, pyr_up};
use super::Pyramid;

/// Reconstruct the full-resolution image from a Laplacian pyramid.
///
/// Starting from the coarsest level, repeatedly upsample, crop to the next
/// finer level and add its detail.
pub fn collapse(pyramid: &Pyramid) -> Result<Array2<f64>> {
    let mut acc = pyramid.base().data.clone();

    for level in pyramid.levels().iter().rev().skip(1) {
        let expanded = crop_to_match(pyr_up(&acc), level.dim(), level.level)?;
        acc = expanded + &level.data;
    }

    Ok(acc)
}
