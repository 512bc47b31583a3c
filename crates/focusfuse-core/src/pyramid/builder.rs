use ndarray::Array2;
use tracing::debug;

use crate::error::{FocusError, Result};

use super::sampling::{crop_to_match, pyr_down, pyr_up};
use super::{LayerId, Pyramid, PyramidLevel};

/// Number of pyramid levels for an image of `shape`.
///
/// `floor(log2(min(h, w) / min_pyramid_size)) + 1`: the coarsest level keeps
/// its short side at or above `min_pyramid_size`.
pub fn pyramid_depth(shape: (usize, usize), min_pyramid_size: usize) -> Result<usize> {
    if min_pyramid_size == 0 {
        return Err(FocusError::Configuration(
            "min_pyramid_size must be at least 1".to_string(),
        ));
    }
    let short_side = shape.0.min(shape.1);
    if short_side < min_pyramid_size {
        return Err(FocusError::Configuration(format!(
            "image {}x{} is smaller than min_pyramid_size {}",
            shape.1, shape.0, min_pyramid_size
        )));
    }

    let mut depth = 1;
    while min_pyramid_size
        .checked_shl(depth as u32)
        .is_some_and(|size| size <= short_side)
    {
        depth += 1;
    }
    Ok(depth)
}

/// Gaussian pyramid of `depth` levels; level 0 holds the input unchanged.
pub fn gaussian_pyramid(image: &Array2<f32>, depth: usize) -> Vec<Array2<f64>> {
    let mut levels = Vec::with_capacity(depth);
    if depth == 0 {
        return levels;
    }
    levels.push(image.mapv(f64::from));
    for _ in 1..depth {
        let next = pyr_down(&levels[levels.len() - 1]);
        levels.push(next);
    }
    levels
}

/// Laplacian pyramid of one layer.
///
/// Level `i < depth - 1` holds `G[i] - up(G[i + 1])`; the coarsest level holds
/// the Gaussian level itself.
pub fn laplacian_pyramid(image: &Array2<f32>, depth: usize, layer: usize) -> Result<Pyramid> {
    if depth == 0 {
        return Err(FocusError::Configuration(
            "pyramid depth must be at least 1".to_string(),
        ));
    }

    let mut gaussian = gaussian_pyramid(image, depth);
    debug!(layer, depth, shape = ?gaussian[0].dim(), "Building Laplacian pyramid");

    let mut levels: Vec<PyramidLevel> = Vec::with_capacity(depth);
    let coarsest = gaussian.pop().ok_or(FocusError::EmptySequence)?;
    let mut coarser = coarsest.clone();
    levels.push(PyramidLevel {
        data: coarsest,
        layer: LayerId::Source(layer),
        level: depth - 1,
    });

    for (level, finer) in gaussian.into_iter().enumerate().rev() {
        let expanded = crop_to_match(pyr_up(&coarser), finer.dim(), level)?;
        let detail = &finer - &expanded;
        coarser = finer;
        levels.push(PyramidLevel {
            data: detail,
            layer: LayerId::Source(layer),
            level,
        });
    }

    levels.reverse();
    Pyramid::new(levels)
}
