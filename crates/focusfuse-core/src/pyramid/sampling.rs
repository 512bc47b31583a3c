use ndarray::parallel::prelude::*;
use ndarray::{s, Array2, Axis};

use crate::consts::{BINOMIAL_KERNEL, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{FocusError, Result};

/// Reflect-101 boundary: reflect an index into [0, size) around the edge
/// pixel without repeating it (`d c b | a b c d | c b a`).
pub fn reflect_101(idx: isize, size: usize) -> usize {
    if size <= 1 {
        return 0;
    }
    let period = 2 * (size as isize - 1);
    let m = idx.rem_euclid(period) as usize;
    if m < size {
        m
    } else {
        period as usize - m
    }
}

/// Build an array by evaluating `f(row, col)` for every pixel.
///
/// Rows are evaluated in parallel once the array reaches
/// [`PARALLEL_PIXEL_THRESHOLD`] pixels.
pub(crate) fn fill_by_pixel<F>(shape: (usize, usize), f: F) -> Array2<f64>
where
    F: Fn(usize, usize) -> f64 + Sync + Send,
{
    let mut out = Array2::<f64>::zeros(shape);
    if shape.0 * shape.1 >= PARALLEL_PIXEL_THRESHOLD {
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut line)| {
                for (col, v) in line.iter_mut().enumerate() {
                    *v = f(row, col);
                }
            });
    } else {
        for ((row, col), v) in out.indexed_iter_mut() {
            *v = f(row, col);
        }
    }
    out
}

/// Blur with the 5-tap binomial kernel and keep every other row and column.
///
/// Output shape is `((h + 1) / 2, (w + 1) / 2)`.
pub fn pyr_down(data: &Array2<f64>) -> Array2<f64> {
    let (h, w) = data.dim();
    let out_h = h.div_ceil(2);
    let out_w = w.div_ceil(2);

    // Horizontal pass evaluated at even columns only.
    let rows = fill_by_pixel((h, out_w), |row, col| {
        let center = 2 * col as isize;
        BINOMIAL_KERNEL
            .iter()
            .enumerate()
            .map(|(k, &kv)| kv * data[[row, reflect_101(center + k as isize - 2, w)]])
            .sum()
    });

    fill_by_pixel((out_h, out_w), |row, col| {
        let center = 2 * row as isize;
        BINOMIAL_KERNEL
            .iter()
            .enumerate()
            .map(|(k, &kv)| kv * rows[[reflect_101(center + k as isize - 2, h), col]])
            .sum()
    })
}

/// Double the size by zero insertion and binomial interpolation.
///
/// Output shape is `(2h, 2w)`; the kernel is scaled by 2 per axis so that
/// flat regions keep their value.
pub fn pyr_up(data: &Array2<f64>) -> Array2<f64> {
    let (h, w) = data.dim();
    let out_h = 2 * h;
    let out_w = 2 * w;

    // Only even taps of the zero-inserted signal carry a value.
    let cols = fill_by_pixel((h, out_w), |row, col| {
        let mut sum = 0.0;
        for (k, &kv) in BINOMIAL_KERNEL.iter().enumerate() {
            let src = reflect_101(col as isize + k as isize - 2, out_w);
            if src % 2 == 0 {
                sum += kv * data[[row, src / 2]];
            }
        }
        2.0 * sum
    });

    fill_by_pixel((out_h, out_w), |row, col| {
        let mut sum = 0.0;
        for (k, &kv) in BINOMIAL_KERNEL.iter().enumerate() {
            let src = reflect_101(row as isize + k as isize - 2, out_h);
            if src % 2 == 0 {
                sum += kv * cols[[src / 2, col]];
            }
        }
        2.0 * sum
    })
}

/// Crop an upsampled array to `target` from the top-left corner.
///
/// Upsampling an odd-sized level overshoots by one row or column. Any other
/// difference means the pyramid is inconsistent and is reported as a
/// [`FocusError::ShapeMismatch`].
pub fn crop_to_match(expanded: Array2<f64>, target: (usize, usize), level: usize) -> Result<Array2<f64>> {
    let (h, w) = expanded.dim();
    if (h, w) == target {
        return Ok(expanded);
    }
    if h < target.0 || w < target.1 || h - target.0 > 1 || w - target.1 > 1 {
        return Err(FocusError::ShapeMismatch {
            context: format!("upsampled pyramid level {level}"),
            expected: target,
            got: (h, w),
        });
    }
    Ok(expanded.slice(s![..target.0, ..target.1]).to_owned())
}
