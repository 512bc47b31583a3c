//! Detail-level fusion by region energy.

use ndarray::{Array2, Zip};

use crate::consts::REGION_ENERGY_WEIGHT;
use crate::error::{FocusError, Result};
use crate::pyramid::sampling::{fill_by_pixel, reflect_101};

use super::argmax_layers;

/// 1D generating kernel `[1/4 - a/2, 1/4, a, 1/4, 1/4 - a/2]`.
pub fn generating_kernel(a: f64) -> [f64; 5] {
    [0.25 - a / 2.0, 0.25, a, 0.25, 0.25 - a / 2.0]
}

/// Separable 5x5 convolution with reflect-101 borders.
fn convolve_separable(data: &Array2<f64>, kernel: &[f64; 5]) -> Array2<f64> {
    let (h, w) = data.dim();
    let rows = fill_by_pixel((h, w), |row, col| {
        kernel
            .iter()
            .enumerate()
            .map(|(k, &kv)| kv * data[[row, reflect_101(col as isize + k as isize - 2, w)]])
            .sum()
    });
    fill_by_pixel((h, w), |row, col| {
        kernel
            .iter()
            .enumerate()
            .map(|(k, &kv)| kv * rows[[reflect_101(row as isize + k as isize - 2, h), col]])
            .sum()
    })
}

/// Squared Laplacian smoothed by the generating kernel.
pub fn region_energy(laplacian: &Array2<f64>) -> Array2<f64> {
    let squared = laplacian.mapv(|v| v * v);
    convolve_separable(&squared, &generating_kernel(REGION_ENERGY_WEIGHT))
}

/// Fuse one Laplacian level: every pixel takes the value of the layer with
/// the highest region energy there.
pub fn fuse_laplacian_level(layers: &[&Array2<f64>]) -> Result<Array2<f64>> {
    if layers.is_empty() {
        return Err(FocusError::EmptySequence);
    }

    let energies: Vec<Array2<f64>> = layers.iter().map(|l| region_energy(l)).collect();
    let energy_refs: Vec<&Array2<f64>> = energies.iter().collect();
    let best = argmax_layers(&energy_refs)?;

    let mut fused = Array2::<f64>::zeros(layers[0].dim());
    Zip::indexed(&mut fused)
        .and(&best)
        .for_each(|idx, out, &layer| {
            *out = layers[layer][idx];
        });

    Ok(fused)
}
