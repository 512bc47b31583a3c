//! Coarsest-level fusion: local entropy and local deviation.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis, Zip};

use crate::consts::ENTROPY_HISTOGRAM_BINS;
use crate::error::{FocusError, Result};
use crate::pyramid::sampling::reflect_101;

use super::argmax_layers;

/// Quantize to the 8-bit intensity used by the entropy histogram.
fn quantize(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Probability of each 8-bit intensity over the whole array.
pub fn intensity_probabilities(data: &Array2<f64>) -> [f64; ENTROPY_HISTOGRAM_BINS] {
    let mut counts = [0usize; ENTROPY_HISTOGRAM_BINS];
    for &v in data.iter() {
        counts[quantize(v) as usize] += 1;
    }

    let mut probabilities = [0.0f64; ENTROPY_HISTOGRAM_BINS];
    let total = data.len();
    if total > 0 {
        for (p, &c) in probabilities.iter_mut().zip(counts.iter()) {
            *p = c as f64 / total as f64;
        }
    }
    probabilities
}

/// Reduce every `kernel_size`-square window (reflect-101 padded) to a value.
fn sliding_window<F>(data: &Array2<f64>, kernel_size: usize, reduce: F) -> Array2<f64>
where
    F: Fn(&[f64]) -> f64 + Sync + Send,
{
    let (h, w) = data.dim();
    let radius = (kernel_size / 2) as isize;
    let mut out = Array2::<f64>::zeros((h, w));

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut line)| {
            let mut window = Vec::with_capacity(kernel_size * kernel_size);
            for (col, v) in line.iter_mut().enumerate() {
                window.clear();
                for dy in -radius..=radius {
                    let r = reflect_101(row as isize + dy, h);
                    for dx in -radius..=radius {
                        window.push(data[[r, reflect_101(col as isize + dx, w)]]);
                    }
                }
                *v = reduce(&window);
            }
        });

    out
}

/// Per-pixel entropy of the surrounding window.
///
/// Each pixel contributes `-p[v] * ln(p[v])`, with `p` the intensity
/// histogram of the whole array and `v` the pixel's 8-bit value.
pub fn local_entropy(data: &Array2<f64>, kernel_size: usize) -> Array2<f64> {
    let probabilities = intensity_probabilities(data);
    let contribution = data.mapv(|v| {
        let p = probabilities[quantize(v) as usize];
        -p * p.ln()
    });
    sliding_window(&contribution, kernel_size, |window| window.iter().sum())
}

/// Per-pixel variance of the surrounding window.
pub fn local_deviation(data: &Array2<f64>, kernel_size: usize) -> Array2<f64> {
    sliding_window(data, kernel_size, |window| {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        window.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n
    })
}

/// Entropy and deviation maps of one layer.
#[derive(Clone, Debug)]
pub struct BaseStatistics {
    pub entropy: Array2<f64>,
    pub deviation: Array2<f64>,
}

pub fn base_statistics(data: &Array2<f64>, kernel_size: usize) -> BaseStatistics {
    BaseStatistics {
        entropy: local_entropy(data, kernel_size),
        deviation: local_deviation(data, kernel_size),
    }
}

/// Fuse the coarsest level of every layer.
///
/// Per pixel, the layer with the highest local entropy and the layer with the
/// highest local deviation are found independently; the fused value is the
/// mean of those two layers' values.
pub fn fuse_base_level(layers: &[&Array2<f64>], kernel_size: usize) -> Result<Array2<f64>> {
    if layers.is_empty() {
        return Err(FocusError::EmptySequence);
    }

    let mut tagged: Vec<(usize, BaseStatistics)> = layers
        .par_iter()
        .enumerate()
        .map(|(layer, data)| (layer, base_statistics(data, kernel_size)))
        .collect();
    tagged.sort_by_key(|(layer, _)| *layer);

    let entropies: Vec<&Array2<f64>> = tagged.iter().map(|(_, s)| &s.entropy).collect();
    let deviations: Vec<&Array2<f64>> = tagged.iter().map(|(_, s)| &s.deviation).collect();
    let best_e = argmax_layers(&entropies)?;
    let best_d = argmax_layers(&deviations)?;

    let mut fused = Array2::<f64>::zeros(layers[0].dim());
    Zip::indexed(&mut fused)
        .and(&best_e)
        .and(&best_d)
        .for_each(|idx, out, &e, &d| {
            *out = (layers[e][idx] + layers[d][idx]) / 2.0;
        });

    Ok(fused)
}
