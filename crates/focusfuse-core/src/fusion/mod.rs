//! Cross-layer fusion of Laplacian pyramids.
//!
//! The coarsest level is fused from local entropy and local deviation of the
//! raw low-pass images; every finer level takes, per pixel, the detail of the
//! layer with the most region energy. Levels are fused in parallel.

pub mod base;
pub mod energy;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{FocusError, Result};
use crate::pyramid::{LayerId, Pyramid, PyramidLevel};

pub use base::{fuse_base_level, local_deviation, local_entropy};
pub use energy::{fuse_laplacian_level, region_energy};

/// Per-pixel index of the map with the largest value. Ties go to the lowest
/// index.
pub fn argmax_layers(maps: &[&Array2<f64>]) -> Result<Array2<usize>> {
    let first = maps.first().ok_or(FocusError::EmptySequence)?;
    let mut best = Array2::<usize>::zeros(first.dim());
    let mut best_value = (*first).clone();

    for (layer, map) in maps.iter().enumerate().skip(1) {
        if map.dim() != first.dim() {
            return Err(FocusError::ShapeMismatch {
                context: format!("fusion map of layer {layer}"),
                expected: first.dim(),
                got: map.dim(),
            });
        }
        ndarray::Zip::from(&mut best)
            .and(&mut best_value)
            .and(*map)
            .for_each(|b, bv, &v| {
                if v > *bv {
                    *bv = v;
                    *b = layer;
                }
            });
    }

    Ok(best)
}

/// Pyramids of every selected layer, checked to share depth and level shapes.
#[derive(Clone, Debug)]
pub struct PyramidCollection {
    pyramids: Vec<Pyramid>,
}

impl PyramidCollection {
    pub fn new(pyramids: Vec<Pyramid>) -> Result<Self> {
        let first = pyramids.first().ok_or(FocusError::EmptySequence)?;
        let depth = first.depth();
        let shapes = first.shapes();

        for (layer, pyramid) in pyramids.iter().enumerate().skip(1) {
            if pyramid.depth() != depth {
                return Err(FocusError::PyramidDepthMismatch {
                    layer,
                    expected: depth,
                    got: pyramid.depth(),
                });
            }
            for (level, (&expected, got)) in shapes.iter().zip(pyramid.shapes()).enumerate() {
                if expected != got {
                    return Err(FocusError::ShapeMismatch {
                        context: format!("pyramid level {level} of layer {layer}"),
                        expected,
                        got,
                    });
                }
            }
        }

        Ok(Self { pyramids })
    }

    pub fn layers(&self) -> usize {
        self.pyramids.len()
    }

    pub fn depth(&self) -> usize {
        self.pyramids[0].depth()
    }

    pub fn pyramids(&self) -> &[Pyramid] {
        &self.pyramids
    }

    /// Fuse all layers into a single pyramid of the same depth.
    ///
    /// `kernel_size` is the side of the entropy/deviation window used at the
    /// coarsest level; it must be odd and at least 3.
    pub fn fuse(self, kernel_size: usize) -> Result<Pyramid> {
        if kernel_size < 3 || kernel_size % 2 == 0 {
            return Err(FocusError::Configuration(format!(
                "kernel_size must be odd and >= 3, got {kernel_size}"
            )));
        }

        let depth = self.depth();
        info!(layers = self.layers(), depth, kernel_size, "Fusing pyramids");

        let mut fused: Vec<(usize, Result<Array2<f64>>)> = (0..depth)
            .into_par_iter()
            .map(|level| (level, self.fuse_level(level, kernel_size)))
            .collect();
        // Completion order is not submission order.
        fused.sort_by_key(|(level, _)| *level);

        let levels = fused
            .into_iter()
            .map(|(level, data)| {
                Ok(PyramidLevel {
                    data: data?,
                    layer: LayerId::Fused,
                    level,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Pyramid::new(levels)
    }

    fn fuse_level(&self, level: usize, kernel_size: usize) -> Result<Array2<f64>> {
        let layers: Vec<&Array2<f64>> = self
            .pyramids
            .iter()
            .map(|p| &p.level(level).data)
            .collect();

        let fused = if level + 1 == self.depth() {
            fuse_base_level(&layers, kernel_size)?
        } else {
            fuse_laplacian_level(&layers)?
        };
        debug!(level, shape = ?fused.dim(), "Fused level");
        Ok(fused)
    }
}
