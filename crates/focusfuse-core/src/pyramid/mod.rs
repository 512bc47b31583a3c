//! Gaussian/Laplacian pyramids.
//!
//! A [`Pyramid`] stores, per layer (source image), the Laplacian detail
//! levels from finest (index 0) to the raw low-pass image at the coarsest
//! index `depth - 1`.

pub mod builder;
pub mod collapse;
pub mod sampling;

use ndarray::Array2;

use crate::error::{FocusError, Result};

pub use builder::{gaussian_pyramid, laplacian_pyramid, pyramid_depth};
pub use collapse::collapse;

/// Which image a pyramid level came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    /// Position in the selected stack.
    Source(usize),
    /// Result of fusing all layers.
    Fused,
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(i) => write!(f, "layer {i}"),
            Self::Fused => write!(f, "fused"),
        }
    }
}

/// One resolution tier of a pyramid.
#[derive(Clone, Debug)]
pub struct PyramidLevel {
    pub data: Array2<f64>,
    pub layer: LayerId,
    /// 0 = full resolution, increasing = coarser.
    pub level: usize,
}

impl PyramidLevel {
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// Ordered pyramid levels of one layer; `levels[i].level == i`.
#[derive(Clone, Debug)]
pub struct Pyramid {
    levels: Vec<PyramidLevel>,
}

impl Pyramid {
    pub fn new(levels: Vec<PyramidLevel>) -> Result<Self> {
        if levels.is_empty() {
            return Err(FocusError::EmptySequence);
        }
        if let Some((i, bad)) = levels.iter().enumerate().find(|(i, l)| l.level != *i) {
            return Err(FocusError::Configuration(format!(
                "pyramid level at position {i} is tagged as level {}",
                bad.level
            )));
        }
        Ok(Self { levels })
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, index: usize) -> &PyramidLevel {
        &self.levels[index]
    }

    pub fn levels(&self) -> &[PyramidLevel] {
        &self.levels
    }

    /// The coarsest, raw low-pass level.
    pub fn base(&self) -> &PyramidLevel {
        &self.levels[self.levels.len() - 1]
    }

    pub fn shapes(&self) -> Vec<(usize, usize)> {
        self.levels.iter().map(PyramidLevel::dim).collect()
    }

    pub fn into_levels(self) -> Vec<PyramidLevel> {
        self.levels
    }
}
