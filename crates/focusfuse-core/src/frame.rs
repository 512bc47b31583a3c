use std::path::PathBuf;

use ndarray::Array2;

use crate::error::Result;
use crate::io::image_io::load_gray;

/// Something a frame can be loaded from.
///
/// Pixel values are single-channel f32 in 8-bit intensity units (0..=255).
pub trait FrameSource: Send + Sync {
    /// Human-readable name used in logs and load errors.
    fn describe(&self) -> String;

    /// Read and decode the source into a grayscale array.
    fn load_gray(&self) -> Result<Array2<f32>>;
}

impl FrameSource for PathBuf {
    fn describe(&self) -> String {
        self.display().to_string()
    }

    fn load_gray(&self) -> Result<Array2<f32>> {
        load_gray(self)
    }
}

/// An already-decoded frame held in memory.
#[derive(Clone, Debug)]
pub struct MemorySource {
    pub name: String,
    pub data: Array2<f32>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: Array2<f32>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl FrameSource for MemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load_gray(&self) -> Result<Array2<f32>> {
        Ok(self.data.clone())
    }
}

/// A loaded frame of the focus sequence.
#[derive(Clone, Debug)]
pub struct Frame<S> {
    /// Position in the input sequence.
    pub index: usize,
    pub source: S,
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl<S> Frame<S> {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// A frame together with its band-pass sharpness score (higher is sharper).
#[derive(Clone, Debug)]
pub struct ScoredFrame<S> {
    pub frame: Frame<S>,
    pub score: f64,
}

impl<S> ScoredFrame<S> {
    pub fn index(&self) -> usize {
        self.frame.index
    }

    pub fn source(&self) -> &S {
        &self.frame.source
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.frame.data
    }
}
