use ndarray::Array2;

use focusfuse_core::error::{FocusError, Result};
use focusfuse_core::frame::{FrameSource, MemorySource};

/// Deterministic pseudo-random texture in 0..=255.
pub fn noise_texture(height: usize, width: usize, seed: u64) -> Array2<f32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    Array2::from_shape_simple_fn((height, width), || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % 256) as f32
    })
}

/// Apply a 3x3 box blur `passes` times (edge pixels clamped).
pub fn box_blur(data: &Array2<f32>, passes: usize) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut current = data.clone();
    for _ in 0..passes {
        let prev = current.clone();
        for row in 0..h {
            for col in 0..w {
                let mut sum = 0.0f32;
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        let r = (row as isize + dy).clamp(0, h as isize - 1) as usize;
                        let c = (col as isize + dx).clamp(0, w as isize - 1) as usize;
                        sum += prev[[r, c]];
                    }
                }
                current[[row, col]] = sum / 9.0;
            }
        }
    }
    current
}

/// A focus sweep of `count` frames over one texture, sharpest at `sharpest`.
///
/// Frame `i` is blurred `|i - sharpest|` times.
pub fn focus_sweep(count: usize, sharpest: usize, size: usize) -> Vec<MemorySource> {
    let texture = noise_texture(size, size, 7);
    (0..count)
        .map(|i| {
            let passes = i.abs_diff(sharpest);
            MemorySource::new(format!("frame-{i}"), box_blur(&texture, passes))
        })
        .collect()
}

/// Textured on the left half (`left_sharp`) or right half, flat elsewhere.
pub fn half_textured(size: usize, left_sharp: bool, seed: u64) -> Array2<f32> {
    let texture = noise_texture(size, size, seed);
    Array2::from_shape_fn((size, size), |(r, c)| {
        let in_left = c < size / 2;
        if in_left == left_sharp {
            texture[[r, c]]
        } else {
            128.0
        }
    })
}

/// Mean absolute difference between two arrays of equal shape.
pub fn mean_abs_diff(a: &Array2<f64>, b: &Array2<f32>) -> f64 {
    let total: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y as f64).abs())
        .sum();
    total / a.len() as f64
}

/// Source that always fails to load, or that loads a fixed array.
#[derive(Clone, Debug)]
pub enum TestSource {
    Ok(MemorySource),
    Broken(String),
}

impl FrameSource for TestSource {
    fn describe(&self) -> String {
        match self {
            Self::Ok(src) => src.describe(),
            Self::Broken(name) => name.clone(),
        }
    }

    fn load_gray(&self) -> Result<Array2<f32>> {
        match self {
            Self::Ok(src) => src.load_gray(),
            Self::Broken(name) => Err(FocusError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{name} is unreadable"),
            ))),
        }
    }
}
