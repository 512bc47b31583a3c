/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Binomial 1D kernel used by pyramid down/up sampling: [1, 4, 6, 4, 1] / 16.
pub const BINOMIAL_KERNEL: [f64; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

/// Central weight `a` of the region-energy generating kernel.
pub const REGION_ENERGY_WEIGHT: f64 = 0.4;

/// Fraction of each spectrum dimension dropped next to the zero-frequency axes.
pub const SPECTRUM_BORDER_FRACTION: f64 = 0.05;

/// Inner radius of the sharpness band, as a fraction of the spectrum limit.
pub const SPECTRUM_BAND_LOW: f64 = 0.2;

/// Outer radius of the sharpness band, as a fraction of the spectrum limit.
pub const SPECTRUM_BAND_HIGH: f64 = 0.6;

/// Number of intensity bins for the base-level entropy histogram.
pub const ENTROPY_HISTOGRAM_BINS: usize = 256;

/// Default side of the entropy/deviation sliding window.
pub const DEFAULT_KERNEL_SIZE: usize = 9;

/// Default smallest pyramid level side; no level is downsampled below it.
pub const DEFAULT_MIN_PYRAMID_SIZE: usize = 32;

/// Default number of frames kept around the sharpest one.
pub const DEFAULT_NUMBER_TO_STACK: usize = 10;

/// Default patch side for per-point focus depth lookups.
pub const DEFAULT_FOCUS_DEPTH_WINDOW: usize = 64;
