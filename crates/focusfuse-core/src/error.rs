use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to load frame {index} ({frame}): {reason}")]
    Load {
        index: usize,
        frame: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Shape mismatch in {context}: expected {}x{}, got {}x{}", .expected.1, .expected.0, .got.1, .got.0)]
    ShapeMismatch {
        context: String,
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Pyramid depth mismatch for layer {layer}: expected {expected}, got {got}")]
    PyramidDepthMismatch {
        layer: usize,
        expected: usize,
        got: usize,
    },

    #[error("Point ({row}, {col}) lies outside the {width}x{height} image")]
    PointOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Empty frame sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, FocusError>;
