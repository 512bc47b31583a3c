use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_KERNEL_SIZE, DEFAULT_MIN_PYRAMID_SIZE, DEFAULT_NUMBER_TO_STACK};
use crate::error::{FocusError, Result};

/// Numeric parameters of a focus-stacking run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStackConfig {
    /// Side of the entropy/deviation window at the coarsest pyramid level.
    /// Odd, at least 3.
    pub kernel_size: usize,
    /// Pyramid levels stop before the short side drops below this.
    pub min_pyramid_size: usize,
    /// Target number of frames kept around the sharpest one.
    pub number_to_stack: usize,
}

impl Default for FocusStackConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            min_pyramid_size: DEFAULT_MIN_PYRAMID_SIZE,
            number_to_stack: DEFAULT_NUMBER_TO_STACK,
        }
    }
}

impl FocusStackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size < 3 || self.kernel_size % 2 == 0 {
            return Err(FocusError::Configuration(format!(
                "kernel_size must be odd and >= 3, got {}",
                self.kernel_size
            )));
        }
        if self.min_pyramid_size == 0 {
            return Err(FocusError::Configuration(
                "min_pyramid_size must be at least 1".to_string(),
            ));
        }
        if self.number_to_stack == 0 {
            return Err(FocusError::Configuration(
                "number_to_stack must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
