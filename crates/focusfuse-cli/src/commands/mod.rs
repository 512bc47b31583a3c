pub mod config;
pub mod depth;
pub mod score;
pub mod stack;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use focusfuse_core::pipeline::config::FocusStackConfig;
use tracing::debug;

/// Parameters shared by every command that selects frames.
#[derive(Args)]
pub struct FocusArgs {
    /// Config file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Entropy/deviation window side (odd, >= 3)
    #[arg(long)]
    pub kernel_size: Option<usize>,

    /// Smallest pyramid level side
    #[arg(long)]
    pub min_pyramid_size: Option<usize>,

    /// Number of frames to stack around the sharpest one
    #[arg(short = 'n', long)]
    pub number_to_stack: Option<usize>,
}

impl FocusArgs {
    /// Load the config file (or defaults) and apply flag overrides.
    pub fn resolve(&self) -> Result<FocusStackConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                toml::from_str(&contents).context("Invalid focus stack config")?
            }
            None => FocusStackConfig::default(),
        };

        if let Some(k) = self.kernel_size {
            config.kernel_size = k;
        }
        if let Some(m) = self.min_pyramid_size {
            config.min_pyramid_size = m;
        }
        if let Some(n) = self.number_to_stack {
            config.number_to_stack = n;
        }
        config.validate()?;
        debug!(?config, "Resolved focus stack config");
        Ok(config)
    }
}
