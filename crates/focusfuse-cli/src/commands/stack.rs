use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use focusfuse_core::io::image_io::{save_composite, save_composite_rgb};
use focusfuse_core::pipeline::FocusStacker;

use super::FocusArgs;
use crate::progress::BarReporter;
use crate::summary::{print_config_summary, print_stack_summary};

#[derive(Args)]
pub struct StackArgs {
    /// Input images, in focus order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub focus: FocusArgs,

    /// Write a 3-channel image instead of grayscale
    #[arg(long)]
    pub rgb: bool,

    /// Output file path
    #[arg(short, long, default_value = "composite.png")]
    pub output: PathBuf,
}

pub fn run(args: &StackArgs) -> Result<()> {
    let config = args.focus.resolve()?;
    print_config_summary(&config, args.files.len(), &args.output);

    let stacker = FocusStacker::new(config)?.with_reporter(Arc::new(BarReporter::new()));
    let output = stacker.run(args.files.clone())?;

    if args.rgb {
        save_composite_rgb(&output.composite, &args.output)
    } else {
        save_composite(&output.composite, &args.output)
    }
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_stack_summary(&output);
    println!("\nOutput saved to {}", args.output.display());
    Ok(())
}
