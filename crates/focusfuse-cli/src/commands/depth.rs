use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use focusfuse_core::consts::DEFAULT_FOCUS_DEPTH_WINDOW;
use focusfuse_core::focus_depth::focus_depths;
use focusfuse_core::pipeline::FocusStacker;

use super::FocusArgs;

#[derive(Args)]
pub struct DepthArgs {
    /// Input images, in focus order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Point as ROW,COL (repeatable)
    #[arg(long = "point", required = true, value_parser = parse_point)]
    pub points: Vec<(usize, usize)>,

    /// Side of the patch scored around each point
    #[arg(long, default_value_t = DEFAULT_FOCUS_DEPTH_WINDOW)]
    pub window: usize,

    #[command(flatten)]
    pub focus: FocusArgs,
}

fn parse_point(s: &str) -> Result<(usize, usize)> {
    let Some((row, col)) = s.split_once(',') else {
        bail!("expected ROW,COL, got '{s}'");
    };
    Ok((row.trim().parse()?, col.trim().parse()?))
}

pub fn run(args: &DepthArgs) -> Result<()> {
    let config = args.focus.resolve()?;
    let selection = FocusStacker::new(config)?.select_frames(args.files.clone())?;
    let depths = focus_depths(&selection.stacked, &args.points, args.window)?;

    println!("{:>6}  {:>6}  {:>5}  {:>14}  File", "Row", "Col", "Frame", "Score");
    println!("{}", "-".repeat(52));
    for (&(row, col), depth) in args.points.iter().zip(&depths) {
        println!(
            "{:>6}  {:>6}  {:>5}  {:>14.2}  {}",
            row,
            col,
            depth.frame_index,
            depth.score,
            args.files[depth.frame_index].display()
        );
    }
    Ok(())
}
