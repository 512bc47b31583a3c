use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use focusfuse_core::pipeline::FocusStacker;

use super::FocusArgs;

#[derive(Args)]
pub struct ScoreArgs {
    /// Input images, in focus order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub focus: FocusArgs,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let config = args.focus.resolve()?;
    let stacker = FocusStacker::new(config)?;
    let selection = stacker.select_frames(args.files.clone())?;

    let selected = Style::new().green().bold();
    let best = Style::new().cyan().bold();

    println!("{:>5}  {:>14}  {:>8}  File", "Frame", "Score", "Stacked");
    println!("{}", "-".repeat(48));
    for ((index, score), path) in selection.scores.iter().zip(&args.files) {
        let mark = if selection.window.contains(*index) {
            selected.apply_to("yes").to_string()
        } else {
            String::new()
        };
        let row = format!("{:>5}  {:>14.2}  {:>8}  {}", index, score, mark, path.display());
        if *index == selection.window.best {
            println!("{}", best.apply_to(row));
        } else {
            println!("{}", row);
        }
    }

    let range = selection.window.indices(args.files.len());
    println!(
        "\nSharpest frame: {}  window: {}..{} ({})",
        selection.window.best, range.start, range.end, selection.window.placement
    );
    Ok(())
}
