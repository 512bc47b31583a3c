mod commands;
mod progress;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "focusfuse", about = "Focus stacking for z-series microscope images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Worker threads (defaults to available parallelism)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuse the sharpest frames into one all-in-focus image
    Stack(commands::stack::StackArgs),
    /// Score frames and show which would be stacked
    Score(commands::score::ScoreArgs),
    /// Report the frame in focus at given points
    Depth(commands::depth::DepthArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
        tracing::debug!(threads, "Configured worker threads");
    }

    match &cli.command {
        Commands::Stack(args) => commands::stack::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Depth(args) => commands::depth::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
