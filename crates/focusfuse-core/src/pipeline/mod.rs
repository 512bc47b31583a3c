pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::FocusStacker;
pub use types::{FocusStackOutput, FrameSelection, PipelineStage, ProgressReporter};
