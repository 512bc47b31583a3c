use ndarray::Array2;

use crate::frame::ScoredFrame;
use crate::quality::FocusWindow;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Scoring,
    FrameSelection,
    BuildingPyramids,
    Fusing,
    Collapsing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scoring => write!(f, "Scoring frames"),
            Self::FrameSelection => write!(f, "Selecting frames"),
            Self::BuildingPyramids => write!(f, "Building pyramids"),
            Self::Fusing => write!(f, "Fusing pyramids"),
            Self::Collapsing => write!(f, "Collapsing"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage, if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Frames kept for stacking, plus the scores that led to the choice.
#[derive(Clone, Debug)]
pub struct FrameSelection<S> {
    /// Frames inside the window, in input order.
    pub stacked: Vec<ScoredFrame<S>>,
    pub window: FocusWindow,
    /// `(index, score)` of every input frame, in input order.
    pub scores: Vec<(usize, f64)>,
}

/// Result of a focus-stacking run.
#[derive(Clone, Debug)]
pub struct FocusStackOutput<S> {
    /// All-in-focus composite, same shape as the input frames.
    pub composite: Array2<f64>,
    pub stacked: Vec<ScoredFrame<S>>,
    pub window: FocusWindow,
    pub scores: Vec<(usize, f64)>,
    pub pyramid_depth: usize,
}
