use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{FocusError, Result};
use crate::frame::{FrameSource, ScoredFrame};
use crate::fusion::PyramidCollection;
use crate::pyramid::{collapse, laplacian_pyramid, pyramid_depth, Pyramid};
use crate::quality::{score_frames_with_progress, select_window};

use super::config::FocusStackConfig;
use super::types::{FocusStackOutput, FrameSelection, NoOpReporter, PipelineStage, ProgressReporter};

/// Scores a focus sequence, keeps the frames around the sharpest one and
/// fuses them into one all-in-focus composite.
pub struct FocusStacker {
    config: FocusStackConfig,
    reporter: Arc<dyn ProgressReporter>,
}

impl FocusStacker {
    /// Fails on an invalid config before any work is dispatched.
    pub fn new(config: FocusStackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            reporter: Arc::new(NoOpReporter),
        })
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &FocusStackConfig {
        &self.config
    }

    /// Score every source and keep the frames inside the focus window.
    pub fn select_frames<S: FrameSource>(&self, sources: Vec<S>) -> Result<FrameSelection<S>> {
        let total = sources.len();
        if total == 0 {
            return Err(FocusError::EmptySequence);
        }
        info!(total_frames = total, "Scoring frames");

        self.reporter.begin_stage(PipelineStage::Scoring, Some(total));
        let reporter = Arc::clone(&self.reporter);
        let scored = score_frames_with_progress(sources, move |done| reporter.advance(done))?;
        self.reporter.finish_stage();

        self.reporter.begin_stage(PipelineStage::FrameSelection, None);
        let scores: Vec<(usize, f64)> = scored.iter().map(|f| (f.index(), f.score)).collect();
        let values: Vec<f64> = scores.iter().map(|(_, s)| *s).collect();
        let window = select_window(&values, self.config.number_to_stack)?;
        for (index, score) in &scores {
            debug!(index, score, selected = window.contains(*index), "Frame score");
        }

        let range = window.indices(total);
        info!(
            best = window.best,
            start = range.start,
            end = range.end,
            placement = %window.placement,
            "Selected focus window"
        );
        let stacked: Vec<ScoredFrame<S>> = scored
            .into_iter()
            .filter(|f| range.contains(&f.index()))
            .collect();
        self.reporter.finish_stage();

        Ok(FrameSelection {
            stacked,
            window,
            scores,
        })
    }

    /// Run the full pipeline: score, select, build pyramids, fuse, collapse.
    pub fn run<S: FrameSource>(&self, sources: Vec<S>) -> Result<FocusStackOutput<S>> {
        let selection = self.select_frames(sources)?;
        let stacked = selection.stacked;

        let shape = stacked
            .first()
            .map(|f| f.data().dim())
            .ok_or(FocusError::EmptySequence)?;
        if let Some(bad) = stacked.iter().find(|f| f.data().dim() != shape) {
            return Err(FocusError::ShapeMismatch {
                context: format!("frame {}", bad.index()),
                expected: shape,
                got: bad.data().dim(),
            });
        }
        let depth = pyramid_depth(shape, self.config.min_pyramid_size)?;
        info!(layers = stacked.len(), depth, "Building pyramids");

        self.reporter
            .begin_stage(PipelineStage::BuildingPyramids, Some(stacked.len()));
        let mut pyramids: Vec<(usize, Pyramid)> = stacked
            .par_iter()
            .enumerate()
            .map(|(layer, frame)| Ok((layer, laplacian_pyramid(frame.data(), depth, layer)?)))
            .collect::<Result<_>>()?;
        pyramids.sort_by_key(|(layer, _)| *layer);
        self.reporter.finish_stage();

        self.reporter.begin_stage(PipelineStage::Fusing, Some(depth));
        let collection = PyramidCollection::new(pyramids.into_iter().map(|(_, p)| p).collect())?;
        let fused = collection.fuse(self.config.kernel_size)?;
        self.reporter.finish_stage();

        self.reporter.begin_stage(PipelineStage::Collapsing, None);
        let composite = collapse(&fused)?;
        self.reporter.finish_stage();
        info!(shape = ?composite.dim(), "Focus stack complete");

        Ok(FocusStackOutput {
            composite,
            stacked,
            window: selection.window,
            scores: selection.scores,
            pyramid_depth: depth,
        })
    }
}
