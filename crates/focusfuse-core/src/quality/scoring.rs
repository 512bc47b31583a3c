use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::error::{FocusError, Result};
use crate::frame::{Frame, FrameSource, ScoredFrame};

use super::spectral::spectral_score;

/// Load and score every source, returning frames in input order.
///
/// Each source is loaded and scored on the Rayon pool. The first load
/// failure aborts the whole stage.
pub fn score_frames<S: FrameSource>(sources: Vec<S>) -> Result<Vec<ScoredFrame<S>>> {
    score_frames_with_progress(sources, |_| {})
}

/// Score all sources with per-frame progress reporting.
///
/// Calls `on_progress(items_done)` as each frame is scored.
pub fn score_frames_with_progress<S: FrameSource>(
    sources: Vec<S>,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<Vec<ScoredFrame<S>>> {
    if sources.is_empty() {
        return Err(FocusError::EmptySequence);
    }

    let done = AtomicUsize::new(0);
    let mut scored: Vec<(usize, ScoredFrame<S>)> = sources
        .into_par_iter()
        .enumerate()
        .map(|(index, source)| {
            let data = source.load_gray().map_err(|e| FocusError::Load {
                index,
                frame: source.describe(),
                reason: e.to_string(),
            })?;
            let score = spectral_score(&data);
            debug!(index, frame = %source.describe(), score, "Scored frame");

            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);

            Ok((
                index,
                ScoredFrame {
                    frame: Frame {
                        index,
                        source,
                        data,
                    },
                    score,
                },
            ))
        })
        .collect::<Result<_>>()?;

    // Completion order is not submission order.
    scored.sort_by_key(|(index, _)| *index);
    Ok(scored.into_iter().map(|(_, frame)| frame).collect())
}
