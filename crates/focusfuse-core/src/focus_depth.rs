//! Per-point focus depth.
//!
//! For a point in the scene, the frame whose surrounding patch has the
//! highest band-pass sharpness score is the one focused at that depth.

use ndarray::s;
use rayon::prelude::*;

use crate::error::{FocusError, Result};
use crate::frame::ScoredFrame;
use crate::quality::spectral_score;

/// Sharpest frame at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusDepth {
    /// Original index of the winning frame.
    pub frame_index: usize,
    /// Spectral score of the winning patch.
    pub score: f64,
}

/// Start and length of a `window`-wide span around `center`, shifted to stay
/// inside `[0, size)` and shrunk if `size` is smaller than `window`.
fn patch_span(center: usize, window: usize, size: usize) -> (usize, usize) {
    let len = window.min(size);
    let start = center.saturating_sub(len / 2).min(size - len);
    (start, len)
}

/// Find the frame in focus at `point` (row, col).
///
/// Ties go to the earliest frame.
pub fn focus_depth_at<S: Sync>(
    frames: &[ScoredFrame<S>],
    point: (usize, usize),
    window: usize,
) -> Result<FocusDepth> {
    let first = frames.first().ok_or(FocusError::EmptySequence)?;
    if window == 0 {
        return Err(FocusError::Configuration(
            "focus depth window must be at least 1".to_string(),
        ));
    }

    let (h, w) = first.data().dim();
    let (row, col) = point;
    if row >= h || col >= w {
        return Err(FocusError::PointOutOfBounds {
            row,
            col,
            height: h,
            width: w,
        });
    }

    let (r0, rows) = patch_span(row, window, h);
    let (c0, cols) = patch_span(col, window, w);

    let mut scores: Vec<(usize, f64)> = frames
        .par_iter()
        .map(|frame| {
            if frame.data().dim() != (h, w) {
                return Err(FocusError::ShapeMismatch {
                    context: format!("frame {}", frame.index()),
                    expected: (h, w),
                    got: frame.data().dim(),
                });
            }
            let patch = frame
                .data()
                .slice(s![r0..r0 + rows, c0..c0 + cols])
                .to_owned();
            Ok((frame.index(), spectral_score(&patch)))
        })
        .collect::<Result<_>>()?;
    scores.sort_by_key(|(index, _)| *index);

    let mut best = FocusDepth {
        frame_index: scores[0].0,
        score: scores[0].1,
    };
    for &(frame_index, score) in scores.iter().skip(1) {
        if score > best.score {
            best = FocusDepth { frame_index, score };
        }
    }
    Ok(best)
}

/// Focus depth for each point, in the order given.
pub fn focus_depths<S: Sync>(
    frames: &[ScoredFrame<S>],
    points: &[(usize, usize)],
    window: usize,
) -> Result<Vec<FocusDepth>> {
    points
        .iter()
        .map(|&point| focus_depth_at(frames, point, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_stays_inside_image() {
        assert_eq!(patch_span(2, 8, 100), (0, 8));
        assert_eq!(patch_span(50, 8, 100), (46, 8));
        assert_eq!(patch_span(99, 8, 100), (92, 8));
        assert_eq!(patch_span(3, 64, 10), (0, 10));
    }
}
