use std::ops::Range;

use crate::error::{FocusError, Result};

/// Which boundary rule produced a [`FocusWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPlacement {
    /// The window covers every frame.
    Full,
    /// The window would start before frame 0 and was shifted right.
    ClampedStart,
    /// The window would run past the last frame and was shifted left.
    ClampedEnd,
    /// The window is centred on the sharpest frame.
    Centered,
}

impl std::fmt::Display for WindowPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "Full"),
            Self::ClampedStart => write!(f, "Clamped at start"),
            Self::ClampedEnd => write!(f, "Clamped at end"),
            Self::Centered => write!(f, "Centered"),
        }
    }
}

/// Contiguous range of frame indices kept for stacking.
///
/// `end` is exclusive and may equal `total + 1` for
/// [`WindowPlacement::ClampedEnd`]; use [`FocusWindow::indices`] to get the
/// range that actually indexes the frame list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusWindow {
    pub start: usize,
    pub end: usize,
    /// Index of the sharpest frame.
    pub best: usize,
    pub placement: WindowPlacement,
}

impl FocusWindow {
    /// Nominal width `end - start`.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// The window clipped to `total` frames.
    pub fn indices(&self, total: usize) -> Range<usize> {
        self.start.min(total)..self.end.min(total)
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Pick the window of frames to stack around the best score.
///
/// The nominal window is `2 * ceil(target_count / 2)` wide and centred on the
/// first maximum. Near the start it is shifted to begin at 0. Near the end it
/// becomes `[N - width + 1, N + 1)`, which after clipping keeps one frame
/// fewer than the other placements.
pub fn select_window(scores: &[f64], target_count: usize) -> Result<FocusWindow> {
    if scores.is_empty() {
        return Err(FocusError::EmptySequence);
    }
    if target_count == 0 {
        return Err(FocusError::Configuration(
            "number_to_stack must be at least 1".to_string(),
        ));
    }

    let total = scores.len();
    let best = argmax_first(scores);
    let half = target_count.div_ceil(2);
    let width = 2 * half;

    let (start, end, placement) = if width >= total {
        (0, total, WindowPlacement::Full)
    } else if best < half {
        (0, width, WindowPlacement::ClampedStart)
    } else if best + half > total {
        (total - width + 1, total + 1, WindowPlacement::ClampedEnd)
    } else {
        (best - half, best + half, WindowPlacement::Centered)
    };

    Ok(FocusWindow {
        start,
        end,
        best,
        placement,
    })
}

/// Index of the first maximum. NaN never wins.
fn argmax_first(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] || (scores[best].is_nan() && !s.is_nan()) {
            best = i;
        }
    }
    best
}
