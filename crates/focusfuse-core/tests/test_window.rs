use focusfuse_core::error::FocusError;
use focusfuse_core::quality::window::{select_window, WindowPlacement};

fn peaked_scores(count: usize, best: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 - i.abs_diff(best) as f64)
        .collect()
}

#[test]
fn test_centered_window() {
    let scores = peaked_scores(20, 10);
    let window = select_window(&scores, 12).unwrap();
    assert_eq!((window.start, window.end), (4, 16));
    assert_eq!(window.len(), 12);
    assert_eq!(window.best, 10);
    assert_eq!(window.placement, WindowPlacement::Centered);
    assert_eq!(window.indices(20), 4..16);
}

#[test]
fn test_target_at_least_total_keeps_everything() {
    for total in 1..12 {
        let scores = peaked_scores(total, total / 2);
        for target in total..total + 4 {
            let window = select_window(&scores, target).unwrap();
            assert_eq!(window.indices(total), 0..total);
            assert_eq!(window.placement, WindowPlacement::Full);
        }
    }
}

#[test]
fn test_odd_target_rounds_window_up() {
    let scores = peaked_scores(20, 10);
    let window = select_window(&scores, 5).unwrap();
    assert_eq!((window.start, window.end), (7, 13));
}

#[test]
fn test_window_clamped_at_start() {
    let scores = peaked_scores(20, 2);
    let window = select_window(&scores, 8).unwrap();
    assert_eq!((window.start, window.end), (0, 8));
    assert_eq!(window.placement, WindowPlacement::ClampedStart);
}

#[test]
fn test_window_clamped_at_end_keeps_observed_offset() {
    let scores = peaked_scores(20, 18);
    let window = select_window(&scores, 8).unwrap();
    assert_eq!((window.start, window.end), (13, 21));
    assert_eq!(window.placement, WindowPlacement::ClampedEnd);
    // Clipped to the frame list, one frame fewer than the nominal width.
    assert_eq!(window.indices(20), 13..20);
}

#[test]
fn test_ties_pick_first_maximum() {
    let scores = vec![1.0, 5.0, 2.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let window = select_window(&scores, 2).unwrap();
    assert_eq!(window.best, 1);
    assert_eq!((window.start, window.end), (0, 2));
}

#[test]
fn test_window_stays_in_range_with_expected_length() {
    for total in 1..30 {
        for best in 0..total {
            let scores = peaked_scores(total, best);
            for target in 1..35 {
                let window = select_window(&scores, target).unwrap();
                let range = window.indices(total);
                let nominal = 2 * target.div_ceil(2);

                assert!(range.end <= total);
                assert!(range.start < range.end);
                let expected = match window.placement {
                    WindowPlacement::ClampedEnd => nominal - 1,
                    _ => nominal.min(total),
                };
                assert_eq!(
                    range.len(),
                    expected,
                    "total={total} best={best} target={target} window={window:?}"
                );
                assert!(range.contains(&best) || window.placement == WindowPlacement::ClampedEnd);
            }
        }
    }
}

#[test]
fn test_empty_scores_error() {
    assert!(matches!(
        select_window(&[], 3),
        Err(FocusError::EmptySequence)
    ));
}

#[test]
fn test_zero_target_is_configuration_error() {
    assert!(matches!(
        select_window(&[1.0, 2.0], 0),
        Err(FocusError::Configuration(_))
    ));
}
