#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;
use ndarray::Array2;

use focusfuse_core::error::FocusError;
use focusfuse_core::pyramid::sampling::{pyr_down, pyr_up};
use focusfuse_core::pyramid::{
    collapse, gaussian_pyramid, laplacian_pyramid, pyramid_depth, LayerId, Pyramid, PyramidLevel,
};

#[test]
fn test_depth_from_min_pyramid_size() {
    assert_eq!(pyramid_depth((4, 4), 2).unwrap(), 2);
    assert_eq!(pyramid_depth((60, 100), 32).unwrap(), 1);
    assert_eq!(pyramid_depth((128, 64), 8).unwrap(), 4);
    assert_eq!(pyramid_depth((480, 640), 32).unwrap(), 4);
    assert_eq!(pyramid_depth((7, 7), 7).unwrap(), 1);
}

#[test]
fn test_image_smaller_than_min_size_is_configuration_error() {
    assert!(matches!(
        pyramid_depth((16, 40), 32),
        Err(FocusError::Configuration(_))
    ));
    assert!(matches!(
        pyramid_depth((16, 40), 0),
        Err(FocusError::Configuration(_))
    ));
}

#[test]
fn test_gaussian_level_zero_is_input() {
    let img = common::noise_texture(37, 53, 11);
    let levels = gaussian_pyramid(&img, 4);
    assert_eq!(levels.len(), 4);
    for ((r, c), &v) in img.indexed_iter() {
        assert_eq!(levels[0][[r, c]], v as f64);
    }
}

#[test]
fn test_level_shapes_halve_with_rounding_up() {
    let img = common::noise_texture(37, 53, 12);
    let pyramid = laplacian_pyramid(&img, 4, 0).unwrap();
    assert_eq!(
        pyramid.shapes(),
        vec![(37, 53), (19, 27), (10, 14), (5, 7)]
    );
    for (i, level) in pyramid.levels().iter().enumerate() {
        assert_eq!(level.level, i);
        assert_eq!(level.layer, LayerId::Source(0));
    }
}

#[test]
fn test_coarsest_level_is_low_pass_image() {
    let img = common::noise_texture(32, 32, 13);
    let gaussian = gaussian_pyramid(&img, 3);
    let pyramid = laplacian_pyramid(&img, 3, 2).unwrap();
    assert_eq!(pyramid.base().data, gaussian[2]);
    assert_eq!(pyramid.base().layer, LayerId::Source(2));
}

#[test]
fn test_collapse_round_trip() {
    for &(h, w, depth) in &[(32usize, 32usize, 4usize), (37, 53, 4), (21, 9, 3), (5, 5, 1)] {
        let img = common::noise_texture(h, w, (h * w) as u64);
        let pyramid = laplacian_pyramid(&img, depth, 0).unwrap();
        let restored = collapse(&pyramid).unwrap();
        assert_eq!(restored.dim(), (h, w));
        for ((r, c), &v) in img.indexed_iter() {
            assert_abs_diff_eq!(restored[[r, c]], v as f64, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_flat_image_survives_resampling() {
    let flat = Array2::from_elem((7, 10), 42.0f64);
    let down = pyr_down(&flat);
    assert_eq!(down.dim(), (4, 5));
    for &v in down.iter() {
        assert_abs_diff_eq!(v, 42.0, epsilon = 1e-12);
    }

    let up = pyr_up(&down);
    assert_eq!(up.dim(), (8, 10));
    for &v in up.iter() {
        assert_abs_diff_eq!(v, 42.0, epsilon = 1e-12);
    }
}

#[test]
fn test_flat_image_has_zero_detail() {
    let flat = Array2::from_elem((16, 24), 90.0f32);
    let pyramid = laplacian_pyramid(&flat, 3, 0).unwrap();
    for level in &pyramid.levels()[..2] {
        assert!(level.data.iter().all(|v| v.abs() < 1e-12));
    }
}

#[test]
fn test_pyramid_rejects_mislabelled_levels() {
    let levels = vec![
        PyramidLevel {
            data: Array2::zeros((4, 4)),
            layer: LayerId::Source(0),
            level: 1,
        },
        PyramidLevel {
            data: Array2::zeros((2, 2)),
            layer: LayerId::Source(0),
            level: 0,
        },
    ];
    assert!(Pyramid::new(levels).is_err());
    assert!(matches!(Pyramid::new(vec![]), Err(FocusError::EmptySequence)));
}

#[test]
fn test_zero_depth_is_rejected() {
    let img = common::noise_texture(8, 8, 14);
    assert!(laplacian_pyramid(&img, 0, 0).is_err());
}
