//! Band-pass Fourier sharpness score.
//!
//! The image is zero-padded to an FFT-friendly size, transformed with a real
//! 2D FFT, and the magnitudes inside an annulus of mid-to-high spatial
//! frequencies are summed. Defocus suppresses exactly that band, so the sum
//! ranks frames of the same scene by sharpness.

use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::consts::{SPECTRUM_BAND_HIGH, SPECTRUM_BAND_LOW, SPECTRUM_BORDER_FRACTION};

/// Sharpness score of a grayscale image. Always non-negative.
pub fn spectral_score(image: &Array2<f32>) -> f64 {
    let (h, w) = image.dim();
    if h == 0 || w == 0 {
        return 0.0;
    }

    let padded_h = optimal_dft_size(h);
    let padded_w = optimal_dft_size(w);
    let magnitude = rfft2_magnitude(image, padded_h, padded_w);
    band_pass_sum(&magnitude)
}

/// Smallest size `>= n` whose only prime factors are 2, 3 and 5.
pub fn optimal_dft_size(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    let mut candidate = n;
    loop {
        let mut m = candidate;
        for p in [2, 3, 5] {
            while m % p == 0 {
                m /= p;
            }
        }
        if m == 1 {
            return candidate;
        }
        candidate += 1;
    }
}

/// Magnitude of the real 2D FFT of `data` zero-padded to `(padded_h, padded_w)`.
///
/// Only the `padded_w / 2 + 1` non-redundant columns are returned, so the
/// result has shape `(padded_h, padded_w / 2 + 1)`.
pub fn rfft2_magnitude(data: &Array2<f32>, padded_h: usize, padded_w: usize) -> Array2<f64> {
    let (h, w) = data.dim();
    let half_w = padded_w / 2 + 1;

    let mut planner = FftPlanner::<f64>::new();
    let fft_row = planner.plan_fft_forward(padded_w);
    let fft_col = planner.plan_fft_forward(padded_h);

    let mut spectrum = Array2::<Complex<f64>>::zeros((padded_h, half_w));

    // Rows past the image are all zero and transform to zero.
    let mut row_buf = vec![Complex::new(0.0, 0.0); padded_w];
    for row in 0..h {
        for (col, v) in row_buf.iter_mut().enumerate() {
            let x = if col < w { data[[row, col]] as f64 } else { 0.0 };
            *v = Complex::new(x, 0.0);
        }
        fft_row.process(&mut row_buf);
        for col in 0..half_w {
            spectrum[[row, col]] = row_buf[col];
        }
    }

    let mut col_buf = vec![Complex::new(0.0, 0.0); padded_h];
    for col in 0..half_w {
        for (row, v) in col_buf.iter_mut().enumerate() {
            *v = spectrum[[row, col]];
        }
        fft_col.process(&mut col_buf);
        for (row, v) in col_buf.iter().enumerate() {
            spectrum[[row, col]] = *v;
        }
    }

    spectrum.mapv(|c| c.norm())
}

/// Sum of magnitudes inside the sharpness band.
///
/// The mask is defined on the upper half (positive vertical frequencies) and
/// mirrored onto the lower half, since the real FFT only halves the
/// horizontal axis.
fn band_pass_sum(magnitude: &Array2<f64>) -> f64 {
    let (mh, mw) = magnitude.dim();
    let half_h = mh / 2;
    let limit = (half_h as f64).min(mw as f64);
    let border_y = SPECTRUM_BORDER_FRACTION * half_h as f64;
    let border_x = SPECTRUM_BORDER_FRACTION * mw as f64;
    let r_low = SPECTRUM_BAND_LOW * limit;
    let r_high = SPECTRUM_BAND_HIGH * limit;

    let mut sum = 0.0f64;
    for y in 0..half_h {
        let fy = y as f64;
        if fy < border_y {
            continue;
        }
        for x in 0..mw {
            let fx = x as f64;
            if fx < border_x {
                continue;
            }
            let r = fx.hypot(fy);
            if r > r_low && r < r_high {
                sum += magnitude[[y, x]] + magnitude[[mh - 1 - y, x]];
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_sizes_are_five_smooth() {
        assert_eq!(optimal_dft_size(0), 1);
        assert_eq!(optimal_dft_size(7), 8);
        assert_eq!(optimal_dft_size(11), 12);
        assert_eq!(optimal_dft_size(13), 15);
        assert_eq!(optimal_dft_size(97), 100);
        assert_eq!(optimal_dft_size(128), 128);
    }

    #[test]
    fn dc_only_for_constant_image() {
        let data = Array2::from_elem((8, 8), 2.0f32);
        let mag = rfft2_magnitude(&data, 8, 8);
        assert_eq!(mag.dim(), (8, 5));
        assert!((mag[[0, 0]] - 128.0).abs() < 1e-9);
        let rest: f64 = mag.iter().skip(1).sum();
        assert!(rest < 1e-9);
    }
}
