use std::path::Path;

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::error::Result;

/// Load an image file as single-channel f32 in 8-bit intensity units.
///
/// Colour images are converted to luma.
pub fn load_gray(path: &Path) -> Result<Array2<f32>> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for (col, row, pixel) in gray.enumerate_pixels() {
        data[[row as usize, col as usize]] = pixel.0[0] as f32;
    }

    Ok(data)
}

/// Convert a composite to displayable 8-bit pixels: absolute value, rounded
/// and saturated to 0..=255.
pub fn to_display_u8(data: &Array2<f64>) -> Array2<u8> {
    data.mapv(|v| v.abs().round().min(255.0) as u8)
}

fn format_for(path: &Path) -> ImageFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("tif" | "tiff") => ImageFormat::Tiff,
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Png,
    }
}

/// Save a composite as an 8-bit grayscale image, format chosen by extension
/// (PNG when unknown).
pub fn save_composite(data: &Array2<f64>, path: &Path) -> Result<()> {
    let pixels = to_display_u8(data);
    let (h, w) = pixels.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in pixels.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([v]));
    }

    img.save_with_format(path, format_for(path))?;
    Ok(())
}

/// Save a composite promoted to 3 identical channels.
pub fn save_composite_rgb(data: &Array2<f64>, path: &Path) -> Result<()> {
    let pixels = to_display_u8(data);
    let (h, w) = pixels.dim();

    let mut img = RgbImage::new(w as u32, h as u32);
    for ((row, col), &v) in pixels.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Rgb([v, v, v]));
    }

    img.save_with_format(path, format_for(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_conversion_saturates_and_takes_magnitude() {
        let data = Array2::from_shape_vec((1, 4), vec![-3.4, 12.6, 300.0, 0.0]).unwrap();
        let out = to_display_u8(&data);
        assert_eq!(out.as_slice().unwrap(), &[3, 13, 255, 0]);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(format_for(Path::new("a.TIFF")), ImageFormat::Tiff);
        assert_eq!(format_for(Path::new("a.jpg")), ImageFormat::Jpeg);
        assert_eq!(format_for(Path::new("a.out")), ImageFormat::Png);
    }
}
