#![allow(dead_code)]

use ndarray::Array3;

use passfoto_core::raster::SourceImage;

/// Build a solid-color RGB source image.
pub fn solid_image(w: usize, h: usize, rgb: [u8; 3]) -> SourceImage {
    let data = Array3::from_shape_fn((h, w, 3), |(_, _, c)| rgb[c]);
    SourceImage::new(data).unwrap()
}

/// Build an RGB source image with a per-pixel gradient, so resampled output
/// can be checked against known values.
pub fn gradient_image(w: usize, h: usize) -> SourceImage {
    let data = Array3::from_shape_fn((h, w, 3), |(row, col, c)| match c {
        0 => (row * 255 / h.max(1)) as u8,
        1 => (col * 255 / w.max(1)) as u8,
        _ => 128,
    });
    SourceImage::new(data).unwrap()
}
