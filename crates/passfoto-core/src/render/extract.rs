use ndarray::Array3;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{PassfotoError, Result};
use crate::raster::{ExtractedPhoto, SourceImage};
use crate::region::CropRegion;

/// Resample the pixel rectangle `region` of `source` into a raster of
/// exactly `target_w x target_h`. Deterministic for identical inputs.
pub fn extract(
    source: &SourceImage,
    region: &CropRegion,
    target_w: u32,
    target_h: u32,
    profile_id: &str,
) -> Result<ExtractedPhoto> {
    if target_w == 0 || target_h == 0 {
        return Err(PassfotoError::InvalidDimensions {
            width: target_w,
            height: target_h,
        });
    }

    let region = region.validated(source.width() as f32, source.height() as f32)?;
    let data = resample_region(&source.data, &region, target_w, target_h);

    Ok(ExtractedPhoto {
        data,
        profile_id: profile_id.to_string(),
    })
}

/// Bilinear resample of a sub-rectangle into the target dimensions.
///
/// Sample positions are pixel-center aligned; coordinates outside the source
/// are clamped to the border.
pub(crate) fn resample_region(
    src: &Array3<u8>,
    region: &CropRegion,
    target_w: u32,
    target_h: u32,
) -> Array3<u8> {
    let tw = target_w as usize;
    let th = target_h as usize;
    let step_x = region.width / target_w as f32;
    let step_y = region.height / target_h as f32;

    let rows: Vec<Vec<u8>> = if tw * th >= PARALLEL_PIXEL_THRESHOLD {
        (0..th)
            .into_par_iter()
            .map(|row| resample_row(src, region, row, tw, step_x, step_y))
            .collect()
    } else {
        (0..th)
            .map(|row| resample_row(src, region, row, tw, step_x, step_y))
            .collect()
    };

    let flat: Vec<u8> = rows.into_iter().flatten().collect();
    Array3::from_shape_vec((th, tw, 3), flat).expect("buffer size matches dimensions")
}

fn resample_row(
    src: &Array3<u8>,
    region: &CropRegion,
    row: usize,
    target_w: usize,
    step_x: f32,
    step_y: f32,
) -> Vec<u8> {
    let src_y = region.y + (row as f32 + 0.5) * step_y - 0.5;
    let mut out = Vec::with_capacity(target_w * 3);
    for col in 0..target_w {
        let src_x = region.x + (col as f32 + 0.5) * step_x - 0.5;
        out.extend_from_slice(&sample_bilinear(src, src_x, src_y));
    }
    out
}

fn sample_bilinear(src: &Array3<u8>, x: f32, y: f32) -> [u8; 3] {
    let (h, w, _) = src.dim();
    let x = x.clamp(0.0, (w - 1) as f32);
    let y = y.clamp(0.0, (h - 1) as f32);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let mut pixel = [0u8; 3];
    for (c, out) in pixel.iter_mut().enumerate() {
        let p00 = src[[y0, x0, c]] as f32;
        let p10 = src[[y0, x1, c]] as f32;
        let p01 = src[[y1, x0, c]] as f32;
        let p11 = src[[y1, x1, c]] as f32;
        let top = p00 + (p10 - p00) * fx;
        let bottom = p01 + (p11 - p01) * fx;
        *out = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
    }
    pixel
}
