use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use ndarray::Array3;

use crate::consts::JPEG_QUALITY;
use crate::error::Result;
use crate::raster::{ExtractedPhoto, OutputSheet, SourceImage};

/// Decode any supported raster format into an RGB `SourceImage`.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    let data = Array3::from_shape_vec((h as usize, w as usize, 3), img.into_raw())
        .expect("buffer size matches dimensions");
    SourceImage::new(data)
}

/// Save an RGB raster, choosing the format from the file extension.
/// JPEG is written at quality 90; everything else falls back to PNG.
pub fn save_raster(data: &Array3<u8>, path: &Path) -> Result<()> {
    let (h, w, _) = data.dim();
    let flat: Vec<u8> = data.iter().copied().collect();
    let img = RgbImage::from_raw(w as u32, h as u32, flat)
        .expect("buffer size matches dimensions");

    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => {
            let file = BufWriter::new(File::create(path)?);
            let encoder = JpegEncoder::new_with_quality(file, JPEG_QUALITY);
            img.write_with_encoder(encoder)?;
            Ok(())
        }
        _ => {
            img.save_with_format(path, ImageFormat::Png)?;
            Ok(())
        }
    }
}

pub fn save_photo(photo: &ExtractedPhoto, path: &Path) -> Result<()> {
    save_raster(&photo.data, path)
}

pub fn save_sheet(sheet: &OutputSheet, path: &Path) -> Result<()> {
    save_raster(&sheet.data, path)
}
