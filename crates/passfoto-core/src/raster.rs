use ndarray::Array3;

use crate::error::{PassfotoError, Result};

/// An immutable RGB source raster.
/// Pixel data is row-major, shape = (height, width, 3).
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub data: Array3<u8>,
}

impl SourceImage {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if h == 0 || w == 0 || c != 3 {
            return Err(PassfotoError::InvalidDimensions {
                width: w as u32,
                height: h as u32,
            });
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }
}

/// A committed photo, resampled to a profile's target resolution.
/// Never mutated after creation.
#[derive(Clone, Debug)]
pub struct ExtractedPhoto {
    /// Pixel data, shape = (height, width, 3).
    pub data: Array3<u8>,
    /// Id of the size profile the photo was extracted for.
    pub profile_id: String,
}

impl ExtractedPhoto {
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }
}

/// Position of one photo copy on an output sheet, in paper pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A paper-sized raster with copies of one photo tiled onto it.
#[derive(Clone, Debug)]
pub struct OutputSheet {
    /// Pixel data, shape = (paper_height, paper_width, 3).
    pub data: Array3<u8>,
    /// Where each copy was drawn. Empty for a degenerate profile.
    pub placements: Vec<Placement>,
    pub profile_id: String,
}

impl OutputSheet {
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }
}
