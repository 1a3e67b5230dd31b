use serde::{Deserialize, Serialize};

use crate::consts::{
    A4_GRID_COLS, A4_GRID_ROWS, A4_PAPER_HEIGHT, A4_PAPER_WIDTH, PASSPORT_PHOTO_HEIGHT,
    PASSPORT_PHOTO_WIDTH, SIX_BY_FOUR_GRID_COLS, SIX_BY_FOUR_GRID_ROWS, SIX_BY_FOUR_PAPER_HEIGHT,
    SIX_BY_FOUR_PAPER_WIDTH,
};
use crate::error::{PassfotoError, Result};

/// A named output configuration: photo cell size plus sheet grid layout.
/// All dimensions are pixels at 96 DPI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeProfile {
    pub id: String,
    pub paper_width: u32,
    pub paper_height: u32,
    pub photo_width: u32,
    pub photo_height: u32,
    pub rows: u32,
    pub cols: u32,
}

impl SizeProfile {
    /// Target aspect ratio (width/height) of the photo cell.
    pub fn ratio(&self) -> f32 {
        if self.photo_height == 0 {
            1.0
        } else {
            self.photo_width as f32 / self.photo_height as f32
        }
    }

    pub fn copies(&self) -> u32 {
        self.rows * self.cols
    }

    /// A4 sheet, 30 copies of a 35x45 mm photo.
    pub fn a4() -> Self {
        Self {
            id: "a4".into(),
            paper_width: A4_PAPER_WIDTH,
            paper_height: A4_PAPER_HEIGHT,
            photo_width: PASSPORT_PHOTO_WIDTH,
            photo_height: PASSPORT_PHOTO_HEIGHT,
            rows: A4_GRID_ROWS,
            cols: A4_GRID_COLS,
        }
    }

    /// 6x4 inch photo paper, 8 copies of a 35x45 mm photo.
    pub fn six_by_four() -> Self {
        Self {
            id: "6x4".into(),
            paper_width: SIX_BY_FOUR_PAPER_WIDTH,
            paper_height: SIX_BY_FOUR_PAPER_HEIGHT,
            photo_width: PASSPORT_PHOTO_WIDTH,
            photo_height: PASSPORT_PHOTO_HEIGHT,
            rows: SIX_BY_FOUR_GRID_ROWS,
            cols: SIX_BY_FOUR_GRID_COLS,
        }
    }

    pub fn builtins() -> Vec<Self> {
        vec![Self::a4(), Self::six_by_four()]
    }

    pub fn builtin(id: &str) -> Result<Self> {
        Self::builtins()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PassfotoError::UnknownProfile(id.into()))
    }

    /// Reject profiles that cannot produce a photo at all. A degenerate grid
    /// (zero rows or cols) is allowed and yields a blank sheet downstream.
    pub fn validated(&self) -> Result<&Self> {
        if self.photo_width == 0 || self.photo_height == 0 {
            return Err(PassfotoError::InvalidProfile(format!(
                "{}: photo dimensions must be > 0",
                self.id
            )));
        }
        if self.paper_width == 0 || self.paper_height == 0 {
            return Err(PassfotoError::InvalidProfile(format!(
                "{}: paper dimensions must be > 0",
                self.id
            )));
        }
        Ok(self)
    }
}
