use ndarray::{s, Array3};
use tracing::warn;

use crate::profile::SizeProfile;
use crate::raster::{ExtractedPhoto, OutputSheet, Placement};
use crate::region::CropRegion;

use super::extract::resample_region;

/// Tile copies of `photo` onto a blank sheet per the profile's grid.
///
/// Margins are `(paper - count * photo) / (count + 1)` per axis, so the gaps
/// between copies equal the gaps at the paper edges. A degenerate grid or a
/// grid that does not fit on the paper yields a blank sheet; both are
/// configuration errors to be caught upstream, not runtime faults.
pub fn tile(photo: &ExtractedPhoto, profile: &SizeProfile) -> OutputSheet {
    let paper_w = profile.paper_width as usize;
    let paper_h = profile.paper_height as usize;
    let mut data = Array3::from_elem((paper_h, paper_w, 3), 255u8);

    let blank = |data: Array3<u8>| OutputSheet {
        data,
        placements: Vec::new(),
        profile_id: profile.id.clone(),
    };

    if profile.copies() == 0 {
        warn!(profile = %profile.id, "degenerate grid, producing blank sheet");
        return blank(data);
    }

    let (margin_x, margin_y) = margins(profile);
    if margin_x < 0.0 || margin_y < 0.0 {
        warn!(
            profile = %profile.id,
            "grid does not fit on paper, producing blank sheet"
        );
        return blank(data);
    }

    // Extraction and tiling are independent resampling steps; re-fit the
    // photo here if its dimensions don't match the profile cell.
    let cell: Array3<u8> = if photo.width() == profile.photo_width
        && photo.height() == profile.photo_height
    {
        photo.data.clone()
    } else {
        let full = CropRegion {
            x: 0.0,
            y: 0.0,
            width: photo.width() as f32,
            height: photo.height() as f32,
        };
        resample_region(&photo.data, &full, profile.photo_width, profile.photo_height)
    };

    let cell_w = profile.photo_width as usize;
    let cell_h = profile.photo_height as usize;
    let mut placements = Vec::with_capacity(profile.copies() as usize);

    for row in 0..profile.rows {
        for col in 0..profile.cols {
            let x = (margin_x + col as f32 * (profile.photo_width as f32 + margin_x)).round()
                as usize;
            let y = (margin_y + row as f32 * (profile.photo_height as f32 + margin_y)).round()
                as usize;

            // Rounding must never push a copy off the paper.
            let x = x.min(paper_w - cell_w);
            let y = y.min(paper_h - cell_h);

            data.slice_mut(s![y..y + cell_h, x..x + cell_w, ..])
                .assign(&cell);
            placements.push(Placement {
                x: x as u32,
                y: y as u32,
                width: cell_w as u32,
                height: cell_h as u32,
            });
        }
    }

    OutputSheet {
        data,
        placements,
        profile_id: profile.id.clone(),
    }
}

/// Per-axis margins between copies and at the paper edges.
pub fn margins(profile: &SizeProfile) -> (f32, f32) {
    let margin_x = (profile.paper_width as f32 - profile.cols as f32 * profile.photo_width as f32)
        / (profile.cols as f32 + 1.0);
    let margin_y = (profile.paper_height as f32
        - profile.rows as f32 * profile.photo_height as f32)
        / (profile.rows as f32 + 1.0);
    (margin_x, margin_y)
}
