mod common;

use common::{gradient_image, solid_image};
use passfoto_core::profile::SizeProfile;
use passfoto_core::region::CropRegion;
use passfoto_core::render::{extract, tile};

fn region(x: f32, y: f32, w: f32, h: f32) -> CropRegion {
    CropRegion {
        x,
        y,
        width: w,
        height: h,
    }
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

#[test]
fn test_extract_output_dimensions_are_exact() {
    let img = gradient_image(200, 160);
    let photo = extract(&img, &region(10.0, 10.0, 100.0, 120.0), 134, 173, "a4").unwrap();
    assert_eq!(photo.width(), 134);
    assert_eq!(photo.height(), 173);
    assert_eq!(photo.profile_id, "a4");
}

#[test]
fn test_extract_is_deterministic() {
    let img = gradient_image(200, 160);
    let r = region(25.5, 30.25, 90.0, 115.7);
    let a = extract(&img, &r, 67, 86, "a4").unwrap();
    let b = extract(&img, &r, 67, 86, "a4").unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn test_extract_solid_color_stays_solid() {
    let img = solid_image(120, 100, [10, 200, 30]);
    let photo = extract(&img, &region(5.0, 5.0, 80.0, 80.0), 40, 40, "6x4").unwrap();
    for px in photo.data.outer_iter() {
        for p in px.outer_iter() {
            assert_eq!(p[0], 10);
            assert_eq!(p[1], 200);
            assert_eq!(p[2], 30);
        }
    }
}

#[test]
fn test_extract_downsample_and_upsample() {
    let img = gradient_image(100, 100);
    let down = extract(&img, &region(0.0, 0.0, 100.0, 100.0), 25, 25, "x").unwrap();
    assert_eq!(down.width(), 25);
    let up = extract(&img, &region(0.0, 0.0, 100.0, 100.0), 300, 300, "x").unwrap();
    assert_eq!(up.width(), 300);
}

#[test]
fn test_extract_rejects_zero_target() {
    let img = gradient_image(100, 100);
    assert!(extract(&img, &region(0.0, 0.0, 50.0, 50.0), 0, 40, "x").is_err());
    assert!(extract(&img, &region(0.0, 0.0, 50.0, 50.0), 40, 0, "x").is_err());
}

#[test]
fn test_extract_rejects_out_of_bounds_region() {
    let img = gradient_image(100, 100);
    assert!(extract(&img, &region(80.0, 0.0, 50.0, 50.0), 40, 40, "x").is_err());
    assert!(extract(&img, &region(-10.0, 0.0, 50.0, 50.0), 40, 40, "x").is_err());
}

// ---------------------------------------------------------------------------
// tile
// ---------------------------------------------------------------------------

#[test]
fn test_tile_a4_full_grid() {
    let img = solid_image(400, 500, [50, 60, 70]);
    let profile = SizeProfile::a4();
    let photo = extract(
        &img,
        &region(10.0, 10.0, 270.0, 347.0),
        profile.photo_width,
        profile.photo_height,
        &profile.id,
    )
    .unwrap();

    let sheet = tile(&photo, &profile);
    assert_eq!(sheet.width(), 794);
    assert_eq!(sheet.height(), 1122);
    assert_eq!(sheet.placements.len(), 30);

    // Every copy fully on paper.
    for p in &sheet.placements {
        assert!(p.x + p.width <= 794);
        assert!(p.y + p.height <= 1122);
    }

    // No two copies overlap.
    for (i, a) in sheet.placements.iter().enumerate() {
        for b in sheet.placements.iter().skip(i + 1) {
            let disjoint_x = a.x + a.width <= b.x || b.x + b.width <= a.x;
            let disjoint_y = a.y + a.height <= b.y || b.y + b.height <= a.y;
            assert!(disjoint_x || disjoint_y, "copies {a:?} and {b:?} overlap");
        }
    }
}

#[test]
fn test_tile_six_by_four_grid() {
    let photo = extract(
        &solid_image(300, 400, [0, 0, 0]),
        &region(0.0, 0.0, 134.0, 173.0),
        134,
        173,
        "6x4",
    )
    .unwrap();

    let sheet = tile(&photo, &SizeProfile::six_by_four());
    assert_eq!(sheet.width(), 576);
    assert_eq!(sheet.height(), 384);
    assert_eq!(sheet.placements.len(), 8);
}

#[test]
fn test_tile_draws_photo_pixels_inside_placements() {
    let photo = extract(
        &solid_image(200, 300, [10, 20, 30]),
        &region(0.0, 0.0, 134.0, 173.0),
        134,
        173,
        "a4",
    )
    .unwrap();

    let sheet = tile(&photo, &SizeProfile::a4());
    let p = sheet.placements[0];
    let inside = [
        sheet.data[[p.y as usize, p.x as usize, 0]],
        sheet.data[[p.y as usize, p.x as usize, 1]],
        sheet.data[[p.y as usize, p.x as usize, 2]],
    ];
    assert_eq!(inside, [10, 20, 30]);

    // Top-left margin stays blank paper.
    assert_eq!(sheet.data[[0, 0, 0]], 255);
    assert_eq!(sheet.data[[0, 0, 1]], 255);
    assert_eq!(sheet.data[[0, 0, 2]], 255);
}

#[test]
fn test_tile_resamples_mismatched_photo() {
    // Photo at half the profile cell size; tiling must re-fit it.
    let photo = extract(
        &solid_image(200, 300, [99, 99, 99]),
        &region(0.0, 0.0, 67.0, 86.0),
        67,
        86,
        "a4",
    )
    .unwrap();

    let profile = SizeProfile::a4();
    let sheet = tile(&photo, &profile);
    assert_eq!(sheet.placements.len(), 30);
    for p in &sheet.placements {
        assert_eq!(p.width, profile.photo_width);
        assert_eq!(p.height, profile.photo_height);
    }
}

#[test]
fn test_tile_degenerate_grid_yields_blank_sheet() {
    let photo = extract(
        &solid_image(200, 300, [1, 2, 3]),
        &region(0.0, 0.0, 134.0, 173.0),
        134,
        173,
        "a4",
    )
    .unwrap();

    let mut profile = SizeProfile::a4();
    profile.rows = 0;
    let sheet = tile(&photo, &profile);
    assert!(sheet.placements.is_empty());
    assert!(sheet.data.iter().all(|&v| v == 255));
}

#[test]
fn test_tile_oversized_grid_yields_blank_sheet() {
    let photo = extract(
        &solid_image(200, 300, [1, 2, 3]),
        &region(0.0, 0.0, 134.0, 173.0),
        134,
        173,
        "a4",
    )
    .unwrap();

    // 10 columns of 134 px cannot fit on 794 px paper.
    let mut profile = SizeProfile::a4();
    profile.cols = 10;
    let sheet = tile(&photo, &profile);
    assert!(sheet.placements.is_empty());
    assert!(sheet.data.iter().all(|&v| v == 255));
}
