/// Minimum crop region side length, in source pixels.
pub const MIN_CROP_SIZE: f32 = 50.0;

/// Fraction of the shorter image dimension used for the initial crop
/// region's shorter side.
pub const INITIAL_REGION_FRACTION: f32 = 0.3;

/// Tolerance for aspect-ratio equality checks.
pub const ASPECT_TOLERANCE: f32 = 1e-6;

/// Hit radius around a corner handle, in display pixels.
pub const HANDLE_HIT_RADIUS: f32 = 8.0;

/// Resolution assumed for paper and photo dimensions.
pub const SHEET_DPI: f32 = 96.0;

/// JPEG quality used when saving photos and sheets.
pub const JPEG_QUALITY: u8 = 90;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Photo cell for 35x45 mm passport photos at 96 DPI.
pub const PASSPORT_PHOTO_WIDTH: u32 = 134;
pub const PASSPORT_PHOTO_HEIGHT: u32 = 173;

/// A4 paper at 96 DPI, portrait.
pub const A4_PAPER_WIDTH: u32 = 794;
pub const A4_PAPER_HEIGHT: u32 = 1122;
pub const A4_GRID_COLS: u32 = 5;
pub const A4_GRID_ROWS: u32 = 6;

/// 6x4 inch photo paper at 96 DPI, landscape.
pub const SIX_BY_FOUR_PAPER_WIDTH: u32 = 576;
pub const SIX_BY_FOUR_PAPER_HEIGHT: u32 = 384;
pub const SIX_BY_FOUR_GRID_COLS: u32 = 4;
pub const SIX_BY_FOUR_GRID_ROWS: u32 = 2;
