use crate::consts::{INITIAL_REGION_FRACTION, MIN_CROP_SIZE};
use crate::error::{PassfotoError, Result};
use crate::geometry::SourcePoint;

/// A corner handle of the crop region.
///
/// Edge handles are deliberately unrepresentable: an edge-only drag cannot
/// preserve a fixed aspect ratio without an arbitrary policy for the
/// orthogonal dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    pub const ALL: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    /// Sign that maps a pointer delta along x to region growth.
    /// Positive for handles on the right edge, negative on the left.
    fn x_growth_sign(&self) -> f32 {
        match self {
            Handle::TopRight | Handle::BottomRight => 1.0,
            Handle::TopLeft | Handle::BottomLeft => -1.0,
        }
    }

    /// Sign that maps a pointer delta along y to region growth.
    /// Positive for handles on the bottom edge, negative on the top.
    fn y_growth_sign(&self) -> f32 {
        match self {
            Handle::BottomLeft | Handle::BottomRight => 1.0,
            Handle::TopLeft | Handle::TopRight => -1.0,
        }
    }
}

/// Crop rectangle in source-image pixel coordinates.
///
/// Every operation returns a new value; regions are never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    /// Centered initial region for a freshly loaded image or a new ratio.
    ///
    /// The region's shorter side is `INITIAL_REGION_FRACTION` of the shorter
    /// image dimension; the longer side follows from the ratio, shrunk to fit
    /// when the ratio is extreme. Degenerate inputs fall back to a minimal
    /// centered square.
    pub fn initialize(img_w: f32, img_h: f32, ratio: f32) -> CropRegion {
        if !(ratio > 0.0) || img_w <= 0.0 || img_h <= 0.0 {
            let side = MIN_CROP_SIZE.min(img_w.max(0.0)).min(img_h.max(0.0));
            return CropRegion {
                x: (img_w.max(0.0) - side) / 2.0,
                y: (img_h.max(0.0) - side) / 2.0,
                width: side,
                height: side,
            };
        }

        let base = INITIAL_REGION_FRACTION * img_w.min(img_h);
        let (mut w, mut h) = if ratio >= 1.0 {
            // Width drives: the width grows with the ratio, height stays at base.
            (base * ratio, base)
        } else {
            // Height drives.
            (base, base / ratio)
        };

        // Shrink to fit if the driving dimension overshoots the image.
        if w > img_w {
            h *= img_w / w;
            w = img_w;
        }
        if h > img_h {
            w *= img_h / h;
            h = img_h;
        }

        CropRegion {
            x: (img_w - w) / 2.0,
            y: (img_h - h) / 2.0,
            width: w,
            height: h,
        }
        .grow_to_min_size(ratio, img_w, img_h)
    }

    /// Enforce the minimum side length, keeping the center and ratio.
    /// No-op when the minimum does not fit inside the image.
    fn grow_to_min_size(self, ratio: f32, img_w: f32, img_h: f32) -> CropRegion {
        let min_w = MIN_CROP_SIZE.max(MIN_CROP_SIZE * ratio);
        if self.width >= min_w || min_w > img_w || min_w / ratio > img_h {
            return self;
        }
        let w = min_w;
        let h = min_w / ratio;
        CropRegion {
            x: self.x + (self.width - w) / 2.0,
            y: self.y + (self.height - h) / 2.0,
            width: w,
            height: h,
        }
        .clamp(img_w, img_h)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: SourcePoint) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn corner(&self, handle: Handle) -> SourcePoint {
        match handle {
            Handle::TopLeft => SourcePoint { x: self.x, y: self.y },
            Handle::TopRight => SourcePoint { x: self.right(), y: self.y },
            Handle::BottomLeft => SourcePoint { x: self.x, y: self.bottom() },
            Handle::BottomRight => SourcePoint { x: self.right(), y: self.bottom() },
        }
    }

    /// Same size at a new top-left.
    pub fn with_origin(self, x: f32, y: f32) -> CropRegion {
        CropRegion { x, y, ..self }
    }

    /// Shift the region so it lies fully inside the image, without changing
    /// its size. Idempotent. A region larger than the image is the caller's
    /// bug; growth past image bounds must be prevented before clamping.
    pub fn clamp(self, img_w: f32, img_h: f32) -> CropRegion {
        CropRegion {
            x: self.x.max(0.0).min(img_w - self.width),
            y: self.y.max(0.0).min(img_h - self.height),
            ..self
        }
    }

    /// Resize from a corner handle by an incremental pointer delta.
    ///
    /// The signed delta component with the larger magnitude wins, mapped so
    /// that moving away from the fixed opposite corner grows the region.
    /// Width drives the new size; height is derived from the ratio. The
    /// opposite corner stays fixed, and min-size and image bounds are
    /// enforced.
    pub fn resize_from_corner(
        self,
        handle: Handle,
        dx: f32,
        dy: f32,
        ratio: f32,
        img_w: f32,
        img_h: f32,
        min_size: f32,
    ) -> CropRegion {
        if !(ratio > 0.0) {
            return self;
        }

        let growth = if dx.abs() >= dy.abs() {
            handle.x_growth_sign() * dx
        } else {
            handle.y_growth_sign() * dy
        };

        let right = self.right();
        let bottom = self.bottom();

        // Both sides must stay >= min_size, so the width floor depends on the ratio.
        let min_w = min_size.max(min_size * ratio);
        // The fixed corner bounds how far the region can grow in each axis.
        let max_w = match handle {
            Handle::BottomRight => (img_w - self.x).min((img_h - self.y) * ratio),
            Handle::TopLeft => right.min(bottom * ratio),
            Handle::TopRight => (img_w - self.x).min(bottom * ratio),
            Handle::BottomLeft => right.min((img_h - self.y) * ratio),
        };

        // Bounds win over the min-size floor if the two ever conflict.
        let width = (self.width + growth).max(min_w).min(max_w);
        let height = width / ratio;

        let (x, y) = match handle {
            Handle::BottomRight => (self.x, self.y),
            Handle::TopLeft => (right - width, bottom - height),
            Handle::TopRight => (self.x, bottom - height),
            Handle::BottomLeft => (right - width, self.y),
        };

        CropRegion { x, y, width, height }
    }

    /// Snap to the given aspect ratio keeping the center, clamped to bounds.
    pub fn snap_to_ratio(self, ratio: f32, img_w: f32, img_h: f32) -> CropRegion {
        if !(ratio > 0.0) {
            return self;
        }

        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;

        // Try keeping width, adjust height.
        let mut w = self.width;
        let mut h = w / ratio;

        if h > img_h {
            h = img_h;
            w = h * ratio;
        }
        if w > img_w {
            w = img_w;
            h = w / ratio;
        }

        CropRegion {
            x: (cx - w / 2.0).max(0.0).min(img_w - w),
            y: (cy - h / 2.0).max(0.0).min(img_h - h),
            width: w,
            height: h,
        }
    }

    /// Validate that the region is non-empty and fully inside the image.
    pub fn validated(&self, img_w: f32, img_h: f32) -> Result<CropRegion> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PassfotoError::InvalidRegion(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x < 0.0 || self.y < 0.0 || self.right() > img_w + 0.5 || self.bottom() > img_h + 0.5
        {
            return Err(PassfotoError::InvalidRegion(format!(
                "Crop region ({:.0},{:.0} {:.0}x{:.0}) exceeds source dimensions ({img_w:.0}x{img_h:.0})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(*self)
    }
}
