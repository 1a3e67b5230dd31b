/// A point in container (display) coordinates.
///
/// Kept distinct from `SourcePoint` so the two coordinate spaces cannot be
/// mixed accidentally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPoint {
    pub x: f32,
    pub y: f32,
}

/// A point in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePoint {
    pub x: f32,
    pub y: f32,
}

/// How the source image is fitted inside its display container.
///
/// Derived purely from container and source dimensions; replaced wholesale
/// whenever either changes, never patched in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMapping {
    /// Display pixels per source pixel (uniform for both axes).
    pub scale: f32,
    /// Top-left of the displayed image within the container.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl DisplayMapping {
    /// Aspect-preserving fit of the source inside the container, centered.
    ///
    /// Returns `None` for degenerate container or source dimensions; callers
    /// treat an absent mapping as "ignore pointer input".
    pub fn fit(container_w: f32, container_h: f32, source_w: f32, source_h: f32) -> Option<Self> {
        if container_w <= 0.0 || container_h <= 0.0 || source_w <= 0.0 || source_h <= 0.0 {
            return None;
        }

        let scale = (container_w / source_w).min(container_h / source_h);
        Some(Self {
            scale,
            offset_x: (container_w - source_w * scale) / 2.0,
            offset_y: (container_h - source_h * scale) / 2.0,
        })
    }

    pub fn to_source(&self, p: DisplayPoint) -> SourcePoint {
        SourcePoint {
            x: (p.x - self.offset_x) / self.scale,
            y: (p.y - self.offset_y) / self.scale,
        }
    }

    pub fn to_display(&self, p: SourcePoint) -> DisplayPoint {
        DisplayPoint {
            x: p.x * self.scale + self.offset_x,
            y: p.y * self.scale + self.offset_y,
        }
    }
}
