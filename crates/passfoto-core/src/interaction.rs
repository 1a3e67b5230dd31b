use tracing::debug;

use crate::consts::{HANDLE_HIT_RADIUS, MIN_CROP_SIZE};
use crate::geometry::{DisplayMapping, DisplayPoint, SourcePoint};
use crate::region::{CropRegion, Handle};

/// Transient pointer-gesture state.
/// Exists only between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// Moving the whole region. The anchor is the offset from the pointer to
    /// the region's top-left, captured at pointer-down.
    Dragging { anchor_dx: f32, anchor_dy: f32 },
    /// Resizing from a corner. The anchor is the last processed pointer
    /// position; deltas are incremental to avoid drift.
    Resizing { handle: Handle, anchor: SourcePoint },
}

/// Drives drag and corner-resize gestures over the active crop region.
///
/// The controller is the sole writer of the region during a gesture; between
/// gestures the region is freely readable. Pointer events arriving before a
/// display mapping exists (image still loading, container not laid out) are
/// ignored.
pub struct CropController {
    img_w: f32,
    img_h: f32,
    ratio: f32,
    region: CropRegion,
    mapping: Option<DisplayMapping>,
    gesture: GestureState,
}

impl CropController {
    pub fn new(img_w: u32, img_h: u32, ratio: f32) -> Self {
        let img_w = img_w as f32;
        let img_h = img_h as f32;
        Self {
            img_w,
            img_h,
            ratio,
            region: CropRegion::initialize(img_w, img_h, ratio),
            mapping: None,
            gesture: GestureState::Idle,
        }
    }

    pub fn region(&self) -> CropRegion {
        self.region
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn mapping(&self) -> Option<DisplayMapping> {
        self.mapping
    }

    /// Replace the display mapping (image load, container resize).
    /// The mapping is always swapped wholesale; there is no partial update.
    pub fn set_mapping(&mut self, mapping: Option<DisplayMapping>) {
        self.mapping = mapping;
    }

    /// Switch the target aspect ratio and reinitialize the region for it.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.reset();
    }

    /// Discard the current region and gesture, back to the centered default.
    pub fn reset(&mut self) {
        self.region = CropRegion::initialize(self.img_w, self.img_h, self.ratio);
        self.gesture = GestureState::Idle;
    }

    pub fn pointer_down(&mut self, p: DisplayPoint) {
        let Some(mapping) = self.mapping else {
            debug!("pointer-down ignored: no display mapping");
            return;
        };

        let sp = mapping.to_source(p);
        let tolerance = HANDLE_HIT_RADIUS / mapping.scale;

        if let Some(handle) = self.hit_handle(sp, tolerance) {
            self.gesture = GestureState::Resizing { handle, anchor: sp };
        } else if self.region.contains(sp) {
            self.gesture = GestureState::Dragging {
                anchor_dx: sp.x - self.region.x,
                anchor_dy: sp.y - self.region.y,
            };
        }
    }

    pub fn pointer_move(&mut self, p: DisplayPoint) {
        let Some(mapping) = self.mapping else {
            debug!("pointer-move ignored: no display mapping");
            return;
        };

        let sp = mapping.to_source(p);
        match self.gesture {
            GestureState::Idle => {}
            GestureState::Dragging { anchor_dx, anchor_dy } => {
                self.region = self
                    .region
                    .with_origin(sp.x - anchor_dx, sp.y - anchor_dy)
                    .clamp(self.img_w, self.img_h);
            }
            GestureState::Resizing { handle, anchor } => {
                self.region = self.region.resize_from_corner(
                    handle,
                    sp.x - anchor.x,
                    sp.y - anchor.y,
                    self.ratio,
                    self.img_w,
                    self.img_h,
                    MIN_CROP_SIZE,
                );
                self.gesture = GestureState::Resizing { handle, anchor: sp };
            }
        }
    }

    /// End the gesture and commit the region as-is. There is no abort; the
    /// region is kept valid continuously, so the last state is always usable.
    pub fn pointer_up(&mut self) -> CropRegion {
        self.gesture = GestureState::Idle;
        self.region
    }

    fn hit_handle(&self, sp: SourcePoint, tolerance: f32) -> Option<Handle> {
        Handle::ALL.into_iter().find(|&h| {
            let c = self.region.corner(h);
            (sp.x - c.x).abs() <= tolerance && (sp.y - c.y).abs() <= tolerance
        })
    }
}
