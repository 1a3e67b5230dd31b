use tracing::debug;

use crate::error::Result;
use crate::interaction::CropController;
use crate::profile::SizeProfile;
use crate::raster::{ExtractedPhoto, OutputSheet, SourceImage};
use crate::render::{extract, tile};

/// One loaded image plus its interactive crop state and committed output.
///
/// The controller exclusively owns the region during gestures; the session
/// reads it only when committing, so there is never a concurrent writer.
/// Commits are generation-counted: consumers comparing generations can tell
/// whether a previously requested extraction is still the current one.
pub struct CropSession {
    image: SourceImage,
    profile: SizeProfile,
    controller: CropController,
    photos: Vec<ExtractedPhoto>,
    generation: u64,
}

impl CropSession {
    pub fn new(image: SourceImage, profile: SizeProfile) -> Self {
        let controller = CropController::new(image.width(), image.height(), profile.ratio());
        Self {
            image,
            profile,
            controller,
            photos: Vec::new(),
            generation: 0,
        }
    }

    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    pub fn profile(&self) -> &SizeProfile {
        &self.profile
    }

    pub fn controller(&self) -> &CropController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CropController {
        &mut self.controller
    }

    /// Switch size profile; the region is reinitialized for the new ratio.
    pub fn set_profile(&mut self, profile: SizeProfile) {
        self.controller.set_ratio(profile.ratio());
        self.profile = profile;
    }

    /// Reinitialize the crop region to the centered default.
    pub fn reset_crop(&mut self) {
        self.controller.reset();
    }

    /// Extract the current region at the profile's target size and append it
    /// to the committed photo list.
    pub fn commit_crop(&mut self) -> Result<&ExtractedPhoto> {
        let region = self.controller.region();
        let photo = extract(
            &self.image,
            &region,
            self.profile.photo_width,
            self.profile.photo_height,
            &self.profile.id,
        )?;

        self.generation += 1;
        debug!(
            generation = self.generation,
            "committed crop {:.0}x{:.0} at ({:.0}, {:.0})",
            region.width,
            region.height,
            region.x,
            region.y
        );

        self.photos.push(photo);
        Ok(self.photos.last().expect("photo was just pushed"))
    }

    pub fn photos(&self) -> &[ExtractedPhoto] {
        &self.photos
    }

    pub fn latest_photo(&self) -> Option<&ExtractedPhoto> {
        self.photos.last()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tile the most recent committed photo onto a full sheet.
    pub fn sheet(&self) -> Option<OutputSheet> {
        self.latest_photo().map(|p| tile(p, &self.profile))
    }
}
