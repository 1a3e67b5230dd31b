use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use passfoto_core::io::image_io::load_image;
use passfoto_core::region::CropRegion;

use super::ProfileArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)?;
    let profile = args.profile.resolve()?;
    let region = CropRegion::initialize(
        image.width() as f32,
        image.height() as f32,
        profile.ratio(),
    );

    println!("File:          {}", args.file.display());
    println!("Dimensions:    {}x{}", image.width(), image.height());
    println!(
        "Profile:       {} ({}x{} photo, {}x{} paper, {} copies)",
        profile.id,
        profile.photo_width,
        profile.photo_height,
        profile.paper_width,
        profile.paper_height,
        profile.copies()
    );
    println!("Photo ratio:   {:.3}", profile.ratio());
    println!(
        "Initial crop:  {:.0}x{:.0} at ({:.0}, {:.0})",
        region.width, region.height, region.x, region.y
    );

    Ok(())
}
