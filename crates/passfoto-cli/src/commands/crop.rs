use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use passfoto_core::io::image_io::{load_image, save_photo};
use passfoto_core::region::CropRegion;
use passfoto_core::render::extract;

use super::{default_output_path, parse_region, resolve_region, ProfileArgs};

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Crop region as x,y,width,height in source pixels (default: centered).
    /// The region is snapped to the profile's aspect ratio.
    #[arg(short, long, value_parser = parse_region)]
    pub region: Option<CropRegion>,

    /// Output image file (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let image = load_image(&args.file)?;
    let profile = args.profile.resolve()?;
    let region = resolve_region(args.region, image.width(), image.height(), &profile)?;

    let photo = extract(
        &image,
        &region,
        profile.photo_width,
        profile.photo_height,
        &profile.id,
    )?;

    let output = args.output.clone().unwrap_or_else(|| {
        default_output_path(
            &args.file,
            &format!("photo{}x{}", photo.width(), photo.height()),
        )
    });
    save_photo(&photo, &output)?;

    println!(
        "Cropped {:.0}x{:.0} at ({:.0}, {:.0}) -> {}x{}",
        region.width,
        region.height,
        region.x,
        region.y,
        photo.width(),
        photo.height()
    );
    println!("Saved to {}", output.display());

    Ok(())
}
