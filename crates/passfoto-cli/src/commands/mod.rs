pub mod crop;
pub mod info;
pub mod profiles;
pub mod sheet;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use passfoto_core::profile::SizeProfile;
use passfoto_core::region::CropRegion;

/// Profile selection shared by the crop and sheet commands.
#[derive(Args)]
pub struct ProfileArgs {
    /// Built-in size profile id (a4, 6x4)
    #[arg(short, long, default_value = "a4")]
    pub profile: String,

    /// Load the profile from a TOML file instead
    #[arg(long, value_name = "FILE", conflicts_with = "profile")]
    pub profile_file: Option<PathBuf>,
}

impl ProfileArgs {
    pub fn resolve(&self) -> Result<SizeProfile> {
        let profile = if let Some(ref path) = self.profile_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile from {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse profile from {}", path.display()))?
        } else {
            SizeProfile::builtin(&self.profile)?
        };
        profile.validated()?;
        Ok(profile)
    }
}

/// Parse an `x,y,width,height` crop region argument (source pixels).
pub fn parse_region(s: &str) -> std::result::Result<CropRegion, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err("expected x,y,width,height".into());
    }
    let mut vals = [0.0f32; 4];
    for (v, part) in vals.iter_mut().zip(&parts) {
        *v = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid number: {part}"))?;
    }
    Ok(CropRegion {
        x: vals[0],
        y: vals[1],
        width: vals[2],
        height: vals[3],
    })
}

/// Output path next to the source: `<stem>_<suffix>.<ext>`.
pub fn default_output_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_{suffix}.png"))
}

/// The crop region to use: the validated user-provided one snapped to the
/// profile ratio, or the centered default.
pub fn resolve_region(
    region: Option<CropRegion>,
    img_w: u32,
    img_h: u32,
    profile: &SizeProfile,
) -> Result<CropRegion> {
    let img_w = img_w as f32;
    let img_h = img_h as f32;
    match region {
        Some(r) => {
            let r = r.validated(img_w, img_h)?;
            Ok(r.snap_to_ratio(profile.ratio(), img_w, img_h))
        }
        None => Ok(CropRegion::initialize(img_w, img_h, profile.ratio())),
    }
}
