use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use passfoto_core::profile::SizeProfile;
use serde::Serialize;

#[derive(Args)]
pub struct ProfilesArgs {
    /// Write the profiles to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ProfileSet {
    profile: Vec<SizeProfile>,
}

/// Print or save the built-in size profiles as TOML.
pub fn run(args: &ProfilesArgs) -> Result<()> {
    let set = ProfileSet {
        profile: SizeProfile::builtins(),
    };
    let toml_str = toml::to_string_pretty(&set)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write profiles to {}", path.display()))?;
        println!("Profiles saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
