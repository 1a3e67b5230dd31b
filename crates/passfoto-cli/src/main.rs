mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "passfoto", about = "Passport photo cropping and print sheet tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image metadata and the suggested initial crop region
    Info(commands::info::InfoArgs),
    /// Extract a photo at a profile's target size
    Crop(commands::crop::CropArgs),
    /// Extract a photo and tile a full print sheet
    Sheet(commands::sheet::SheetArgs),
    /// Print the built-in size profiles as TOML
    Profiles(commands::profiles::ProfilesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Sheet(args) => commands::sheet::run(args),
        Commands::Profiles(args) => commands::profiles::run(args),
    }
}
