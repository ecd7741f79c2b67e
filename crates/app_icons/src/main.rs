//! Generates the iOS app icon set from a single source image.
//!
//! Usage:
//!   app-icons
//!   app-icons --source art/icon.png --output-dir ios/App/App/Assets.xcassets/AppIcon.appiconset

use anyhow::Result;
use app_icons::{GeneratorConfig, IOS_APP_ICONS, MANIFEST_FILE_NAME, ResampleFilter};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "app-icons", about = "Generate every iOS app icon size and its Contents.json")]
struct Args {
    /// JSON config file providing defaults for the options below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source image to resample
    #[arg(long)]
    source: Option<PathBuf>,

    /// Icon set directory to write into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Resampling filter: lanczos3, catmull-rom or gaussian
    #[arg(long)]
    filter: Option<ResampleFilter>,
}

impl Args {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(filter) = self.filter {
            config = config.with_filter(filter);
        }
        Ok(config)
    }
}

fn generate(args: Args) -> Result<()> {
    let config = args.into_config()?;
    app_icons::run_with_progress(&config, IOS_APP_ICONS, |icon| {
        println!(
            "Generated: {} ({}x{})",
            icon.filename, icon.pixel_size, icon.pixel_size
        );
    })?;

    println!("Generated: {MANIFEST_FILE_NAME}");
    println!("\nAll iOS app icons generated successfully!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match generate(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }

            ExitCode::FAILURE
        }
    }
}
