use std::path::PathBuf;
use clap::Parser;
use crate::domain::{CopyReport, Settings};
use crate::fs::copy_images;
use crate::material::{collect_material_files, extract_image_paths, TexturePattern};

pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod material;

pub use error::{Error, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Material (.mtl) file, or a directory to search for them
    #[arg(short, long)]
    pub material: Option<PathBuf>,

    /// Directory the texture paths are resolved against for reading
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Directory the textures are copied into
    #[arg(short, long)]
    pub dest_dir: Option<PathBuf>,

    /// Texture-map directive to look for
    #[arg(long)]
    pub directive: Option<String>,

    /// Image extension the texture path must end with
    #[arg(long)]
    pub extension: Option<String>,

    /// YAML settings file; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn migrate_assets(settings: &Settings) -> Result<CopyReport> {
    let pattern = TexturePattern::new(&settings.directive, &settings.extension)?;

    let mut image_paths = Vec::new();
    for material_file in collect_material_files(&settings.material_file)? {
        log::debug!("Scanning {}", material_file.display());
        image_paths.extend(extract_image_paths(&material_file, &pattern)?);
    }

    let report = copy_images(
        &settings.source_dir,
        &settings.dest_dir,
        &image_paths,
        settings.dry_run,
    )?;

    log::info!(
        "{} copied, {} planned, {} missing, {} rejected",
        report.copied(),
        report.planned(),
        report.missing(),
        report.rejected()
    );
    Ok(report)
}
