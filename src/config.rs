use std::fs;
use std::path::Path;
use crate::domain::{Settings, SettingsFile};
use crate::error::{Error, Result};
use crate::Args;

pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let contents = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // An empty document deserializes to unit, not to a struct.
    if contents.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Defaults, then the settings file, then explicit flags.
pub fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(config_path) = &args.config {
        log::debug!("Loading settings from {}", config_path.display());
        let file = load_settings_file(config_path)?;
        apply_file(&mut settings, file);
    }

    if let Some(material) = &args.material {
        settings.material_file = material.clone();
    }
    if let Some(source_dir) = &args.source_dir {
        settings.source_dir = source_dir.clone();
    }
    if let Some(dest_dir) = &args.dest_dir {
        settings.dest_dir = dest_dir.clone();
    }
    if let Some(directive) = &args.directive {
        settings.directive = directive.clone();
    }
    if let Some(extension) = &args.extension {
        settings.extension = extension.clone();
    }
    settings.dry_run = args.dry_run;

    Ok(settings)
}

fn apply_file(settings: &mut Settings, file: SettingsFile) {
    if let Some(v) = file.material_file {
        settings.material_file = v;
    }
    if let Some(v) = file.source_dir {
        settings.source_dir = v;
    }
    if let Some(v) = file.dest_dir {
        settings.dest_dir = v;
    }
    if let Some(v) = file.directive {
        settings.directive = v;
    }
    if let Some(v) = file.extension {
        settings.extension = v;
    }
}
