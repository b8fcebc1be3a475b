use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_MATERIAL_FILE: &str = "./src/assets/tokyo_tower.mtl";
pub const DEFAULT_SOURCE_DIR: &str = "./dist/assets.old";
pub const DEFAULT_DEST_DIR: &str = "./src/assets";
pub const DEFAULT_DIRECTIVE: &str = "map_Kd";
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Everything one migration run needs. Replaces the hard-coded roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub material_file: PathBuf,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub directive: String,
    pub extension: String,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            material_file: PathBuf::from(DEFAULT_MATERIAL_FILE),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            directive: DEFAULT_DIRECTIVE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

/// Shape of the optional YAML settings file. Every field may be omitted.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub material_file: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub directive: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { from: PathBuf, to: PathBuf },
    Planned { from: PathBuf, to: PathBuf },
    Missing { from: PathBuf },
    /// Absolute or parent-escaping path found in the material file.
    Rejected { path: PathBuf },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Copied { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Planned { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Missing { .. }))
    }

    pub fn rejected(&self) -> usize {
        self.count(|o| matches!(o, CopyOutcome::Rejected { .. }))
    }

    fn count(&self, pred: impl Fn(&CopyOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
