use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::domain::{DEFAULT_DIRECTIVE, DEFAULT_EXTENSION};
use crate::error::{Error, Result};

/// Matches `<directive> <path>.<extension>` anywhere in a line and captures the path.
#[derive(Debug, Clone)]
pub struct TexturePattern {
    regex: Regex,
}

impl TexturePattern {
    pub fn new(directive: &str, extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        let source = format!(
            r"{}\s+(.*\.{})",
            regex::escape(directive),
            regex::escape(extension)
        );
        Ok(TexturePattern { regex: Regex::new(&source)? })
    }

    pub fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for TexturePattern {
    fn default() -> Self {
        let source = format!(r"{}\s+(.*\.{})", DEFAULT_DIRECTIVE, DEFAULT_EXTENSION);
        TexturePattern {
            regex: Regex::new(&source).expect("built-in texture pattern is valid"),
        }
    }
}

pub fn extract_image_paths(material_file: &Path, pattern: &TexturePattern) -> Result<Vec<String>> {
    let unreadable = |source| Error::MaterialUnreadable {
        path: material_file.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(material_file).map_err(unreadable)?);

    let mut image_paths = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(unreadable)?;
        if let Some(path) = pattern.capture(&line) {
            log::debug!("{}: found texture {}", material_file.display(), path);
            image_paths.push(path.to_string());
        }
    }
    Ok(image_paths)
}

/// A directory expands to every `.mtl` file beneath it, sorted; a file stands for itself.
pub fn collect_material_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::MaterialUnreadable {
            path: e.path().unwrap_or(path).to_path_buf(),
            source: e.into(),
        })?;
        let is_mtl = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mtl"));
        if entry.file_type().is_file() && is_mtl {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
