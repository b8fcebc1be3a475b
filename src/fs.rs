use std::fs;
use std::path::{Component, Path};
use crate::domain::{CopyOutcome, CopyReport};
use crate::error::{Error, Result};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Only plain relative paths may be joined onto the roots.
fn stays_under_root(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

pub fn copy_images<S: AsRef<str>>(
    source_dir: &Path,
    dest_dir: &Path,
    image_paths: &[S],
    dry_run: bool,
) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    for image_path in image_paths {
        let relative = Path::new(image_path.as_ref());
        if !stays_under_root(relative) {
            log::warn!("Skipping {}: not a path relative to the asset roots", relative.display());
            report.outcomes.push(CopyOutcome::Rejected { path: relative.to_path_buf() });
            continue;
        }

        let src_path = source_dir.join(relative);
        let dest_path = dest_dir.join(relative);

        if dry_run {
            if src_path.exists() {
                println!("Would copy {} to {}", src_path.display(), dest_path.display());
                report.outcomes.push(CopyOutcome::Planned { from: src_path, to: dest_path });
            } else {
                println!("File {} does not exist", src_path.display());
                report.outcomes.push(CopyOutcome::Missing { from: src_path });
            }
            continue;
        }

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        if src_path.exists() {
            fs::copy(&src_path, &dest_path).map_err(io_error(&dest_path))?;
            println!("Copied {} to {}", src_path.display(), dest_path.display());
            report.outcomes.push(CopyOutcome::Copied { from: src_path, to: dest_path });
        } else {
            println!("File {} does not exist", src_path.display());
            report.outcomes.push(CopyOutcome::Missing { from: src_path });
        }
    }

    Ok(report)
}
