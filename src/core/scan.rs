//! core/scan.rs
//! Partition one directory's immediate children into mp3s, cover images, and
//! subdirectories. Non-recursive; the driver decides where to descend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const MP3_EXTENSIONS: &[&str] = &["mp3"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// One directory's children, split by what the pipeline does with them.
/// Everything that is neither an mp3, a cover candidate, nor a subdirectory
/// is ignored. Each list is sorted so runs are deterministic regardless of
/// filesystem listing order.
#[derive(Debug, Default)]
pub struct DirScan {
    pub mp3s: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub subdirs: Vec<PathBuf>,
}

pub fn scan_dir(dir: &Path) -> Result<DirScan> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("listing directory \"{}\"", dir.display()))?;

    let mut scan = DirScan::default();

    for entry in entries {
        let entry = entry.with_context(|| format!("listing directory \"{}\"", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            scan.subdirs.push(path);
        } else if path.is_file() {
            if has_extension(&path, MP3_EXTENSIONS) {
                scan.mp3s.push(path);
            } else if has_extension(&path, IMAGE_EXTENSIONS) {
                scan.images.push(path);
            }
        }
    }

    // Same parent everywhere, so whole-path order is filename order.
    scan.mp3s.sort();
    scan.images.sort();
    scan.subdirs.sort();

    Ok(scan)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
