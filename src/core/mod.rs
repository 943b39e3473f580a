//! core/mod.rs
//!
//! The brain of the tool:
//! - Walk each source tree one directory at a time
//! - Per directory: partition entries and pick a cover, then give every mp3
//!   a scratch copy that gets rewritten and moved into the destination tree
//! - Recurse into subdirectories afterwards, depth-first
//!
//! Per-file skips (destination already present) are counted and carried on;
//! everything else propagates and ends the run.

pub mod cover;
pub mod relocate;
pub mod sanitize;
pub mod scan;
pub mod tags;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use types::{Config, RunStats};

/// True when `path` is a directory we can actually list. Enough for source
/// trees, which are only ever read.
pub fn dir_is_usable(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

/// [`dir_is_usable`], plus a writability check for the destination root. Std
/// has no portable `access(2)`, so the check is an unnamed temp file that is
/// gone again before this returns. A read-only player mount fails here, up
/// front, rather than mid-run on the first relocation.
pub fn dir_is_writable(path: &Path) -> bool {
    dir_is_usable(path) && tempfile::tempfile_in(path).is_ok()
}

/// Process one directory, then its subdirectories, depth-first in name order.
pub fn process_tree(config: &Config, dir: &Path, stats: &mut RunStats) -> Result<()> {
    info!("Processing \"{}\"", dir.display());

    let listing = scan::scan_dir(dir)?;

    if listing.mp3s.is_empty() {
        warn!("No MP3 files found in \"{}\"", dir.display());
    } else {
        let cover = cover::resolve(dir, &listing)?;
        if let Some(cover) = &cover {
            info!("Using image \"{}\"", file_name(cover));
        }

        for mp3 in &listing.mp3s {
            if process_file(config, mp3, cover.as_deref())? {
                stats.relocated += 1;
            } else {
                stats.skipped += 1;
            }
        }

        info!("Processed {} MP3 files", listing.mp3s.len());
    }

    for subdir in &listing.subdirs {
        process_tree(config, subdir, stats)?;
    }

    Ok(())
}

/// Returns Ok(true) when the file was relocated, Ok(false) when it was
/// skipped because the destination already exists.
fn process_file(config: &Config, src: &Path, cover: Option<&Path>) -> Result<bool> {
    let track = tags::read_track_tags(src)?;
    let dest = relocate::dest_path(&config.dest_root, &track);

    // Checked before staging anything, so skipped files never hit scratch.
    if dest.exists() {
        warn!("\"{}\" already exists, skipping", dest.display());
        return Ok(false);
    }

    let copy = stage_in_scratch(src, &config.scratch)?;
    tags::rewrite_for_export(&copy, &track, cover)?;
    relocate::relocate(&copy, &dest)?;

    debug!("Relocated \"{}\" -> \"{}\"", src.display(), dest.display());
    Ok(true)
}

/// Copy the source file into the scratch directory under its own basename.
/// Only one staged copy exists at a time: it is moved out (or never created)
/// before the next file is staged.
fn stage_in_scratch(src: &Path, scratch: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("source \"{}\" has no file name", src.display()))?;

    let copy = scratch.join(name);
    fs::copy(src, &copy)
        .with_context(|| format!("copying \"{}\" into scratch", src.display()))?;

    Ok(copy)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
