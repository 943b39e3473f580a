//! core/relocate.rs
//! Build the destination path for a track and move the finished scratch copy
//! into place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::sanitize::sanitize;
use super::types::TrackTags;

/// `<dest_root>/<artist>/<album>/<NN - title>.mp3`, every tag-derived segment
/// sanitized. Empty segments (a file with no artist tag, say) simply drop out
/// of the join, same as the player builds its own tree.
pub fn dest_path(dest_root: &Path, tags: &TrackTags) -> PathBuf {
    let file_name = format!("{:02} - {}.mp3", tags.track_no, sanitize(&tags.title));

    dest_root
        .join(sanitize(tags.effective_artist()))
        .join(sanitize(&tags.effective_album()))
        .join(file_name)
}

/// Create the destination's missing directories and move the scratch copy in.
/// The caller has already ruled out an existing destination.
pub fn relocate(scratch_copy: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating destination directory \"{}\"", parent.display()))?;
    }

    move_file(scratch_copy, dest)
        .with_context(|| format!("moving scratch copy into \"{}\"", dest.display()))
}

/// Rename when possible. The scratch directory lives on the system temp
/// filesystem and the destination is usually a mounted player, so a plain
/// rename can fail with `CrossesDevices`; fall back to copy + remove.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        Err(e) => Err(e),
    }
}
