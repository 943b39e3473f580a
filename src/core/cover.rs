//! core/cover.rs
//! Choose the cover image for a directory's batch of mp3s.
//!
//! Rips often keep one scan per album directory, but multi-disc rips keep it
//! one level up next to the disc directories, hence the parent fallback.
//! Running without a cover is fine; an unlistable parent is not.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use super::scan::{self, DirScan};

/// Lexicographically first image in the directory, else in its parent, else
/// none. The two fallback steps each log a warning.
pub fn resolve(dir: &Path, listing: &DirScan) -> Result<Option<PathBuf>> {
    if let Some(image) = listing.images.first() {
        return Ok(Some(image.clone()));
    }

    warn!(
        "No cover found in \"{}\", looking in the parent directory",
        dir.display()
    );

    // `join("..")` rather than `parent()`: it behaves for relative paths like
    // `.` and for the filesystem root, and the returned path opens fine with
    // a `..` in the middle.
    let parent = dir.join("..");
    let image = scan::scan_dir(&parent)?.images.into_iter().next();

    if image.is_none() {
        warn!("No cover found for \"{}\"", dir.display());
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn picks_the_lexicographically_first_local_image() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("zz-back.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("aa-front.jpg"), b"x").unwrap();

        let listing = scan::scan_dir(tmp.path()).unwrap();
        let cover = resolve(tmp.path(), &listing).unwrap().unwrap();
        assert_eq!(cover.file_name().unwrap(), "aa-front.jpg");
    }

    #[test]
    fn falls_back_to_the_parent_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("cover.jpg"), b"x").unwrap();

        let disc = tmp.path().join("CD1");
        fs::create_dir(&disc).unwrap();
        fs::write(disc.join("01.mp3"), b"x").unwrap();

        let listing = scan::scan_dir(&disc).unwrap();
        let cover = resolve(&disc, &listing).unwrap().unwrap();

        assert_eq!(cover.file_name().unwrap(), "cover.jpg");
        assert_eq!(
            cover.canonicalize().unwrap(),
            tmp.path().join("cover.jpg").canonicalize().unwrap()
        );
    }

    #[test]
    fn none_when_no_image_anywhere() {
        let tmp = TempDir::new().unwrap();
        let album = tmp.path().join("album");
        fs::create_dir(&album).unwrap();

        let listing = scan::scan_dir(&album).unwrap();
        assert!(resolve(&album, &listing).unwrap().is_none());
    }

    #[test]
    fn local_image_wins_over_parent_image() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("parent.jpg"), b"x").unwrap();

        let album = tmp.path().join("album");
        fs::create_dir(&album).unwrap();
        fs::write(album.join("local.jpg"), b"x").unwrap();

        let listing = scan::scan_dir(&album).unwrap();
        let cover = resolve(&album, &listing).unwrap().unwrap();
        assert_eq!(cover.file_name().unwrap(), "local.jpg");
    }
}
