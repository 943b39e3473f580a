//! core/types.rs
//! Data shared across the pipeline.
//!
//! Rule of thumb:
//! - These structs should be boring bags of data
//! - No filesystem code
//! - No tag parsing code
//!
//! `TrackTags` represents the metadata we need from ONE mp3 in order to place
//! it in the destination tree and rewrite its tags on the way there.

use std::path::PathBuf;

/// Run-wide settings, built once in `main` and passed into the driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the destination library tree (`<artist>/<album>/<NN - title>.mp3`
    /// is created under this).
    pub dest_root: PathBuf,

    /// Scratch directory holding the working copy of the file currently being
    /// rewritten. Owned (and cleaned up) by the caller, not by the driver.
    pub scratch: PathBuf,
}

/// The tags one relocated file is derived from.
///
/// Title/album/artist are empty strings when the frame is missing; the track
/// number is required (a file without one cannot be named in the destination
/// tree and fails the read).
#[derive(Debug, Clone)]
pub struct TrackTags {
    /// TPOS. `None` when the frame is absent or zero.
    pub disc_no: Option<u32>,

    /// TRCK. Zero-padded into the destination filename.
    pub track_no: u32,

    /// TIT2
    pub title: String,

    /// TALB
    pub album: String,

    /// TPE1
    pub artist: String,

    /// TPE2 ("band/orchestra"). When present it replaces the artist both in
    /// the destination path and in the rewritten tag.
    pub performer: Option<String>,
}

impl TrackTags {
    /// The artist the destination tree is keyed on: performer if tagged,
    /// otherwise the plain artist.
    pub fn effective_artist(&self) -> &str {
        self.performer.as_deref().unwrap_or(&self.artist)
    }

    /// The album the destination tree is keyed on: `"<album> [<disc>]"` for
    /// multi-disc rips, so disc 2 doesn't collide with disc 1.
    pub fn effective_album(&self) -> String {
        match self.disc_no {
            Some(disc) => format!("{} [{}]", self.album, disc),
            None => self.album.clone(),
        }
    }
}

/// Counters reported once at the end of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Files copied, rewritten, and moved into the destination tree.
    pub relocated: usize,

    /// Files skipped because their destination already existed.
    pub skipped: usize,
}
