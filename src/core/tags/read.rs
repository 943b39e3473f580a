//! core/tags/read.rs
//! Read the ID3 tags a relocation depends on into a `TrackTags`.
//!
//! - A file whose tag can't be read at all fails the read (and the run).
//! - Missing text frames degrade to empty strings; the sanitizer and path
//!   join deal with those downstream.
//! - A missing track number is an error: there is no honest way to name the
//!   file in the destination tree without one.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use id3::frame::Content;
use id3::{Tag, TagLike};

use super::super::types::TrackTags;
use super::util::parse_slash_pair_u32;

pub fn read_track_tags(path: &Path) -> Result<TrackTags> {
    let tag = Tag::read_from_path(path)
        .with_context(|| format!("reading ID3 tag from \"{}\"", path.display()))?;

    // Numeric accessors first, free-text TRCK/TPOS as fallback.
    let track_no = tag
        .track()
        .or_else(|| parse_slash_pair_u32(text_frame(&tag, "TRCK").as_deref()))
        .ok_or_else(|| anyhow!("\"{}\" has no track number frame", path.display()))?;

    // Disc zero means "not a multi-disc rip"; treat it like an absent frame.
    let disc_no = tag
        .disc()
        .or_else(|| parse_slash_pair_u32(text_frame(&tag, "TPOS").as_deref()))
        .filter(|&d| d != 0);

    // An empty TPE2 would blank the artist everywhere; count it as absent.
    let performer = text_frame(&tag, "TPE2").filter(|s| !s.trim().is_empty());

    Ok(TrackTags {
        disc_no,
        track_no,
        title: tag.title().unwrap_or_default().to_string(),
        album: tag.album().unwrap_or_default().to_string(),
        artist: tag.artist().unwrap_or_default().to_string(),
        performer,
    })
}

/// Get a best-effort string value from a frame id.
/// Some frames that are "text-ish" may not be Content::Text.
fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}
