//! core/tags/write.rs
//! Rewrite the tag on a scratch copy so the player sees exactly what it
//! expects, based on the `TrackTags` read from the source file.
//!
//! Semantics (one pass, one disk write):
//! - performer tagged => TPE1 becomes the performer
//! - disc number tagged => TALB becomes `"<album> [<disc>]"` (the same string
//!   the destination path is keyed on, unsanitized; sanitization is a path
//!   concern only)
//! - comments and every embedded image are always stripped (the player
//!   chokes on files carrying several images)
//! - the resolved cover, if any, goes in as the single front-cover image
//! - the tag is written back as ID3v2.3, the only version the player reads

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike, Version};

use super::super::types::TrackTags;

/// Every cover we embed is a JPEG; the scanner admits nothing else.
const COVER_MIME: &str = "image/jpeg";

pub fn rewrite_for_export(path: &Path, tags: &TrackTags, cover: Option<&Path>) -> Result<()> {
    let mut tag = Tag::read_from_path(path)
        .with_context(|| format!("re-reading ID3 tag on copy \"{}\"", path.display()))?;

    if let Some(performer) = &tags.performer {
        tag.set_text("TPE1", performer.clone());
    }

    if tags.disc_no.is_some() {
        tag.set_text("TALB", tags.effective_album());
    }

    // TagLike::remove returns the removed frames; discard them.
    let _ = tag.remove("COMM");
    let _ = tag.remove("APIC");
    let _ = tag.remove("PIC");

    if let Some(cover) = cover {
        let data = fs::read(cover)
            .with_context(|| format!("reading cover image \"{}\"", cover.display()))?;

        let _ = tag.add_frame(Picture {
            mime_type: COVER_MIME.to_string(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data,
        });
    }

    tag.write_to_path(path, Version::Id3v23)
        .with_context(|| format!("writing rewritten tag to \"{}\"", path.display()))
}
