//! core/tags/mod.rs
//!
//! ID3 tag read/write.
//! Public API:
//! - [`read_track_tags`] reads the fields a relocation depends on.
//! - [`rewrite_for_export`] rewrites a scratch copy for the player.

mod read;
mod util;
mod write;

pub use read::read_track_tags;
pub use write::rewrite_for_export;
