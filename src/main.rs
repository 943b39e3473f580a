//! walkport
//!
//! # What this program is
//! A command-line tool that readies MP3 folders for a portable player.
//! It walks the given directories and pairs each folder of `.mp3` files with
//! a cover image found alongside them (or one level up). Working copies get
//! that cover embedded and their tags cleaned up, and land in the destination
//! tree as `<artist>/<album>/<NN> - <title>.mp3`.
//!
//! # What a run does
//! - Each directory argument is checked first; unusable ones are skipped
//!   with a warning.
//! - Usable trees are walked depth-first. Per directory: partition the
//!   entries, pick a cover, process every mp3, then recurse.
//! - Source files are never modified. Each one is copied into a scratch
//!   directory, rewritten there, and moved into the destination.
//! - A file whose destination path already exists is skipped.
//!
//! # Exit codes
//! - 0: run completed (skips included)
//! - 1: no directories given, or a file failed mid-run
//! - 2: destination missing or not writable, or no scratch directory could
//!   be made

mod core;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tempfile::TempDir;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::types::{Config, RunStats};

/// Where processed files land when `--dest` is not given. This is the mount
/// point the player shows up at on a typical Linux desktop.
const DEFAULT_DEST: &str = "/media/WALKMAN/MUSIC";

#[derive(Parser)]
#[command(name = "walkport")]
#[command(about = "Embed cover art and file MP3s into a player's music tree", long_about = None)]
#[command(version)]
struct Cli {
    /// Directories to scan for MP3 files
    dirs: Vec<PathBuf>,

    /// Music root to relocate processed files into
    #[arg(long, default_value = DEFAULT_DEST)]
    dest: PathBuf,
}

fn main() -> ExitCode {
    // Log level comes from RUST_LOG when set, `info` otherwise. Per-file
    // relocation lines sit at `debug`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.dirs.is_empty() {
        error!("No directories given, nothing to do");
        return ExitCode::from(1);
    }

    if !crate::core::dir_is_writable(&cli.dest) {
        error!(
            "Destination \"{}\" is not a directory, or cannot be written to",
            cli.dest.display()
        );
        return ExitCode::from(2);
    }

    // Scratch copies live in a temp directory that is removed when this
    // guard drops, even on the error paths below.
    let scratch = match TempDir::new() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Could not create a scratch directory: {e}");
            return ExitCode::from(2);
        }
    };

    let config = Config {
        dest_root: cli.dest,
        scratch: scratch.path().to_path_buf(),
    };

    let mut stats = RunStats::default();
    for dir in &cli.dirs {
        if !crate::core::dir_is_usable(dir) {
            warn!(
                "Source \"{}\" is not a directory, or cannot be accessed: skipping",
                dir.display()
            );
            continue;
        }

        if let Err(e) = crate::core::process_tree(&config, dir, &mut stats) {
            error!("{e:#}");
            return ExitCode::from(1);
        }
    }

    info!("Done: {} relocated, {} skipped", stats.relocated, stats.skipped);
    ExitCode::SUCCESS
}
