//! # packrs Extract Flow (`commands::unpack`)
//!
//! File: cli/src/commands/unpack.rs
//!
//! ## Overview
//!
//! Reverses `commands::pack`: decompresses a `.zst` / `.bz2` file into a target
//! directory and, when the payload is a tar bundle, unpacks it there.
//!
//! The compressed file does not record whether it came from a directory or a
//! single file, so the payload is always written to `temp.<random>.tar` in the
//! target directory and handed to `tar::unbundle`:
//!
//! - a valid bundle is extracted and the temporary file deleted
//!   (`ExtractOutcome::Unbundled`);
//! - anything else is the original single file, so the temporary file is
//!   renamed to `<target>/<source stem>` (`ExtractOutcome::RecoveredAsPlainFile`).
//!
//! ```bash
//! packrs -x project.bz2 ./restore   # -> ./restore/project/...
//! packrs -x notes.zst ./restore     # -> ./restore/notes
//! ```
//!
use crate::common::archive::{
    compression::Codec,
    tar::{self, UnbundleStatus},
};
use crate::common::fs::{io, temp};
use crate::common::ui::{self, Stopwatch};
use crate::core::error::{PackrsError, Result};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How the decompressed payload ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The payload was a tar bundle; `entries` were extracted into the target directory.
    Unbundled { entries: usize },
    /// The payload was a single file of `bytes` bytes, now stored at `path`.
    RecoveredAsPlainFile { path: PathBuf, bytes: usize },
}

/// # Handle Extract (`handle_unpack`)
///
/// Entry point for `--extract` mode. Runs `decompress_path`, prints where the
/// output went and, with `benchmark`, the elapsed time of the whole run.
pub fn handle_unpack(source: &Path, target_dir: &Path, benchmark: bool) -> Result<()> {
    info!("Extracting {:?} into {:?}", source, target_dir);
    let stopwatch = Stopwatch::start();

    match decompress_path(source, target_dir)? {
        ExtractOutcome::Unbundled { entries } => println!(
            "Extracted {} entries from {} into {}",
            entries,
            source.display(),
            target_dir.display()
        ),
        ExtractOutcome::RecoveredAsPlainFile { path, bytes } => println!(
            "Decompressed {} -> {} ({})",
            source.display(),
            path.display(),
            ui::format_bytes(bytes)
        ),
    }
    if benchmark {
        stopwatch.report("Extraction time");
    }
    Ok(())
}

/// # Decompress Path (`decompress_path`)
///
/// Decompresses `source` into `target_dir`, creating the directory if needed.
///
/// ## Errors
///
/// - `PackrsError::UnsupportedFormat` if `source` is not `.zst` / `.bz2`
///   (checked before anything is read or written).
/// - Corrupt compressed data, or any I/O failure.
///
/// A payload that is not a tar bundle is not an error; see `ExtractOutcome`.
/// The temporary file is deleted or renamed before this returns.
pub fn decompress_path(source: &Path, target_dir: &Path) -> Result<ExtractOutcome> {
    let codec = Codec::from_path(source)?;
    let stem = source.file_stem().ok_or_else(|| {
        PackrsError::FileSystem(format!("Cannot derive an output name from {:?}", source))
    })?;

    let data = io::read_file_bytes(source)?;
    let payload = codec.decompress(&data)?;
    debug!("Decompressed {} -> {} bytes with {}", data.len(), payload.len(), codec);

    io::ensure_dir_exists(target_dir)?;
    let mut scratch = temp::create_temp_archive(target_dir, "temp")?;
    scratch
        .write_all(&payload)
        .and_then(|()| scratch.flush())
        .with_context(|| format!("Failed to write temporary archive {:?}", scratch.path()))?;

    match tar::unbundle(scratch.path(), target_dir)? {
        UnbundleStatus::Extracted { entries } => {
            scratch
                .close()
                .context("Failed to remove temporary archive")?;
            Ok(ExtractOutcome::Unbundled { entries })
        }
        UnbundleStatus::NotAnArchive { reason } => {
            let path = target_dir.join(stem);
            info!("Payload is not a tar bundle ({}); saving it as {:?}", reason, path);
            scratch
                .persist(&path)
                .with_context(|| format!("Failed to move decompressed data to {:?}", path))?;
            Ok(ExtractOutcome::RecoveredAsPlainFile {
                path,
                bytes: payload.len(),
            })
        }
    }
}
