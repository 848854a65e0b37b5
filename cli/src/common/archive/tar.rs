//! # packrs TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module bundles a directory tree into an uncompressed tar file and
//! unbundles such a file back into a directory. Compression is a separate step
//! (see `common::archive::compression`).
//!
//! ## Architecture
//!
//! - **`bundle`** walks the source directory with `walkdir` (sorted by file
//!   name, symlinks not followed) and appends every entry under a name rooted
//!   at the directory's own base name: bundling `/home/me/project` yields
//!   `project`, `project/a.txt`, `project/sub`, `project/sub/b.txt`. Extracting
//!   elsewhere therefore recreates a `project/` directory.
//! - **`unbundle`** first scans every header of the stream. Only when the whole
//!   stream parses does it extract anything, so a payload that is not a tar
//!   stream leaves the output directory untouched and is reported as
//!   `UnbundleStatus::NotAnArchive` rather than as an error.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::tar::{self, UnbundleStatus};
//! use std::path::Path;
//!
//! # fn main() -> crate::core::error::Result<()> {
//! let entries = tar::bundle(Path::new("./project"), Path::new("./project.tar"))?;
//! match tar::unbundle(Path::new("./project.tar"), Path::new("./restore"))? {
//!     UnbundleStatus::Extracted { entries } => println!("{entries} entries restored"),
//!     UnbundleStatus::NotAnArchive { reason } => println!("not a tar file: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{PackrsError, Result};
use anyhow::Context;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Result of trying to unbundle a file that may or may not be a tar stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnbundleStatus {
    /// The stream was a valid archive and all `entries` were written out.
    Extracted { entries: usize },
    /// The bytes are not a tar stream. Nothing was written.
    NotAnArchive { reason: String },
}

/// # Bundle Directory (`bundle`)
///
/// Writes an uncompressed tar archive of `source_dir` to `archive_out`,
/// replacing any existing file there.
///
/// Entries are named relative to the *parent* of `source_dir`, so the archive
/// has a single top-level entry equal to the directory's base name. Directories
/// are always emitted before their contents and siblings are sorted by name,
/// which keeps the output deterministic across runs.
///
/// ## Arguments
///
/// * `source_dir` - Directory to bundle. Must have a base name (not `/`); pass a
///   canonicalized path when the caller may hand in `.` or `..`.
/// * `archive_out` - Path of the tar file to create. It must not live inside
///   `source_dir`, or the archive would try to include itself.
///
/// ## Returns
///
/// * `Result<usize>` - Number of entries written, the root directory included.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - `source_dir` has no base name.
/// - The tree cannot be walked or a file cannot be read.
/// - The archive file cannot be created or flushed.
pub fn bundle(source_dir: &Path, archive_out: &Path) -> Result<usize> {
    let root_name = source_dir.file_name().ok_or_else(|| {
        PackrsError::FileSystem(format!(
            "Cannot bundle '{}': the path has no directory name",
            source_dir.display()
        ))
    })?;
    bundle_as(source_dir, root_name, archive_out)
}

/// Same as `bundle`, but roots every entry at `root_name` instead of the base
/// name of `source_dir`.
///
/// Used when `source_dir` is a resolved path whose last component differs from
/// the name the user gave, e.g. a symlink `alias -> real` bundled as `alias/`.
pub fn bundle_as(source_dir: &Path, root_name: &OsStr, archive_out: &Path) -> Result<usize> {
    let file = File::create(archive_out)
        .with_context(|| format!("Failed to create archive file {:?}", archive_out))?;
    let mut builder = tar::Builder::new(BufWriter::new(file));
    // Store symlinks as links instead of copying what they point at.
    builder.follow_symlinks(false);

    let mut entries = 0usize;
    for entry in WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to walk directory {:?}", source_dir))?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .with_context(|| format!("Entry {:?} escaped {:?}", entry.path(), source_dir))?;
        let name = if relative.as_os_str().is_empty() {
            PathBuf::from(root_name)
        } else {
            Path::new(root_name).join(relative)
        };

        debug!("Adding {:?} as {:?}", entry.path(), name);
        builder
            .append_path_with_name(entry.path(), &name)
            .with_context(|| format!("Failed to add {:?} to the tar archive", entry.path()))?;
        entries += 1;
    }

    let mut writer = builder
        .into_inner()
        .context("Failed to finalize tar archive structure")?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush archive file {:?}", archive_out))?;

    info!(
        "Bundled {} entries from {:?} into {:?}",
        entries, source_dir, archive_out
    );
    Ok(entries)
}

/// # Unbundle Archive (`unbundle`)
///
/// Extracts the tar file at `archive_path` into `output_dir`, preserving
/// relative paths. `output_dir` must already exist.
///
/// The stream is validated in a first pass over all headers. A checksum
/// mismatch, a truncated header block, or a stream without a single entry is
/// reported as `UnbundleStatus::NotAnArchive` and nothing is extracted.
///
/// ## Errors
///
/// Returns an `Err` only for genuine I/O failures: the archive cannot be
/// opened, or writing an extracted entry fails.
pub fn unbundle(archive_path: &Path, output_dir: &Path) -> Result<UnbundleStatus> {
    let entries = match count_entries(archive_path)? {
        Ok(0) => {
            return Ok(UnbundleStatus::NotAnArchive {
                reason: "stream contains no archive entries".to_string(),
            })
        }
        Ok(count) => count,
        Err(reason) => {
            debug!("{:?} is not a tar stream: {}", archive_path, reason);
            return Ok(UnbundleStatus::NotAnArchive { reason });
        }
    };

    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive {:?}", archive_path))?;
    let mut archive = tar::Archive::new(BufReader::new(file));
    archive
        .unpack(output_dir)
        .with_context(|| format!("Failed to extract {:?} into {:?}", archive_path, output_dir))?;

    info!(
        "Extracted {} entries from {:?} into {:?}",
        entries, archive_path, output_dir
    );
    Ok(UnbundleStatus::Extracted { entries })
}

/// Walks every header without extracting anything.
///
/// The outer `Result` carries I/O failures; the inner `Err` carries the reason
/// the stream is not a valid tar archive.
fn count_entries(archive_path: &Path) -> Result<std::result::Result<usize, String>> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive {:?}", archive_path))?;
    let mut archive = tar::Archive::new(BufReader::new(file));

    let entries = match archive.entries() {
        Ok(entries) => entries,
        Err(e) => return classify(archive_path, e),
    };
    let mut count = 0usize;
    for entry in entries {
        if let Err(e) = entry {
            return classify(archive_path, e);
        }
        count += 1;
    }
    Ok(Ok(count))
}

/// The tar crate reports malformed headers as `Other`, `InvalidData` or
/// `UnexpectedEof`; anything else is a real I/O failure.
fn classify(archive_path: &Path, e: io::Error) -> Result<std::result::Result<usize, String>> {
    match e.kind() {
        io::ErrorKind::Other | io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            Ok(Err(e.to_string()))
        }
        _ => Err(e).with_context(|| format!("Failed to read archive {:?}", archive_path)),
    }
}
