//! # packrs Temporary Archive Files
//!
//! File: cli/src/common/fs/temp.rs
//!
//! ## Overview
//!
//! Both pipeline flows pass data through an intermediate tar file on disk: the
//! compress flow bundles a directory next to itself, the extract flow writes the
//! decompressed payload into the target directory. This module creates those
//! files.
//!
//! Each file is a `tempfile::NamedTempFile` named `<stem>.<random>.tar`:
//! - the random part keeps two concurrent runs on the same source apart,
//! - dropping the handle deletes the file, on error paths too,
//! - `NamedTempFile::persist` renames it into its final place instead,
//! - on unix the file gets the usual umask-derived mode rather than 0600.
//!
//! ```rust
//! use crate::common::fs::temp;
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let scratch = temp::create_temp_archive(Path::new("./dest"), "temp")?;
//! // ... write to scratch.path() ...
//! scratch.close()?; // or scratch.persist("./dest/notes")
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// Creates an empty `<stem>.<random>.tar` file inside `dir`.
///
/// # Errors
///
/// Returns an `Err` if `dir` does not exist or is not writable.
pub fn create_temp_archive(dir: &Path, stem: &str) -> Result<NamedTempFile> {
    let prefix = format!("{stem}.");
    let mut builder = Builder::new();
    builder.prefix(&prefix).suffix(".tar");
    // 0666 before the umask, like any other new file. A file recovered
    // through `persist` keeps this mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let file = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary archive in {:?}", dir))?;
    debug!("Created temporary archive {:?}", file.path());
    Ok(file)
}
