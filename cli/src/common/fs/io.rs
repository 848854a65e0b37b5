//! # packrs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by both pipeline flows. Every helper
//! attaches the offending path to its error through `anyhow::Context`, so a
//! failure surfaces as e.g. `Failed to read file "notes.zst"` instead of a bare
//! `No such file or directory`.
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, but refuses a path that exists as a file.
//! - **`read_file_bytes`**: reads a whole file into memory.
//! - **`write_bytes_to_file`**: creates parent directories, then writes the
//!   bytes, replacing any existing file.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! io::ensure_dir_exists(Path::new("./restore"))?;
//! let data = io::read_file_bytes(Path::new("./notes.txt"))?;
//! io::write_bytes_to_file(Path::new("./out/notes.copy"), &data)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{PackrsError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates it, including any
/// necessary parent directories. If the path exists but is not a directory,
/// `PackrsError::FileSystem` is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(PackrsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into memory.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read,
/// with context indicating which file failed.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).with_context(|| format!("Failed to read file {:?}", path))?;
    debug!("Read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Writes `content` to `path`, overwriting any existing file.
///
/// The parent directory is created first if needed. The write is not atomic:
/// a failure part-way through can leave a truncated file behind.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, disk full).
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    // A bare file name has an empty parent, which needs no creating.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
