//! # packrs Compress Flow (`commands::pack`)
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! Compresses a file, or bundles and compresses a directory, into a single
//! `.zst` or `.bz2` file.
//!
//! ## Flow
//!
//! 1. Pick the codec from the target's extension and resolve the level
//!    (`--level`, then configuration, then the codec default). Unknown
//!    extensions and bad levels fail here, before anything touches the disk.
//! 2. A directory source is bundled into `<name>.<random>.tar` next to itself,
//!    read back into memory and the temporary file deleted. A regular file is
//!    read as-is.
//! 3. The bytes are compressed and written to the target, replacing any
//!    existing file.
//!
//! ```bash
//! packrs notes.txt notes.zst
//! packrs ./project project.bz2 --level 6 --benchmark
//! ```
//!
use crate::common::archive::{compression::Codec, tar};
use crate::common::fs::{io, temp};
use crate::common::ui::{self, Stopwatch};
use crate::core::config::{self, CompressionConfig};
use crate::core::error::{PackrsError, Result};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// What a successful compress run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    pub codec: Codec,
    pub level: i32,
    /// Size of the data fed to the codec (the tar bundle for directories).
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// Entries in the tar bundle, `None` when a single file was compressed.
    pub bundled_entries: Option<usize>,
}

/// # Handle Compress (`handle_pack`)
///
/// Entry point for the default (non `--extract`) mode: loads configuration,
/// runs `compress_path`, prints a summary and, with `benchmark`, the elapsed
/// time of the whole run.
pub fn handle_pack(source: &Path, target: &Path, level: Option<i32>, benchmark: bool) -> Result<()> {
    info!("Compressing {:?} into {:?}", source, target);
    let stopwatch = Stopwatch::start();

    let cfg = config::load_config()?;
    let report = compress_path(source, target, level, &cfg.compression)?;

    let bundled = report
        .bundled_entries
        .map(|n| format!("{n} entries, "))
        .unwrap_or_default();
    println!(
        "Compressed {} -> {} ({}{} -> {}, {} level {})",
        source.display(),
        target.display(),
        bundled,
        ui::format_bytes(report.input_bytes),
        ui::format_bytes(report.output_bytes),
        report.codec,
        report.level
    );
    if benchmark {
        stopwatch.report("Compression time");
    }
    Ok(())
}

/// # Compress Path (`compress_path`)
///
/// Compresses `source` (file or directory) into `target`.
///
/// ## Arguments
///
/// * `source` - Regular file or directory.
/// * `target` - Output file; its extension selects the codec.
/// * `level` - Explicit level, taking precedence over `defaults`.
/// * `defaults` - Configured per-codec levels.
///
/// ## Errors
///
/// - `PackrsError::UnsupportedFormat` if `target` is not `.zst` / `.bz2`.
/// - `PackrsError::InvalidLevel` if the level is out of range for the codec.
/// - Any I/O failure reading the source or writing the target.
///
/// No temporary bundle survives the call, whatever the outcome.
pub fn compress_path(
    source: &Path,
    target: &Path,
    level: Option<i32>,
    defaults: &CompressionConfig,
) -> Result<PackReport> {
    let codec = Codec::from_path(target)?;
    let level = codec.resolve_level(level.or_else(|| defaults.level_for(codec)))?;
    debug!("Using {} at level {}", codec, level);

    let (data, bundled_entries) = if source.is_dir() {
        let (data, entries) = bundle_into_memory(source)?;
        (data, Some(entries))
    } else {
        (io::read_file_bytes(source)?, None)
    };

    let compressed = codec.compress(&data, level)?;
    io::write_bytes_to_file(target, &compressed)?;

    Ok(PackReport {
        codec,
        level,
        input_bytes: data.len(),
        output_bytes: compressed.len(),
        bundled_entries,
    })
}

/// Bundles `source_dir` through a temporary tar file next to it and returns
/// the archive bytes with the entry count.
///
/// The bundle is rooted at the name the caller gave, so a symlinked source
/// `alias -> real` extracts as `alias/`. Only `.`/`..` and similar paths
/// without a final name fall back to the resolved directory's name.
fn bundle_into_memory(source_dir: &Path) -> Result<(Vec<u8>, usize)> {
    let resolved = source_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory {:?}", source_dir))?;
    let (parent, base_name) = match source_dir.file_name() {
        Some(name) => {
            let parent = match source_dir.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            (parent, name)
        }
        None => match (resolved.parent(), resolved.file_name()) {
            (Some(parent), Some(name)) => (parent, name),
            _ => anyhow::bail!(PackrsError::FileSystem(format!(
                "Cannot bundle {:?}: it has no parent directory to hold the temporary archive",
                resolved
            ))),
        },
    };

    let scratch = temp::create_temp_archive(parent, &base_name.to_string_lossy())?;
    let entries = tar::bundle_as(&resolved, base_name, scratch.path())?;
    let data = io::read_file_bytes(scratch.path())?;
    scratch
        .close()
        .context("Failed to remove temporary archive")?;
    Ok((data, entries))
}
