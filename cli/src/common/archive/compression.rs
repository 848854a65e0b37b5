//! # packrs Compression Codecs (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! This module maps a file extension to a compression codec and provides the
//! in-memory compress/decompress pair for each one. The codec is chosen purely
//! from the extension of the compressed file; no magic bytes are inspected.
//!
//! | Extension | Codec       | Default level | Levels   | Trade-off          |
//! |-----------|-------------|---------------|----------|--------------------|
//! | `.zst`    | Zstandard   | 3             | 1..=22   | speed over ratio   |
//! | `.bz2`    | bzip2       | 9             | 1..=9    | ratio over speed   |
//!
//! `.zst` output is a genuine Zstandard frame and can be read by the `zstd`
//! command-line tool (and vice versa).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::compression::Codec;
//! use std::path::Path;
//!
//! # fn main() -> crate::core::error::Result<()> {
//! let codec = Codec::from_path(Path::new("backup.zst"))?;
//! let level = codec.resolve_level(None)?; // 3
//! let packed = codec.compress(b"Some data to compress", level)?;
//! assert_eq!(codec.decompress(&packed)?, b"Some data to compress");
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{PackrsError, Result};
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::RangeInclusive;
use std::path::Path;

/// Compression codec, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Zstandard (`.zst`). Fast, general-purpose.
    Zstd,
    /// bzip2 (`.bz2`). Slower, higher ratio.
    Bzip2,
}

impl Codec {
    /// Every supported codec.
    pub const ALL: [Codec; 2] = [Codec::Zstd, Codec::Bzip2];

    /// Looks up the codec for an extension given without the leading dot.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// `PackrsError::UnsupportedFormat` for anything other than `zst` or `bz2`.
    pub fn from_extension(extension: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.extension() == extension)
            .ok_or_else(|| {
                PackrsError::UnsupportedFormat {
                    extension: extension.to_string(),
                }
                .into()
            })
    }

    /// Looks up the codec from the last extension of `path` (`a.tar.bz2` -> `bz2`).
    ///
    /// A path without an extension is rejected as an unsupported (empty) format.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    /// File extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zstd => "zst",
            Self::Bzip2 => "bz2",
        }
    }

    /// Human-readable codec name, also used as the configuration key prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zstd => "zstd",
            Self::Bzip2 => "bzip2",
        }
    }

    pub const fn default_level(self) -> i32 {
        match self {
            Self::Zstd => 3,
            Self::Bzip2 => 9,
        }
    }

    pub const fn level_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Zstd => 1..=22,
            Self::Bzip2 => 1..=9,
        }
    }

    /// Picks `level` if given, otherwise the codec default, and checks it is in range.
    ///
    /// # Errors
    ///
    /// `PackrsError::InvalidLevel` when the level is outside `level_range()`.
    pub fn resolve_level(self, level: Option<i32>) -> Result<i32> {
        let level = level.unwrap_or_else(|| self.default_level());
        let range = self.level_range();
        if !range.contains(&level) {
            return Err(PackrsError::InvalidLevel {
                codec: self.name(),
                level,
                min: *range.start(),
                max: *range.end(),
            }
            .into());
        }
        Ok(level)
    }

    /// Compresses `data` in memory at `level`.
    ///
    /// The level is not re-validated here; callers go through `resolve_level`.
    pub fn compress(self, data: &[u8], level: i32) -> Result<Vec<u8>> {
        match self {
            Self::Zstd => zstd::encode_all(data, level)
                .with_context(|| format!("Failed to compress {} bytes with zstd", data.len())),
            Self::Bzip2 => {
                // Levels are range-checked to 1..=9 so the cast cannot wrap.
                let compression = bzip2::Compression::new(level.max(1) as u32);
                let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), compression);
                encoder
                    .write_all(data)
                    .and_then(|()| encoder.finish())
                    .with_context(|| format!("Failed to compress {} bytes with bzip2", data.len()))
            }
        }
    }

    /// Decompresses a whole in-memory blob. No level is needed.
    ///
    /// bzip2 input may consist of several concatenated streams.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Zstd => zstd::decode_all(data).context("Failed to decompress zstd data"),
            Self::Bzip2 => {
                let mut decoder = bzip2::read::MultiBzDecoder::new(data);
                let mut out = Vec::new();
                decoder
                    .read_to_end(&mut out)
                    .context("Failed to decompress bzip2 data")?;
                Ok(out)
            }
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
