//! # packrs Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module groups the two format layers the pipeline is built from:
//!
//! - **`tar`**: bundles a directory into an uncompressed tar file and unbundles
//!   it again, reporting non-archive payloads as a status instead of an error.
//! - **`compression`**: the extension-keyed codecs (`.zst`, `.bz2`) that turn
//!   bytes into a compressed blob and back.
//!
//! The two layers never call each other; `commands::pack` and
//! `commands::unpack` chain them.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{compression::Codec, tar};
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! tar::bundle(Path::new("./site"), Path::new("./site.tar"))?;
//! let bytes = std::fs::read("./site.tar")?;
//! let packed = Codec::Bzip2.compress(&bytes, 9)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod tar;
