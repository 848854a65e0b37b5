//! # packrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers in `commands::`. Nothing
//! in here knows about the pipeline as a whole; each submodule covers one
//! concern:
//!
//! - **`archive`**: tar bundling (`tar`) and the `.zst` / `.bz2` codecs (`compression`).
//! - **`fs`**: whole-file I/O helpers and temporary archive files.
//! - **`ui`**: the benchmark stopwatch and human-readable sizes.
//!

/// Tar bundling and compression codecs.
pub mod archive;
/// Filesystem helpers (I/O, temporary archive files).
pub mod fs;
/// Stdout formatting: benchmark timer, byte counts.
pub mod ui;
