//! # packrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The two operations `main.rs` dispatches to. Each module exposes a
//! `handle_*` entry point (configuration, printing, timing) on top of a plain
//! function that does the work and returns a typed result, which is what the
//! unit tests exercise.
//!
//! - `pack`: file or directory -> `.zst` / `.bz2` (default mode)
//! - `unpack`: `.zst` / `.bz2` -> target directory (`--extract`)
//!

/// Compress flow: bundle (directories only), compress, write.
pub mod pack;
/// Extract flow: decompress, then unbundle or recover the single file.
pub mod unpack;
