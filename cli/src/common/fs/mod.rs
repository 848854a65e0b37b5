//! # packrs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the pack and unpack commands.
//!
//! - **`io`**: whole-file reads and writes, directory creation.
//! - **`temp`**: self-deleting temporary archive files.
//!
//! ```rust
//! use crate::common::fs::{io, temp};
//! ```
//!

/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `read_file_bytes`, `write_bytes_to_file`).
pub mod io;
/// Creates uniquely named, self-deleting temporary archive files.
pub mod temp;
