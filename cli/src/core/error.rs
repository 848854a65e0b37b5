//! # packrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout packrs. Domain failures
//! that callers may want to match on are variants of `PackrsError`; everything
//! else (plain I/O failures) travels as an `anyhow::Error` with context naming
//! the path involved.
//!
//! ## Architecture
//!
//! - `PackrsError`: a `thiserror` enum for the specific, user-facing failures
//! - `Result<T>`: an alias for `anyhow::Result<T>`
//!
//! A payload that turns out not to be a tar stream is *not* an error; the
//! archive layer reports it as `UnbundleStatus::NotAnArchive` instead.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! return Err(PackrsError::UnsupportedFormat { extension: "gz".into() }.into());
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<PackrsError>(), Some(PackrsError::UnsupportedFormat { .. })) => {
//!         eprintln!("Use .zst or .bz2");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for packrs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PackrsError {
    #[error("Unsupported format '{extension}'. Use .zst or .bz2")]
    UnsupportedFormat { extension: String },

    #[error("Invalid {codec} compression level {level}: expected {min}..={max}")]
    InvalidLevel {
        codec: &'static str,
        level: i32,
        min: i32,
        max: i32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
