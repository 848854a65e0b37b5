//! # packrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by both pipeline flows:
//! - `config`: layered TOML configuration (default compression levels)
//! - `error`: the `PackrsError` enum and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PackrsError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
