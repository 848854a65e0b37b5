//! # packrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional configuration that
//! tunes the default compression level of each codec. Nothing here is required:
//! with no configuration files present every codec uses its built-in default.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. The `--level` command-line flag (applied by the pack command, not here)
//! 2. Project-specific `.packrs.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Built-in codec defaults (`Codec::default_level`)
//!
//! The project search walks up from the current directory and stops at the
//! first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [compression]
//! zstd_level = 6
//! bzip2_level = 9
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let level = cfg.compression.level_for(Codec::Zstd); // Some(6)
//! ```
//!
use crate::common::archive::compression::Codec;
use crate::core::error::{PackrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub compression: CompressionConfig,
}

/// Per-codec default levels. `None` falls back to the codec's own default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompressionConfig {
    /// Default level for `.zst` output.
    pub zstd_level: Option<i32>,
    /// Default level for `.bz2` output.
    pub bzip2_level: Option<i32>,
}

impl CompressionConfig {
    /// Configured level for `codec`, if any.
    pub fn level_for(&self, codec: Codec) -> Option<i32> {
        match codec {
            Codec::Zstd => self.zstd_level,
            Codec::Bzip2 => self.bzip2_level,
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".packrs.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Packrs", "packrs") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.packrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    Config {
        compression: CompressionConfig {
            zstd_level: project_cfg
                .compression
                .zstd_level
                .or(user.compression.zstd_level),
            bzip2_level: project_cfg
                .compression
                .bzip2_level
                .or(user.compression.bzip2_level),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    for codec in Codec::ALL {
        let Some(level) = config.compression.level_for(codec) else {
            continue;
        };
        let range = codec.level_range();
        if !range.contains(&level) {
            return Err(anyhow!(PackrsError::Config(format!(
                "{}_level = {} is out of range ({}..={}).",
                codec.name(),
                level,
                range.start(),
                range.end()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
