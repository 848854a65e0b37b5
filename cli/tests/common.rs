//! # packrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is
//! run inside a scratch directory with `HOME` and `XDG_CONFIG_HOME` pointed at
//! it, so neither a user `config.toml` nor a stray `.packrs.toml` on the host
//! can change the levels a test observes.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get packrs Command (`packrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `packrs` binary, running
/// in `workdir` with an isolated configuration environment.
///
/// ## Panics
/// Panics if the `packrs` binary cannot be found via `Command::cargo_bin`.
pub fn packrs_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("packrs").expect("Failed to find packrs binary for testing");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Marks `root` as a repository root so the project config search stops there.
pub fn fence_config_search(root: &Path) {
    fs::create_dir_all(root.join(".git")).expect("Failed to create .git marker");
}

/// Creates `project/a.txt` ("hello") and `project/sub/b.txt` ("world") under `base`.
pub fn sample_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    fs::create_dir_all(project.join("sub")).expect("Failed to create sample project");
    fs::write(project.join("a.txt"), "hello").expect("Failed to write a.txt");
    fs::write(project.join("sub/b.txt"), "world").expect("Failed to write b.txt");
    project
}

/// Sorted file names directly inside `dir`.
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|e| e.expect("Bad directory entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
