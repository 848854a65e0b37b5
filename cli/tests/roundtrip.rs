//! # packrs CLI Round-Trip Integration Tests
//!
//! File: cli/tests/roundtrip.rs
//!
//! ## Overview
//!
//! Drives the binary through full compress/extract cycles: directories and
//! single files, both codecs, unsupported extensions, temporary file cleanup,
//! `--benchmark` output and configuration-driven levels.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// `project/` -> `out.bz2` -> `dest/project/...`
#[test]
fn test_directory_roundtrip_bz2() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    sample_project(dir.path());

    packrs_cmd(dir.path())
        .args(["project", "out.bz2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed project -> out.bz2"));

    // The temporary bundle next to the source is gone.
    assert_eq!(names_in(dir.path()), [".git", "out.bz2", "project"]);

    packrs_cmd(dir.path())
        .args(["--extract", "out.bz2", "dest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 4 entries"));

    let dest = dir.path().join("dest");
    assert_eq!(fs::read_to_string(dest.join("project/a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(dest.join("project/sub/b.txt")).unwrap(), "world");
    assert_eq!(names_in(&dest), ["project"]);
}

#[test]
fn test_directory_roundtrip_zst() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    sample_project(dir.path());

    packrs_cmd(dir.path()).args(["project", "out.zst"]).assert().success();
    packrs_cmd(dir.path()).args(["-x", "out.zst", "dest"]).assert().success();

    let dest = dir.path().join("dest");
    assert_eq!(fs::read_to_string(dest.join("project/a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(dest.join("project/sub/b.txt")).unwrap(), "world");
}

/// `notes.txt` -> `notes.zst` -> `dest/notes`, no directory wrapper.
#[test]
fn test_single_file_roundtrip_zst() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();

    packrs_cmd(dir.path()).args(["notes.txt", "notes.zst"]).assert().success();
    packrs_cmd(dir.path())
        .args(["-x", "notes.zst", "dest"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error").not());

    let dest = dir.path().join("dest");
    assert_eq!(fs::read_to_string(dest.join("notes")).unwrap(), "draft");
    assert_eq!(names_in(&dest), ["notes"]);
}

#[test]
fn test_single_file_roundtrip_bz2() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    let content: Vec<u8> = (0..10_000u32).map(|i| (i % 7) as u8).collect();
    fs::write(dir.path().join("data.bin"), &content).unwrap();

    packrs_cmd(dir.path()).args(["data.bin", "data.bz2"]).assert().success();
    packrs_cmd(dir.path()).args(["-x", "data.bz2", "dest"]).assert().success();

    assert_eq!(fs::read(dir.path().join("dest/data")).unwrap(), content);
}

#[test]
fn test_unsupported_extension_on_compress() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    sample_project(dir.path());

    packrs_cmd(dir.path())
        .args(["project", "x.unknown"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported format 'unknown'"));

    assert_eq!(names_in(dir.path()), [".git", "project"]);
}

#[test]
fn test_unsupported_extension_on_extract() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("x.unknown"), "payload").unwrap();

    packrs_cmd(dir.path())
        .args(["-x", "x.unknown", "dest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format 'unknown'"));

    assert!(!dir.path().join("dest").exists());
}

#[test]
fn test_benchmark_reports_two_decimal_seconds() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();

    packrs_cmd(dir.path())
        .args(["-b", "notes.txt", "notes.zst"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Compression time: \d+\.\d{2} s").unwrap());

    packrs_cmd(dir.path())
        .args(["-x", "--benchmark", "notes.zst", "dest"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Extraction time: \d+\.\d{2} s").unwrap());
}

#[test]
fn test_no_benchmark_output_by_default() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();

    packrs_cmd(dir.path())
        .args(["notes.txt", "notes.zst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time:").not());
}

#[test]
fn test_level_flag_and_validation() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();

    packrs_cmd(dir.path())
        .args(["--level", "19", "notes.txt", "notes.zst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zstd level 19"));

    packrs_cmd(dir.path())
        .args(["--level", "10", "notes.txt", "notes.bz2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bzip2 compression level 10"));
    assert!(!dir.path().join("notes.bz2").exists());
}

#[test]
fn test_project_config_sets_default_level() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();
    fs::write(
        dir.path().join(".packrs.toml"),
        "[compression]\nbzip2_level = 4\n",
    )
    .unwrap();

    packrs_cmd(dir.path())
        .args(["notes.txt", "notes.bz2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bzip2 level 4"));
}

#[test]
fn test_invalid_project_config_is_reported() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();
    fs::write(
        dir.path().join(".packrs.toml"),
        "[compression]\nzstd_level = 40\n",
    )
    .unwrap();

    packrs_cmd(dir.path())
        .args(["notes.txt", "notes.zst"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zstd_level = 40 is out of range"));
}

/// Configuration only holds compression levels, so extraction never reads it.
#[test]
fn test_extract_ignores_compression_config() {
    let dir = tempdir().unwrap();
    fence_config_search(dir.path());
    fs::write(dir.path().join("notes.txt"), "draft").unwrap();
    packrs_cmd(dir.path())
        .args(["notes.txt", "notes.zst"])
        .assert()
        .success();

    fs::write(
        dir.path().join(".packrs.toml"),
        "[compression]\nzstd_level = 40\n",
    )
    .unwrap();

    packrs_cmd(dir.path())
        .args(["-x", "notes.zst", "dest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 B)"));
    assert_eq!(
        fs::read_to_string(dir.path().join("dest/notes")).unwrap(),
        "draft"
    );
}
