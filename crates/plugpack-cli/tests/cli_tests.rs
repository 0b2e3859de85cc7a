//! Integration tests for plugpack-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn plugpack_cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("plugpack");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn archive_entries(path: &Path) -> BTreeSet<String> {
    let archive = zip::ZipArchive::new(File::open(path).expect("archive should exist"))
        .expect("archive should be a valid ZIP");
    archive.file_names().map(str::to_string).collect()
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    plugpack_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugpack"));
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    plugpack_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OnlyDys"));

    // --help must not package anything
    assert!(!temp.path().join("deploy").exists());
}

#[test]
fn test_rejects_arguments() {
    let temp = TempDir::new().unwrap();
    plugpack_cmd(temp.path()).arg("somewhere").assert().failure();
}

#[test]
fn test_packages_current_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/config"), "[core]").unwrap();
    fs::create_dir(root.join("__pycache__")).unwrap();
    fs::write(root.join("__pycache__/x.pyc"), "pyc").unwrap();
    fs::create_dir(root.join("deploy")).unwrap();

    plugpack_cmd(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating deploy/OnlyDys.plugin..."))
        .stdout(predicate::str::contains("  Adding: a.txt"))
        .stdout(predicate::str::contains("Successfully created deploy/OnlyDys.plugin"))
        .stdout(predicate::str::contains("OnlyOffice Desktop Editors"))
        .stdout(predicate::str::contains(".git").not())
        .stdout(predicate::str::contains("x.pyc").not());

    assert_eq!(
        archive_entries(&root.join("deploy/OnlyDys.plugin")),
        BTreeSet::from(["a.txt".to_string()])
    );
}

#[test]
fn test_lists_nested_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(root.join("scripts/code.js"), "code").unwrap();

    plugpack_cmd(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("  Adding: scripts/code.js"));
}

#[test]
fn test_empty_plugin_produces_empty_archive() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package_plugin.py"), "import zipfile").unwrap();

    plugpack_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding:").not());

    assert!(archive_entries(&temp.path().join("deploy/OnlyDys.plugin")).is_empty());
}

#[test]
fn test_creates_output_directory_with_single_archive() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), "<html/>").unwrap();

    plugpack_cmd(temp.path()).assert().success();
    plugpack_cmd(temp.path()).assert().success();

    let deploy: Vec<_> = fs::read_dir(temp.path().join("deploy"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(deploy, vec!["OnlyDys.plugin"]);
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    // A file where the output directory should be
    fs::write(temp.path().join("deploy"), "not a directory").unwrap();

    plugpack_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::create_dir(temp.path().join(".vscode")).unwrap();

    plugpack_cmd(temp.path())
        .env("RUST_LOG", "plugpack_core=debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("pruning excluded directory"))
        .stdout(predicate::str::contains("pruning").not());
}

#[test]
fn test_default_run_keeps_stderr_clean() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), "<html></html>".repeat(64)).unwrap();

    plugpack_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Compression:"))
        .stdout(predicate::str::contains("Duration:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_closed_stdout_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    // A pipe with no reader makes every write to stdout fail
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);

    let status = std::process::Command::new(env!("CARGO_BIN_EXE_plugpack"))
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .stdout(writer)
        .stderr(std::process::Stdio::null())
        .status()
        .unwrap();

    assert!(!status.success());
}
