//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for use as HOSTSCTL_HOME and hosts file location.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostsctl_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a hosts file with `content` inside `dir`.
pub fn hosts_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    std::fs::write(&path, content).unwrap();
    path
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
