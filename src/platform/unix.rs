//! Unix (macOS, Linux) platform details.

use std::path::PathBuf;

pub const PRIVILEGED_ACCOUNT: &str = "root";

/// Always `/etc/hosts`; `SystemRoot` is a Windows concept and is ignored here.
pub fn hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
