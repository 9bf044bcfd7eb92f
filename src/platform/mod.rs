//! Platform abstraction for the hosts file location and editing.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::HostsResult;
use crate::hosts::{self, AddOutcome, RemoveOutcome};

/// Windows hosts path under a system root; `None` or empty falls back to `C:\Windows`.
pub fn hosts_path_from_system_root(system_root: Option<&str>) -> PathBuf {
    let root = match system_root {
        Some(r) if !r.is_empty() => r,
        _ => r"C:\Windows",
    };
    PathBuf::from(format!(r"{root}\System32\drivers\etc\hosts"))
}

/// Hosts file location for the running platform.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return unix::hosts_path();

    #[cfg(windows)]
    return windows::hosts_path();
}

/// Account the user must run as to edit the hosts file.
pub fn privileged_account() -> &'static str {
    #[cfg(unix)]
    return unix::PRIVILEGED_ACCOUNT;

    #[cfg(windows)]
    return windows::PRIVILEGED_ACCOUNT;
}

/// Trait for hosts file operations.
pub trait HostsEditor: Send + Sync {
    /// Ensure a line containing `entry` exists.
    fn add_entry(&self, entry: &str) -> HostsResult<AddOutcome>;
    /// Drop every line containing `entry`.
    fn remove_entry(&self, entry: &str) -> HostsResult<RemoveOutcome>;
    /// Check if any line contains `entry`.
    fn has_entry(&self, entry: &str) -> HostsResult<bool>;
    /// File this editor operates on.
    fn path(&self) -> &Path;
}

/// Editor for the hosts file the settings resolve to.
pub fn default_hosts_editor(settings: &Settings) -> Box<dyn HostsEditor> {
    Box::new(FileHostsEditor::new(&settings.hosts_file))
}

/// HostsEditor that reads/writes a file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsEditor {
    path: PathBuf,
}

impl FileHostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Editor for the platform hosts file.
    pub fn system() -> Self {
        Self::new(default_hosts_path())
    }
}

impl HostsEditor for FileHostsEditor {
    fn add_entry(&self, entry: &str) -> HostsResult<AddOutcome> {
        hosts::add_entry(entry, &self.path)
    }

    fn remove_entry(&self, entry: &str) -> HostsResult<RemoveOutcome> {
        hosts::remove_entry(entry, &self.path)
    }

    fn has_entry(&self, entry: &str) -> HostsResult<bool> {
        hosts::try_entry_exists(entry, &self.path)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_root_default() {
        assert_eq!(
            hosts_path_from_system_root(None),
            PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts")
        );
        assert_eq!(
            hosts_path_from_system_root(Some("")),
            PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts")
        );
    }

    #[test]
    fn system_root_override() {
        assert_eq!(
            hosts_path_from_system_root(Some(r"D:\WINNT")),
            PathBuf::from(r"D:\WINNT\System32\drivers\etc\hosts")
        );
    }

    #[cfg(unix)]
    #[test]
    fn unix_default_is_etc_hosts() {
        assert_eq!(default_hosts_path(), PathBuf::from("/etc/hosts"));
        assert_eq!(privileged_account(), "root");
    }
}
