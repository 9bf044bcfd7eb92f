//! Hosts file read/write.
//!
//! Entries are opaque lines matched by substring. Adding appends one line
//! (after making sure the file ends with a newline); removing drops every
//! line containing the entry and replaces the file in one rename.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::alert;
use crate::error::{HostsError, HostsResult};

/// Result of [`add_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    /// Entry text was empty; nothing done.
    Skipped,
}

/// Result of [`remove_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { count: usize },
    NotPresent,
    /// Entry text was empty; nothing done.
    Skipped,
}

fn line_matches(line: &[u8], entry: &str) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).contains(entry)
}

/// Lines without their `\n`. A final newline does not start an extra empty line.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|b| *b == b'\n').collect()
}

fn read_err(path: &Path) -> impl FnOnce(std::io::Error) -> HostsError {
    let path = path.to_path_buf();
    move |source| HostsError::Read { path, source }
}

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> HostsError {
    let path = path.to_path_buf();
    move |source| HostsError::Write { path, source }
}

/// Scan `path` line by line for `entry`.
pub fn try_entry_exists(entry: &str, path: &Path) -> HostsResult<bool> {
    let file = File::open(path).map_err(read_err(path))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).map_err(read_err(path))?;
        if n == 0 {
            return Ok(false);
        }
        let text = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        if line_matches(text, entry) {
            return Ok(true);
        }
    }
}

/// Like [`try_entry_exists`], but an unreadable file is logged and reported as absent.
pub fn entry_exists(entry: &str, path: &Path) -> bool {
    match try_entry_exists(entry, path) {
        Ok(found) => found,
        Err(e) => {
            report(&e);
            false
        }
    }
}

/// Append `entry` as a new last line unless some line already contains it.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn add_entry(entry: &str, path: &Path) -> HostsResult<AddOutcome> {
    if entry.is_empty() {
        return Ok(AddOutcome::Skipped);
    }
    if try_entry_exists(entry, path)? {
        return Ok(AddOutcome::AlreadyPresent);
    }

    let content = fs::read(path).map_err(read_err(path))?;
    let mut line = Vec::with_capacity(entry.len() + 2);
    if content.last().is_some_and(|b| *b != b'\n') {
        debug!("hosts file lacks trailing newline");
        line.push(b'\n');
    }
    line.extend_from_slice(entry.as_bytes());
    line.push(b'\n');

    // Never create the file: it belongs to the OS.
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err(path))?;
    file.write_all(&line).map_err(write_err(path))?;
    file.flush().map_err(write_err(path))?;
    Ok(AddOutcome::Added)
}

/// Drop every line containing `entry`; remaining lines keep their order and
/// each ends with a newline.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn remove_entry(entry: &str, path: &Path) -> HostsResult<RemoveOutcome> {
    if entry.is_empty() {
        return Ok(RemoveOutcome::Skipped);
    }
    let content = fs::read(path).map_err(read_err(path))?;

    let mut kept = Vec::with_capacity(content.len() + 1);
    let mut count = 0;
    for line in split_lines(&content) {
        if line_matches(line, entry) {
            count += 1;
            continue;
        }
        kept.extend_from_slice(line);
        kept.push(b'\n');
    }
    debug!(removed = count, "filtered hosts lines");

    if kept != content {
        replace_contents(path, &kept)?;
    }
    Ok(if count == 0 {
        RemoveOutcome::NotPresent
    } else {
        RemoveOutcome::Removed { count }
    })
}

/// Swap `path` for a file holding `contents`: write a sibling temp file, then rename it over.
///
/// Symlinks are followed so the rename lands on the real file, not the link.
fn replace_contents(path: &Path, contents: &[u8]) -> HostsResult<()> {
    let target = fs::canonicalize(path).map_err(read_err(path))?;
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let perms = fs::metadata(&target).map_err(read_err(path))?.permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err(path))?;
    tmp.write_all(contents).map_err(write_err(path))?;
    tmp.as_file().sync_all().map_err(write_err(path))?;
    tmp.as_file()
        .set_permissions(perms)
        .map_err(write_err(path))?;

    match tmp.persist(&target) {
        Ok(_) => Ok(()),
        Err(e) if is_mount_point_error(&e.error) => {
            // A bind-mounted hosts file (containers) cannot be renamed over.
            warn!("cannot rename over hosts file ({}), rewriting in place", e.error);
            fs::write(&target, contents).map_err(write_err(path))
        }
        Err(e) => Err(HostsError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        }),
    }
}

fn is_mount_point_error(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::ResourceBusy | std::io::ErrorKind::CrossesDevices
    )
}

fn report(err: &HostsError) {
    error!("错误：{err}");
    alert::permission_alert(err.io_error());
}

/// Ensure `entry` is in the hosts file at `path`, logging the result. Never fails.
pub fn hosts_add(entry: &str, path: &Path) {
    if entry.is_empty() {
        return;
    }
    match add_entry(entry, path) {
        Ok(AddOutcome::Added) => info!("已添加到 hosts 文件: {entry}"),
        Ok(AddOutcome::AlreadyPresent) => info!("hosts 条目已经存在: {entry}"),
        Ok(AddOutcome::Skipped) => {}
        Err(e) => report(&e),
    }
}

/// Ensure no line of the hosts file at `path` contains `entry`, logging the result. Never fails.
pub fn hosts_rm(entry: &str, path: &Path) {
    if entry.is_empty() {
        return;
    }
    match remove_entry(entry, path) {
        Ok(RemoveOutcome::Removed { count }) => {
            info!(count, "已从 hosts 文件中删除: {entry}")
        }
        Ok(RemoveOutcome::NotPresent) => info!("hosts 文件中没有该条目: {entry}"),
        Ok(RemoveOutcome::Skipped) => {}
        Err(e) => report(&e),
    }
}
