//! Doctor command: health checks for the hosts file.

use std::fs::OpenOptions;

use crate::alert;
use crate::config::Settings;
use crate::hosts;

/// Result of a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub ok: bool,
    pub message: String,
}

impl CheckResult {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Run all doctor checks.
pub fn run_checks(settings: &Settings) -> Vec<CheckResult> {
    let mut results = Vec::new();
    let path = &settings.hosts_file;

    // 1. File exists
    if !path.is_file() {
        results.push(CheckResult::fail(format!(
            "Hosts file {} not found.",
            path.display()
        )));
        return results;
    }
    results.push(CheckResult::pass(format!("Hosts file: {}", path.display())));

    // 2. Readable
    let content = match std::fs::read(path) {
        Ok(c) => {
            results.push(CheckResult::pass("Hosts file readable"));
            c
        }
        Err(e) => {
            results.push(CheckResult::fail(format!("Cannot read hosts file: {e}")));
            if alert::is_permission_error(&e.to_string()) {
                results.push(CheckResult::fail(alert::permission_hint()));
            }
            return results;
        }
    };

    // 3. Writable (open for append, write nothing)
    match OpenOptions::new().append(true).open(path) {
        Ok(_) => results.push(CheckResult::pass("Hosts file writable")),
        Err(e) => {
            results.push(CheckResult::fail(format!("Cannot write hosts file: {e}")));
            if alert::is_permission_error(&e.to_string()) {
                results.push(CheckResult::fail(alert::permission_hint()));
            }
        }
    }

    // 4. Trailing newline
    if content.last().is_some_and(|b| *b != b'\n') {
        results.push(CheckResult::pass(
            "Hosts file does not end with a newline (add will append one)",
        ));
    } else {
        results.push(CheckResult::pass("Hosts file ends with a newline"));
    }

    // 5. Configured entry
    if let Some(entry) = settings.entry.as_deref() {
        match hosts::try_entry_exists(entry, path) {
            Ok(true) => results.push(CheckResult::pass(format!("[{entry}] present"))),
            Ok(false) => results.push(CheckResult::fail(format!(
                "[{entry}] not in hosts file. Run 'hostsctl add'."
            ))),
            Err(e) => results.push(CheckResult::fail(format!("[{entry}] {e}"))),
        }
    }

    results
}
