//! Doctor checks against temp hosts files.

mod common;

use hostsctl::config::Settings;
use hostsctl::doctor::run_checks;

fn settings(path: std::path::PathBuf, entry: Option<&str>) -> Settings {
    Settings {
        hosts_file: path,
        entry: entry.map(String::from),
    }
}

#[test]
fn healthy_file_passes() {
    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "127.0.0.1 localhost\n1.1.1.1 foo\n");

    let results = run_checks(&settings(path, Some("foo")));

    assert!(results.iter().all(|r| r.ok), "{results:?}");
    assert!(results.iter().any(|r| r.message.contains("[foo] present")));
}

#[test]
fn missing_file_fails_early() {
    let dir = common::temp_home();

    let results = run_checks(&settings(dir.path().join("hosts"), None));

    assert_eq!(results.len(), 1);
    assert!(!results[0].ok);
}

#[test]
fn missing_newline_is_informational() {
    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "127.0.0.1 localhost");

    let results = run_checks(&settings(path, None));

    assert!(results.iter().all(|r| r.ok), "{results:?}");
    assert!(results.iter().any(|r| r.message.contains("add will append one")));
}

#[test]
fn missing_entry_flagged() {
    let dir = common::temp_home();
    let path = common::hosts_file(dir.path(), "127.0.0.1 localhost\n");

    let results = run_checks(&settings(path, Some("foo")));

    let failed: Vec<_> = results.iter().filter(|r| !r.ok).collect();
    assert_eq!(failed.len(), 1, "{results:?}");
    assert!(failed[0].message.contains("[foo]"));
}
