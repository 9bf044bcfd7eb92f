//! E2E: add -> check -> remove -> check through the binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn hostsctl(home: &Path, hosts: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hostsctl").unwrap();
    cmd.env("HOSTSCTL_HOME", home)
        .env("HOSTSCTL_HOSTS_FILE", hosts)
        .env_remove("HOSTSCTL_LOG");
    cmd
}

#[test]
fn e2e_add_check_remove() {
    let dir = common::temp_home();
    let hosts = common::hosts_file(dir.path(), "127.0.0.1 localhost\n");
    let home = dir.path().join("home");

    hostsctl(&home, &hosts)
        .args(["add", "93.184.216.34 example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("已添加到 hosts 文件"));

    hostsctl(&home, &hosts)
        .args(["add", "93.184.216.34 example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("已经存在"));

    hostsctl(&home, &hosts)
        .args(["check", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("present"));

    assert_eq!(
        common::read(&hosts),
        "127.0.0.1 localhost\n93.184.216.34 example.com\n"
    );

    hostsctl(&home, &hosts)
        .args(["remove", "example.com"])
        .assert()
        .success();

    hostsctl(&home, &hosts)
        .args(["check", "example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("absent"));

    assert_eq!(common::read(&hosts), "127.0.0.1 localhost\n");
}

#[test]
fn e2e_configured_entry() {
    let dir = common::temp_home();
    let hosts = common::hosts_file(dir.path(), "127.0.0.1 localhost\n");
    let home = dir.path().join("home");

    hostsctl(&home, &hosts)
        .args(["config", "set", "--entry", "10.0.0.2 db.lan"])
        .assert()
        .success();

    hostsctl(&home, &hosts)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db.lan"));

    hostsctl(&home, &hosts).arg("add").assert().success();
    assert!(common::read(&hosts).contains("10.0.0.2 db.lan\n"));

    hostsctl(&home, &hosts).arg("remove").assert().success();
    assert_eq!(common::read(&hosts), "127.0.0.1 localhost\n");
}

#[test]
fn add_without_entry_fails() {
    let dir = common::temp_home();
    let hosts = common::hosts_file(dir.path(), "");
    let home = dir.path().join("home");

    hostsctl(&home, &hosts)
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry given"));
}

#[test]
fn missing_hosts_file_fails() {
    let dir = common::temp_home();
    let hosts = dir.path().join("absent-hosts");
    let home = dir.path().join("home");

    hostsctl(&home, &hosts)
        .args(["add", "1.1.1.1 foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hosts"));
    assert!(!hosts.exists());
}

#[test]
fn path_flag_overrides_env() {
    let dir = common::temp_home();
    let hosts = common::hosts_file(dir.path(), "");
    let home = dir.path().join("home");
    let other = dir.path().join("other-hosts");

    hostsctl(&home, &hosts)
        .args(["--hosts-file", other.to_str().unwrap(), "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other-hosts"));
}

#[test]
fn doctor_reports_checks() {
    let dir = common::temp_home();
    let hosts = common::hosts_file(dir.path(), "127.0.0.1 localhost\n");
    let home = dir.path().join("home");

    hostsctl(&home, &hosts)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hosts file readable"));
}
