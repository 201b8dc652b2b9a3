use std::path::PathBuf;
use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn validate_passes_for_real_fixture() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(fixture("fixtures/record-hq.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("validate issues=0"))
        .stdout(predicate::str::contains("- none"));
}

#[test]
fn validate_reports_backwards_pool_range() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("backwards.json");
    fs::write(
        &input,
        r#"{"tunnels": [{"name": "HQ-VPN"}], "poolStartIp": "10.0.0.10", "poolEndIp": "10.0.0.5"}"#,
    )
    .expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "poolRange: Start IP must be less than End IP",
        ));
}

#[test]
fn validate_strict_fails_on_issues() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("split.json");
    fs::write(
        &input,
        r#"{"splitMode": "enabled", "splitSubnets": "192.168.1.0/24\n10.0.0.0/33"}"#,
    )
    .expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("validate failed"))
        .stdout(predicate::str::contains("Invalid CIDR: 10.0.0.0/33"));
}

#[test]
fn validate_json_format_lists_field_paths() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("badport.json");
    fs::write(&input, r#"{"tunnels": [{"name": "HQ-VPN", "port": "70000"}]}"#).expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tunnels[0].port\""))
        .stdout(predicate::str::contains("Port must be between 1 and 65535"));
}

#[test]
fn validate_rejects_unknown_proposal_identifiers() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("unknown.json");
    fs::write(&input, r#"{"phase1Proposals": ["des-md5"]}"#).expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load record"));
}

#[test]
fn validate_accepts_toml_records() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("validate")
        .arg(fixture("fixtures/record-lab.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("validate issues=0"));
}
