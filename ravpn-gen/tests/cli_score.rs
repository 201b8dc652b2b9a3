use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn score_grades_the_full_fixture() {
    // Strong DH (30) + strongest AEAD phase-1 (20) + PFS (15) + default
    // port (3) + DPD/NAT-T/childless (15) + AEAD phase-2 (10) = 93... with
    // both lifetimes, DPD, pool, DNS, split, SAML fields and one group row
    // filled, completeness lands at 28 of 29 expected fields.
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("score")
        .arg(fixture("fixtures/record-hq.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("93/100"))
        .stdout(predicate::str::contains("dh_tier=STRONG"))
        .stdout(predicate::str::contains("completeness 97/100"));
}

#[test]
fn score_flags_weak_dh_selection() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ravpn-gen"));
    cmd.arg("score")
        .arg(fixture("fixtures/record-lab.toml"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dh_tier\": \"WEAK\""))
        .stdout(predicate::str::contains("\"score\": 28"));
}
