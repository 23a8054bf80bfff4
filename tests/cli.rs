use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{TempDir, tempdir};

const R1: &str = "\
!! managed by netops
hostname R1
!
interface Ethernet1
   description uplink
!
router bgp 65001
   router-id 10.0.0.1
!
";

const R2: &str = "\
hostname R2
!
interface Ethernet1
   description uplink
!
router bgp 65001
   router-id 10.0.0.2
!
";

fn confdiff() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_confdiff"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn corpus() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("R1.cfg"), R1).unwrap();
    fs::write(dir.path().join("R2.cfg"), R2).unwrap();
    dir
}

fn file(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

#[test]
fn shows_help() {
    confdiff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--mask"));
}

#[test]
fn shows_version() {
    confdiff().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn common_mode_prints_shared_stanzas() {
    let dir = corpus();
    confdiff()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("interface Ethernet1\n   description uplink\n! seen 2/2"))
        .stdout(predicate::str::contains("hostname R1").not())
        .stdout(predicate::str::contains("! 2 documents"));
}

#[test]
fn diffs_mode_lists_device_specific_lines() {
    let dir = corpus();
    confdiff()
        .args(["--mode", "diffs"])
        .arg(file(dir.path(), "R1.cfg"))
        .arg(file(dir.path(), "R2.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("router-id 10.0.0.1"))
        .stdout(predicate::str::contains("hostname R2"))
        .stdout(predicate::str::contains("description uplink").not());
}

#[test]
fn json_report_written_to_output_file() {
    let dir = corpus();
    let out = dir.path().join("report.json");
    confdiff()
        .args(["--mode", "diffs", "--format", "json", "--include", "*.cfg", "-o"])
        .arg(&out)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["findings"]["mode"], "diffs");
    assert_eq!(value["devices"], serde_json::json!(["R1", "R2"]));
    let lines = value["findings"]["unique_lines"].as_array().unwrap();
    assert!(lines.iter().any(|l| l["device"] == "R1" && l["line"] == "hostname R1" && l["peers"][0] == "R2"));
}

#[test]
fn mask_hides_description_differences() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.cfg"), "interface Ethernet1\n   description to core-1\n!\n").unwrap();
    fs::write(dir.path().join("b.cfg"), "interface Ethernet1\n   Description to core-2\n!\n").unwrap();

    confdiff()
        .args(["--mask", "description"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("! seen 2/2"))
        .stdout(predicate::str::contains("<masked>"));

    confdiff().arg(dir.path()).assert().success().stdout(predicate::str::contains("! no stanza seen 2..2 times"));
}

#[test]
fn include_filters_directory_children() {
    let dir = corpus();
    fs::write(dir.path().join("notes.txt"), "hostname notes\n").unwrap();
    confdiff()
        .args(["--format", "jsonl", "--include", "*.cfg"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""documents":2"#));
}

#[test]
fn comments_are_listed_on_request() {
    let dir = corpus();
    confdiff()
        .arg("--comments")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("!! managed by netops"));
}

#[test]
fn missing_input_is_skipped_with_partial_status() {
    let dir = corpus();
    confdiff()
        .arg(file(dir.path(), "R1.cfg"))
        .arg(file(dir.path(), "R9.cfg"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("! 1 documents"))
        .stderr(predicate::str::contains("R9.cfg"));
}

#[test]
fn strict_mode_fails_on_missing_input() {
    let dir = corpus();
    confdiff()
        .arg("--strict")
        .arg(file(dir.path(), "R1.cfg"))
        .arg(file(dir.path(), "R9.cfg"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("could not be loaded"));
}

#[test]
fn inverted_range_is_rejected() {
    let dir = corpus();
    confdiff()
        .args(["--min", "3", "--max", "1"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("min 3 is greater than max 1"));
}

#[test]
fn min_is_rejected_in_diffs_mode() {
    let dir = corpus();
    confdiff()
        .args(["--mode", "diffs", "--min", "1"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min"));
}

#[test]
fn files_from_reads_listed_inputs() {
    let dir = corpus();
    let list = dir.path().join("fleet.txt");
    fs::write(&list, "R2.cfg\nR1.cfg\n").unwrap();
    let output = confdiff().args(["--format", "json", "--files-from"]).arg(&list).output().unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["devices"], serde_json::json!(["R2", "R1"]));
}

#[test]
fn no_inputs_is_an_error() {
    confdiff().assert().failure();
}
