// File: crates/gapminder-cli/tests/cli.rs
// Purpose: End-to-end runs of the `gapminder` binary against the core fixture.

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../gapminder-core/tests/data/gapminder_sample.csv");

#[test]
fn renders_png_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gapminder")
        .unwrap()
        .args([FIXTURE, "--format", "both", "--no-labels", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scatter_gapminder_sample_1980.png"));

    let png = std::fs::read(dir.path().join("scatter_gapminder_sample_1980.png")).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
    let svg = std::fs::read_to_string(dir.path().join("scatter_gapminder_sample_1980.svg")).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);
}

#[test]
fn hover_writes_tooltip_frame() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gapminder")
        .unwrap()
        .args([FIXTURE, "--format", "svg", "--hover", "India", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let svg = std::fs::read_to_string(dir.path().join("scatter_gapminder_sample_1980_india.svg")).unwrap();
    assert!(svg.contains("Population over Time"));
    assert!(svg.contains("<path"));
}

#[test]
fn error_policy_reports_missing_value() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gapminder")
        .unwrap()
        .args([FIXTURE, "--missing", "error", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fertility").and(predicate::str::contains("missing")));
}

#[test]
fn unknown_hover_country_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("gapminder")
        .unwrap()
        .args([FIXTURE, "--hover", "Atlantis", "--no-labels", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("gapminder")
        .unwrap()
        .arg("does/not/exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
