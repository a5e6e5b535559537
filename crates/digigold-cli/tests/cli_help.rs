use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_flags() {
    cargo_bin_cmd!("digigold")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--screen"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("digigold")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_unknown_screen_rejected() {
    cargo_bin_cmd!("digigold")
        .args(["--screen", "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown screen"));
}
