use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("tabjson").unwrap()
}

#[test]
fn help_flag_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pages"))
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--password"))
        .stdout(predicate::str::contains("--missing-value"))
        .stdout(predicate::str::contains("--missing-null"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabjson"));
}

#[test]
fn positional_file_rejected() {
    cmd()
        .arg("input.pdf")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_strategy_rejected() {
    cmd()
        .args(["--strategy", "guess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lattice"));
}

#[test]
fn malformed_pages_rejected() {
    cmd()
        .args(["--pages", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid page number"));
}

#[test]
fn missing_flags_conflict() {
    cmd()
        .args(["--missing-null", "--missing-value", "nan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
