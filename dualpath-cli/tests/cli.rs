//! Integration tests for the dualpath CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();
    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dualpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manipulate POSIX and Windows paths",
        ));
}

#[test]
fn test_cli_invalid_subcommand() {
    let env = TestEnv::new();
    env.command()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_every_subcommand_has_help() {
    let env = TestEnv::new();
    for sub in [
        "resolve",
        "normalize",
        "is-absolute",
        "join",
        "relative",
        "to-namespaced-path",
        "dirname",
        "basename",
        "extname",
        "parse",
        "format",
        "call",
        "info",
        "validate",
        "completions",
    ] {
        env.command()
            .args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_missing_positional_is_usage_error() {
    let env = TestEnv::new();
    env.command()
        .arg("relative")
        .arg("/a")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<TO>"));
}

#[test]
fn test_unknown_dialect_rejected_by_parser() {
    let env = TestEnv::new();
    env.command()
        .args(["--dialect", "vms", "normalize", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dualpath"));
}
