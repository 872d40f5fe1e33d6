//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    for command in ["init", "add-key", "remove-key", "list-keys", "encrypt", "decrypt", "reencrypt", "check"] {
        assert_stdout_contains(&output, command);
    }
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_command() {
    let t = Test::new();

    let output = t.cmd().arg("version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(
        &output,
        &format!("envault version {}", env!("CARGO_PKG_VERSION")),
    );
}

#[test]
fn test_unknown_environment_hint() {
    let t = Test::init();

    t.cmd()
        .args(["decrypt", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("environment staging not found"))
        .stderr(predicate::str::contains(".envault/config.yaml"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    let output = t.cmd().args(["--verbose", "init"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_unknown_backend_rejected() {
    let t = Test::init();

    let output = t
        .bare_cmd()
        .args(["--backend", "gpg", "list-keys"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_age_binary_is_reported() {
    let t = Test::init();
    t.write("dev.plaintext", SAMPLE_ENV);

    // An empty PATH hides any installed age binary.
    let output = t
        .bare_cmd()
        .env("PATH", "")
        .args(["encrypt", "dev", "dev.plaintext"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "age is not installed");
    assert_stderr_contains(&output, "--backend native");
}

#[test]
fn test_missing_age_binary_checked_before_config() {
    // Not initialized, yet the prerequisite error wins.
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("PATH", "")
        .args(["decrypt", "dev"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "age is not installed");
}

#[test]
fn test_key_commands_do_not_need_age() {
    let t = Test::new();

    let output = t.bare_cmd().env("PATH", "").arg("init").output().unwrap();
    assert_success(&output);

    let output = t
        .bare_cmd()
        .env("PATH", "")
        .args(["add-key", CAROL_PUBLIC_KEY])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "envault");
}
