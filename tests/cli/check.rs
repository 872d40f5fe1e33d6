//! Tests for `envault check`.

use crate::skip_without_ssh_keygen;
use crate::support::*;

#[test]
fn test_check_passes_when_ready() {
    skip_without_ssh_keygen!();
    let t = Test::with_user_key();
    t.write("dev.plaintext", SAMPLE_ENV);
    assert_success(&t.encrypt("dev", "dev.plaintext"));

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "config.yaml is valid");
    assert_stdout_contains(&output, "1 authorized key(s)");
    assert_stdout_contains(&output, "Environment: dev");
    assert_stdout_contains(&output, "can decrypt");
    assert_stdout_contains(&output, "target: .env");
    assert_stdout_contains(&output, "all checks passed");
}

#[test]
fn test_check_reports_missing_artifact() {
    skip_without_ssh_keygen!();
    let t = Test::with_user_key();

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "encrypted file missing: dev.age");
    assert_stderr_contains(&output, "check found 1 problem(s)");
}

#[test]
fn test_check_reports_empty_registry() {
    let t = Test::init();

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "no authorized keys");
    assert_stderr_contains(&output, "check found 2 problem(s)");
}

#[test]
fn test_check_reports_undecryptable_environment() {
    skip_without_ssh_keygen!();
    let t = Test::init();
    let bob = t.other_key("bob");
    assert_success(&t.add_key(&bob.public));
    t.write("dev.plaintext", SAMPLE_ENV);
    assert_success(&t.encrypt("dev", "dev.plaintext"));
    // The caller has a key, but not one the file was encrypted for.
    t.user_key();

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "cannot decrypt");
}

#[test]
fn test_check_reports_invalid_config() {
    let t = Test::init();
    t.write_config(
        "environments:\n  dev:\n    encrypted_file: dev.age\n    targets: []\n  prod:\n    encrypted_file: ''\n    targets:\n      - path: .env.prod\n",
    );

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "dev");
    assert_stdout_contains(&output, "prod");
}

#[test]
fn test_check_requires_init() {
    let t = Test::new();

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_check_rejects_paths_outside_workspace() {
    let t = Test::init();
    t.write_config(
        "environments:\n  dev:\n    encrypted_file: ../dev.age\n    targets:\n      - path: ../outside/.env\n",
    );

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "must stay inside .envault");
    assert_stdout_contains(&output, "must not contain ..");
}
