//! Tests for `envault init`.

use crate::support::*;

#[test]
fn test_init_creates_layout() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized .envault");
    assert_stdout_contains(&output, "Next steps");

    assert!(t.path(".envault/config.yaml").is_file());
    assert_eq!(t.read(".envault/authorized_keys"), "");
    assert!(t.read(".envault/.gitignore").contains("*.plaintext"));
    assert!(t.read(".gitignore").lines().any(|l| l == ".env"));
}

#[test]
fn test_init_default_config_has_dev() {
    let t = Test::init();

    let config = t.read(".envault/config.yaml");
    assert!(config.contains("dev:"));
    assert!(config.contains("encrypted_file: dev.age"));
    assert!(config.contains("path: .env"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_keeps_existing_gitignore_entries() {
    let t = Test::new();
    t.write(".gitignore", "target/\n.env\n");

    assert_success(&t.init_cmd());

    let ignore = t.read(".gitignore");
    assert!(ignore.starts_with("target/\n"));
    assert_eq!(ignore.lines().filter(|l| *l == ".env").count(), 1);
}

#[test]
fn test_init_with_root_flag() {
    let t = Test::new();
    let root = t.path("nested/project");
    std::fs::create_dir_all(&root).unwrap();

    let output = t.cmd().arg("--root").arg(&root).arg("init").output().unwrap();
    assert_success(&output);

    assert!(root.join(".envault/config.yaml").is_file());
    assert!(!t.path(".envault").exists());
}
