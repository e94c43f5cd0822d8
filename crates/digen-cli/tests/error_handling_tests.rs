//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn digen(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("digen");
    cmd.current_dir(dir.path())
        .env_remove("DIGEN_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("digen.json"), content).unwrap();
}

#[test]
fn test_invalid_service_spec() {
    let temp = TempDir::new().unwrap();
    digen(&temp)
        .args(["generate", "a:b:c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a:b:c"))
        .stderr(predicate::str::contains("NAME:Interface"));
}

#[test]
fn test_malformed_config() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "{ not json");
    digen(&temp)
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_missing_field_is_named() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        r#"{ "output": "out", "services": [ { "name": "cache" } ] }"#,
    );
    digen(&temp)
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("services[0].interface"));
}

#[test]
fn test_wrong_field_type_is_named() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, r#"{ "output": ["out"], "services": [] }"#);
    digen(&temp)
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'output' must be a string"));
}

#[test]
fn test_explicit_config_not_found() {
    let temp = TempDir::new().unwrap();
    digen(&temp)
        .args(["generate", "--config", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("custom.json"),
        r#"{ "output": "env-out", "services": [ { "name": "a", "interface": "IA" } ] }"#,
    )
    .unwrap();

    digen(&temp)
        .env("DIGEN_CONFIG", "custom.json")
        .arg("generate")
        .assert()
        .success();
    assert!(temp.path().join("env-out/a/registerA.ts").is_file());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("digen.config.json"), "{}").unwrap();
    digen(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_unwritable_output_is_internal_error() {
    let temp = TempDir::new().unwrap();
    // A file where the output directory should be.
    fs::write(temp.path().join("blocked"), "").unwrap();
    digen(&temp)
        .args(["generate", "a", "-o", "blocked"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("blocked"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let temp = TempDir::new().unwrap();
    digen(&temp)
        .args(["-q", "-v", "generate", "a"])
        .assert()
        .code(2);
}

#[test]
fn test_zero_jobs_rejected() {
    let temp = TempDir::new().unwrap();
    digen(&temp)
        .args(["generate", "a", "-j", "0"])
        .assert()
        .code(2);
}
