//! CLI tests for the `argcheck` binary.
//!
//! Spawns the binary and verifies exit codes, stdout (the validated value)
//! and stderr (the failure message).

use std::process::{Command, Output};

use argcheck::CheckKind;
use argcheck::config::{ArgcheckConfig, load_config};
use argcheck::exit_codes;
use argcheck::test_support::ConfigDir;

fn argcheck(dir: &ConfigDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argcheck"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run argcheck")
}

fn argcheck_logged(dir: &ConfigDir, filter: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argcheck"))
        .current_dir(dir.path())
        .env("RUST_LOG", filter)
        .args(args)
        .output()
        .expect("run argcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn passing_check_prints_actual_untrimmed() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["not-empty", " v1 "]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), " v1 \n");
}

#[test]
fn failing_equals_reports_both_lines() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["equals", "8080", "8081"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(
        "The actual is NOT equal to the expected;\n\tactual: '8081'\n\texpected: '8080'\n"
    ));
}

#[test]
fn omitted_actual_is_null() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["not-null"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(stderr(&output).contains("The actual is null.\n"));
}

#[test]
fn config_message_replaces_default_prefix() {
    let dir = ConfigDir::new().expect("dir");
    let mut cfg = ArgcheckConfig::default();
    cfg.messages
        .insert(CheckKind::Contains, "unknown environment".to_string());
    dir.write(&cfg).expect("write config");

    let output = argcheck(&dir, &["contains", "qa", "dev", "prod"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let err = stderr(&output);
    assert!(err.contains("unknown environment\n\tactual: 'qa'\n"));
    assert!(!err.contains("The Collection MUST contain;"));
}

#[test]
fn message_flag_wins_over_config() {
    let dir = ConfigDir::new().expect("dir");
    dir.write_raw("[messages]\nis-true = \"from config\"\n")
        .expect("write config");

    let output = argcheck(&dir, &["--message", "from flag", "is-true", "false"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let err = stderr(&output);
    assert!(err.contains("from flag\n"));
    assert!(!err.contains("from config"));
}

#[test]
fn map_checks_take_key_value_entries() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["contains-key", "db", "db=5432", "cache=6379"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "db\n");

    let output = argcheck(&dir, &["not-contains-value", "5432", "db=5432"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(stderr(&output).contains("The Map MUST NOT contain value;\n\tactual: '5432'\n"));
}

#[test]
fn invalid_config_exits_invalid() {
    let dir = ConfigDir::new().expect("dir");
    dir.write_raw("log_filter = \"\"\n").expect("write config");

    let output = argcheck(&dir, &["is-true", "true"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("log_filter must be non-empty"));
}

#[test]
fn init_writes_default_config_once() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let loaded = load_config(&dir.config_path()).expect("load");
    assert!(loaded.from_file);
    assert_eq!(loaded.config, ArgcheckConfig::default());

    let output = argcheck(&dir, &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("already exists"));

    let output = argcheck(&dir, &["init", "--force"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn init_rejects_message_flag() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["--message", "ignored", "init"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("--message applies to checks, not init"));
    assert!(!dir.config_path().exists());
}

#[test]
fn debug_filter_reports_config_load() {
    let dir = ConfigDir::new().expect("dir");
    dir.write_raw("[messages]\nnot-null = \"WORKER_ID must be set\"\n")
        .expect("write config");

    let output = argcheck_logged(&dir, "argcheck=debug", &["not-null", "7"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let err = stderr(&output);
    assert!(err.contains("loaded config"));
    assert!(err.contains("overrides=1"));
}

#[test]
fn debug_filter_reports_missing_config() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck_logged(&dir, "argcheck=debug", &["not-null", "7"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stderr(&output).contains("no config file, using defaults"));
}

#[test]
fn default_filter_keeps_stderr_to_the_failure_message() {
    let dir = ConfigDir::new().expect("dir");
    let output = argcheck(&dir, &["not-null"]);
    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert_eq!(stderr(&output), "The actual is null.\n");
}
