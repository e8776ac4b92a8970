use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn quill_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("quill"))
}

/// Runs in an empty directory so no stray `.quill.yml` is picked up.
fn quill_in(dir: &TempDir) -> Command {
    let mut cmd = quill_cmd();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    quill_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    quill_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quill"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Post"))
        .stdout(predicate::str::contains("addPost"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_authors() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("query")
        .arg("{ authors { name } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Austen"))
        .stdout(predicate::str::contains("Charles Dickens"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("query")
        .arg("query($id: Int!) { post(id: $id) { title } }")
        .arg("--variables")
        .arg(r#"{"id": 1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exploring GraphQL"));
}

#[test]
fn test_query_missing_author_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("query")
        .arg("{ author(id: 99) { name } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Author not found: 99"))
        .stdout(predicate::str::contains("NOT_FOUND"));
}

#[test]
fn test_mutate_add_post() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("mutate")
        .arg(r#"addPost(title: "T", content: "C", authorId: 1) { id author { name } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 3"#))
        .stdout(predicate::str::contains("Jane Austen"));
}

#[test]
fn test_mutate_unknown_author() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("mutate")
        .arg(r#"addPost(title: "T", content: "C", authorId: 999) { id }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Author with ID 999 not found."));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("query")
        .arg("{ authors { id } }")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure();
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_disables_introspection() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".quill.yml"),
        "graphql:\n  introspection: false\n",
    )
    .unwrap();

    quill_in(&temp_dir)
        .arg("query")
        .arg("{ __schema { queryType { name } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("QueryRoot").not());
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    fs::write(&config_path, "graphql:\n  max_depth: 2\n").unwrap();

    quill_in(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("query")
        .arg("{ authors { posts { author { name } } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    quill_in(&temp_dir)
        .arg("--config")
        .arg(temp_dir.path().join("nope.yml"))
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".quill.yml"),
        "store:\n  orphan_policy: sometimes\n",
    )
    .unwrap();

    quill_in(&temp_dir).arg("schema").assert().failure();
}

#[test]
fn test_log_file_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    quill_in(&temp_dir)
        .arg("--verbose")
        .arg("--log-file")
        .arg(log_dir.join("quill.log"))
        .arg("mutate")
        .arg(r#"addPost(title: "T", content: "C", authorId: 1) { id }"#)
        .assert()
        .success();

    assert!(log_dir.exists());
    let entries: Vec<_> = fs::read_dir(&log_dir).unwrap().collect();
    assert!(!entries.is_empty());
}
