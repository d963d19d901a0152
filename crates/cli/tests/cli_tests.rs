//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("mdgrab").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/csdn/{}", name)
}

#[test]
fn test_cli_file_input() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.md");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Getting Started with Rust Ownership"));

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("# Getting Started with Rust Ownership"));
    assert!(text.contains("```rust"));
}

#[test]
fn test_cli_stdin_input() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.md");
    let html = std::fs::read_to_string(get_fixture_path("article.html")).unwrap();

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg("-")
        .write_stdin(html)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_cli_derives_filename_from_title() {
    let tmp = TempDir::new().unwrap();
    let fixture = std::fs::canonicalize(get_fixture_path("article.html")).unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg(fixture.to_str().unwrap())
        .assert()
        .success();

    assert!(tmp.path().join("Getting Started with Rust Ownership.md").exists());
}

#[test]
fn test_cli_missing_title_reports_and_exits_normally() {
    cmd()
        .arg(get_fixture_path("missing_title.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("title not found"));
}

#[test]
fn test_cli_missing_content_reports_and_exits_normally() {
    cmd()
        .arg(get_fixture_path("missing_content.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("content not found"));
}

#[test]
fn test_cli_nonexistent_file_reports_and_exits_normally() {
    cmd()
        .arg("/nonexistent/page.html")
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_verbose_progress() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.md");

    cmd()
        .args(["-v", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/3]"))
        .stderr(predicate::str::contains("[3/3]"));
}
