//! Integration tests for the prettydiff CLI
//!
//! These tests run the compiled binary against files in a temporary
//! directory and check what reaches stdout, stderr and the exit status.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a prettydiff command with colors off
///
/// The config location points at a file that does not exist inside `dir`,
/// so the user's own config never leaks into a test.
fn prettydiff(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("prettydiff"));
    cmd.env("PRETTYDIFF_CONFIG", dir.join("no-config.toml")).env("NO_COLOR", "1");
    cmd
}

/// Helper to write a file into the temp dir
fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const LEFT: &str = "fn main() {\n    let x = 1;\n    println!(\"{x}\");\n}\n";
const RIGHT: &str = "fn main() {\n    let x = 2;\n    println!(\"{x}\");\n}\n\nfn extra() {}\n";

// =============================================================================
// BASIC CLI TESTS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    prettydiff(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prettydiff"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    prettydiff(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("side by side"));
}

#[test]
fn test_missing_arguments_fail() {
    let temp = TempDir::new().unwrap();
    prettydiff(temp.path()).assert().failure().code(2);
}

#[test]
fn test_missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.txt", "a\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("nope.txt"));
}

// =============================================================================
// SIDE-BY-SIDE TESTS
// =============================================================================

#[test]
fn test_side_by_side_shows_names_and_lines() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.rs", LEFT);
    let right = write(temp.path(), "right.rs", RIGHT);

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("left.rs"))
        .stdout(predicate::str::contains("right.rs"))
        .stdout(predicate::str::contains("let x = 1;"))
        .stdout(predicate::str::contains("let x = 2;"))
        .stdout(predicate::str::contains("fn extra() {}"))
        .stdout(predicate::str::contains("│"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_diff_only_hides_unchanged_lines() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.rs", LEFT);
    let right = write(temp.path(), "right.rs", RIGHT);

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .arg("--diff-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("let x = 2;"))
        .stdout(predicate::str::contains("fn main()").not());
}

#[test]
fn test_color_always_emits_ansi() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "one\n");
    let right = write(temp.path(), "b.txt", "two\n");

    prettydiff(temp.path())
        .env_remove("NO_COLOR")
        .arg(&left)
        .arg(&right)
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

// =============================================================================
// INLINE MODE TESTS
// =============================================================================

#[test]
fn test_words_mode() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "The quick brown fox");
    let right = write(temp.path(), "b.txt", "The quick red fox");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .args(["--mode", "words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The quick brownred fox"));
}

#[test]
fn test_lines_mode() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "a\nb\n");
    let right = write(temp.path(), "b.txt", "a\nc\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .args(["-m", "lines"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

// =============================================================================
// JSON AND SUMMARY TESTS
// =============================================================================

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "a\nb\nc\n");
    let right = write(temp.path(), "b.txt", "a\nx\nc\n");

    let output = prettydiff(temp.path()).arg(&left).arg(&right).arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["granularity"], "lines");
    assert_eq!(json["stats"]["inserted"], 1);
    assert_eq!(json["stats"]["removed"], 1);
    assert_eq!(json["stats"]["equal"], 2);
    assert_eq!(json["hunks"][1]["kind"], "replace");
    assert_eq!(json["hunks"][1]["old"][0], "b");
    assert_eq!(json["hunks"][1]["new"][0], "x");
}

#[test]
fn test_summary_identical_files() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "same\n");
    let right = write(temp.path(), "b.txt", "same\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .args(["--summary", "-m", "lines"])
        .assert()
        .success()
        .stdout(predicate::str::contains("are identical"));
}

// =============================================================================
// CONFIG TESTS
// =============================================================================

#[test]
fn test_config_file_enables_diff_only() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.rs", LEFT);
    let right = write(temp.path(), "right.rs", RIGHT);
    let config = write(temp.path(), "config.toml", "[display]\ndiff_only = true\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("fn main()").not());
}

#[test]
fn test_flags_undo_config_settings() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.rs", LEFT);
    let right = write(temp.path(), "right.rs", RIGHT);
    let config = write(
        temp.path(),
        "config.toml",
        "[display]\ndiff_only = true\nshow_line_numbers = false\n",
    );

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(&config)
        .args(["--no-diff-only", "--line-numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fn main()"))
        .stdout(predicate::str::contains("│ 1 "));
}

#[test]
fn test_config_env_is_honored() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "left.rs", LEFT);
    let right = write(temp.path(), "right.rs", RIGHT);
    let config = write(temp.path(), "config.toml", "[display]\ndiff_only = true\n");

    prettydiff(temp.path())
        .env("PRETTYDIFF_CONFIG", &config)
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("fn main()").not());
}

#[test]
fn test_invalid_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "a\n");
    let right = write(temp.path(), "b.txt", "b\n");
    let config = write(temp.path(), "config.toml", "not [valid toml");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

// =============================================================================
// TAB WIDTH TESTS
// =============================================================================

#[test]
fn test_huge_tab_width_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "\tone\n");
    let right = write(temp.path(), "b.txt", "\ttwo\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .args(["--tab-width", "18446744073709551615"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_oversized_config_tab_width_fails() {
    let temp = TempDir::new().unwrap();
    let left = write(temp.path(), "a.txt", "\tone\n");
    let right = write(temp.path(), "b.txt", "\ttwo\n");
    let config = write(temp.path(), "config.toml", "[display]\ntab_width = 100000\n");

    prettydiff(temp.path())
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("tab_width 100000 exceeds 32"));
}
