//! Edge case and error handling tests for bough


use assert_cmd::Command;
use harness::TestInput;
use predicates::prelude::*;

fn bough() -> Command {
    Command::cargo_bin("bough").expect("binary built")
}

// ============================================================================
// Configuration validation
// ============================================================================

#[test]
fn test_indentation_below_two_is_rejected_before_output() {
    bough()
        .args(["--indent", "1"])
        .write_stdin("{\"a\": 1}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "`indentation` must be greater than or equal to 2 (got 1)",
        ));
}

#[test]
fn test_h_lines_equal_to_indentation_is_rejected() {
    bough()
        .args(["--indent", "4", "--h-lines", "4"])
        .write_stdin("{\"a\": 1}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "`h_lines` must be less than or equal to `indentation` - 1 (3), got 4",
        ));
}

#[test]
fn test_h_lines_at_the_upper_bound_is_accepted() {
    bough()
        .args(["--indent", "4", "--h-lines", "3"])
        .write_stdin("{\"a\": 1}")
        .assert()
        .success();
}

#[test]
fn test_unknown_flag_is_rejected() {
    bough()
        .arg("--no-such-option")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_missing_file() {
    bough()
        .arg("/no/such/file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_invalid_json() {
    let input = TestInput::new();
    let file = input.add_json("broken.json", "{not json");

    bough()
        .arg(file.to_str().unwrap())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_invalid_json_on_stdin_names_stdin() {
    bough()
        .write_stdin("[1, 2,")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON in 'stdin'"));
}

#[test]
fn test_empty_object_renders_only_root() {
    bough()
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(".\n");
}

#[test]
fn test_null_document_renders_only_root() {
    bough()
        .write_stdin("null")
        .assert()
        .success()
        .stdout(".\n");
}

// ============================================================================
// Structural edge cases
// ============================================================================

#[test]
fn test_duplicate_sibling_names_are_kept() {
    // JSON objects cannot hold duplicate keys, but arrays of equal values
    // produce equal-looking labels; none are deduplicated.
    bough()
        .args(["--values"])
        .write_stdin(r#"{"xs": [1, 1]}"#)
        .assert()
        .success()
        .stdout(".\n└── xs\n    ├── 0: 1\n    └── 1: 1\n");
}

#[test]
fn test_deep_nesting() {
    let doc = r#"{"a": {"b": {"c": {"d": {"e": 1}}}}}"#;
    bough()
        .write_stdin(doc)
        .assert()
        .success()
        .stdout(".\n└── a\n    └── b\n        └── c\n            └── d\n                └── e\n");
}

#[test]
fn test_depth_zero_renders_only_root() {
    bough()
        .args(["-L", "0"])
        .write_stdin(r#"{"a": 1}"#)
        .assert()
        .success()
        .stdout(".\n");
}

#[test]
fn test_mixed_branch_rendering() {
    // A non-last branch keeps its column's vertical bar alive for the
    // sibling below it.
    let doc = r#"{"first": {"x": 1, "y": 2}, "second": 3}"#;
    bough()
        .write_stdin(doc)
        .assert()
        .success()
        .stdout(".\n├── first\n│   ├── x\n│   └── y\n└── second\n");
}
