//! End-to-end tests for the `seqdiff` binary.

mod common;

use common::*;

const OLD: &str = "one\ntwo\nthree\nfour\n";
const NEW: &str = "one\n2\nthree\nfour\nfive\n";

#[test]
fn ratio_text() {
    let dir = file_pair(OLD, NEW);
    let r = seqdiff(dir.path(), &["ratio", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    // 3 matched lines of 9.
    assert!(r.stdout.contains("ratio: 0.666667\n"), "{}", r.stdout);
    assert!(r.stdout.contains("real_quick_ratio: 0.888889\n"), "{}", r.stdout);
}

#[test]
fn ratio_json() {
    let dir = file_pair("a\n", "a\n");
    let r = seqdiff(dir.path(), &["ratio", "--format", "json", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&r.stdout).unwrap();
    assert_eq!(value["ratio"], 1.0);
    assert_eq!(value["quick_ratio"], 1.0);
}

#[test]
fn opcodes_text() {
    let dir = file_pair(OLD, NEW);
    let r = seqdiff(dir.path(), &["opcodes", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0);
    assert_eq!(
        r.stdout,
        "  equal a[0:1] b[0:1]\nreplace a[1:2] b[1:2]\n  equal a[2:4] b[2:4]\n insert a[4:4] b[4:5]\n"
    );
}

#[test]
fn opcodes_json_and_blocks() {
    let dir = file_pair(OLD, NEW);
    let r = seqdiff(dir.path(), &["opcodes", "--format", "json", "old.txt", "new.txt"]);
    let value: serde_json::Value = serde_json::from_str(&r.stdout).unwrap();
    assert_eq!(value[1]["tag"], "replace");
    assert_eq!(value[3]["b_end"], 5);

    let r = seqdiff(dir.path(), &["opcodes", "--blocks", "old.txt", "new.txt"]);
    assert_eq!(r.stdout, "0 0 1\n2 2 2\n4 5 0\n");
}

#[test]
fn unified_diff_output() {
    let dir = file_pair(OLD, NEW);
    let r = seqdiff(dir.path(), &["diff", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0);
    assert_eq!(
        r.stdout,
        "--- old.txt\n+++ new.txt\n@@ -1,4 +1,5 @@\n one\n-two\n+2\n three\n four\n+five\n"
    );
}

#[test]
fn context_diff_output() {
    let dir = file_pair("a\nb\n", "a\nc\n");
    let r = seqdiff(
        dir.path(),
        &["diff", "--context", "--from-label", "x", "--to-label", "y", "old.txt", "new.txt"],
    );
    assert_eq!(
        r.stdout,
        "*** x\n--- y\n***************\n*** 1,2 ****\n  a\n! b\n--- 1,2 ----\n  a\n! c\n"
    );
}

#[test]
fn diff_exit_code() {
    let same = file_pair(OLD, OLD);
    let r = seqdiff(same.path(), &["diff", "--exit-code", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0);
    assert!(r.stdout.is_empty());

    let differ = file_pair(OLD, NEW);
    let r = seqdiff(differ.path(), &["diff", "--exit-code", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 1);
}

#[test]
fn bench_generated_streams_compare() {
    let dir = tempfile::tempdir().unwrap();
    let r = seqdiff(
        dir.path(),
        &["bench", "--lines", "500", "--diffs", "20", "--compare", "--no-autojunk"],
    );
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    let lines: Vec<&str> = r.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Diff from arena is "));
    assert!(lines[1].starts_with("Diff from hash-map is "));
}

#[test]
fn bench_files_identical() {
    let dir = file_pair(OLD, OLD);
    let r = seqdiff(dir.path(), &["bench", "-n", "2", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0);
    assert!(r.stdout.starts_with("Diff from arena is 0 (2 iterations"));
}

#[test]
fn bench_rejects_zero_iterations() {
    let dir = tempfile::tempdir().unwrap();
    let r = seqdiff(dir.path(), &["bench", "--niter", "0"]);
    assert_eq!(r.exit_code, 128);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let r = seqdiff(dir.path(), &["ratio", "nope.txt", "nope2.txt"]);
    assert_eq!(r.exit_code, 128);
    assert!(r.stderr.starts_with("fatal: unable to read 'nope.txt'"), "{}", r.stderr);
}

#[test]
fn junk_lines_flag_is_accepted() {
    let dir = file_pair("a\n\nb\n", "a\nb\n\n");
    let r = seqdiff(dir.path(), &["opcodes", "--junk-lines", "--strategy", "hash-map", "old.txt", "new.txt"]);
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert!(!r.stdout.is_empty());
}
