//! Edge case and error handling tests for twig

#![cfg(unix)]


use assert_cmd::Command;
use harness::{TestDir, root_line, run_twig};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "t");
    dir.add_symlink("link.txt", "target.txt");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("└── link.txt -> target.txt\n"), "{}", stdout);
    assert!(stdout.contains("└── target.txt\n"));
}

#[test]
fn test_symlink_to_directory_is_not_followed() {
    let dir = TestDir::new();
    dir.add_file("realdir/inner.txt", "");
    dir.add_symlink("linkdir", "realdir");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("└── linkdir -> realdir\n"), "{}", stdout);
    assert_eq!(stdout.matches("inner.txt").count(), 1, "{}", stdout);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "");
    dir.add_symlink("subdir/parent", "..");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success, "twig should not hang on parent symlink");
    assert!(stdout.contains("parent -> .."), "{}", stdout);
}

#[test]
fn test_broken_symlink_keeps_raw_target() {
    let dir = TestDir::new();
    dir.add_symlink("broken", "../../nonexistent/target");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success, "twig should handle broken symlinks");
    assert!(
        stdout.ends_with("└── broken -> ../../nonexistent/target\n"),
        "{}",
        stdout
    );
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_symlink("selfref", "selfref");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("selfref -> selfref"));
}

#[test]
fn test_root_given_through_symlink_is_resolved() {
    let dir = TestDir::new();
    dir.add_file("real/a.txt", "");
    dir.add_symlink("alias", "real");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["alias"]);
    assert!(success);
    assert_eq!(stdout, "real/\n└── a.txt\n");
}

// ============================================================================
// Invalid Roots
// ============================================================================

#[test]
fn test_missing_root_fails() {
    let dir = TestDir::new();

    Command::cargo_bin("twig")
        .unwrap()
        .current_dir(dir.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does-not-exist"))
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn test_file_root_fails() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");

    Command::cargo_bin("twig")
        .unwrap()
        .current_dir(dir.path())
        .arg("plain.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("plain.txt"))
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_invalid_root_does_not_stop_later_roots() {
    let dir = TestDir::new();
    dir.add_file("good/ok.txt", "");

    Command::cargo_bin("twig")
        .unwrap()
        .current_dir(dir.path())
        .args(["missing", "good"])
        .assert()
        .code(1)
        .stdout("good/\n└── ok.txt\n")
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_invalid_depth_is_usage_error() {
    Command::cargo_bin("twig")
        .unwrap()
        .args(["-d", "deep"])
        .assert()
        .code(2);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

/// Make `path` unreadable and report whether that actually took effect.
fn lock(path: &std::path::Path) -> bool {
    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).expect("Failed to lock dir");
    fs::read_dir(path).is_err()
}

fn unlock(path: &std::path::Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("Failed to unlock dir");
}

#[test]
fn test_unreadable_directory_aborts_that_root() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "");
    dir.add_file("unreadable/hidden.txt", "");
    let unreadable = dir.path().join("unreadable");

    let effective = lock(&unreadable);
    let (stdout, stderr, success) = run_twig(dir.path(), &[]);
    unlock(&unreadable);

    if !effective {
        // Permission bits are not enforced for this user.
        return;
    }
    assert!(!success, "unreadable directory should fail the run");
    assert!(stdout.is_empty(), "no partial tree expected: {}", stdout);
    assert!(stderr.contains("cannot read directory"), "{}", stderr);
    assert!(stderr.contains("unreadable"), "{}", stderr);
    assert!(!stderr.contains("hidden.txt"));
}

#[test]
fn test_unreadable_directory_does_not_stop_later_roots() {
    let broken = TestDir::new();
    broken.add_file("locked/x.txt", "");
    let locked = broken.path().join("locked");
    let fine = TestDir::new();
    fine.add_file("ok.txt", "");

    let a = broken.path().to_string_lossy().to_string();
    let b = fine.path().to_string_lossy().to_string();
    let effective = lock(&locked);
    let (stdout, stderr, success) = run_twig(fine.path(), &[&a, &b]);
    unlock(&locked);

    if !effective {
        return;
    }
    assert!(!success);
    assert_eq!(stdout, format!("{}\n└── ok.txt\n", root_line(fine.path())));
    assert!(stderr.contains("locked"), "{}", stderr);
}

#[test]
fn test_unreadable_directory_beyond_depth_is_never_read() {
    let dir = TestDir::new();
    dir.add_file("locked/x.txt", "");
    let locked = dir.path().join("locked");

    lock(&locked);
    let (stdout, _stderr, success) = run_twig(dir.path(), &["-d", "1"]);
    unlock(&locked);

    assert!(success);
    assert!(stdout.contains("└── locked/\n"));
}

#[test]
fn test_excluded_unreadable_directory_is_never_read() {
    let dir = TestDir::new();
    dir.add_file("locked/x.txt", "");
    dir.add_file("ok.txt", "");
    let locked = dir.path().join("locked");

    lock(&locked);
    let (stdout, _stderr, success) = run_twig(dir.path(), &["-e", "locked"]);
    unlock(&locked);

    assert!(success);
    assert!(stdout.ends_with("└── ok.txt\n"));
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("dir with spaces/file with spaces.txt", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("└── dir with spaces/\n"));
    assert!(stdout.contains("    └── file with spaces.txt\n"));
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "");
    dir.add_file("中文目录/文件.txt", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("中文目录/"));
}

#[test]
fn test_malformed_glob_is_literal() {
    let dir = TestDir::new();
    dir.add_file("[abc", "");
    dir.add_file("a", "");

    let (stdout, stderr, success) = run_twig(dir.path(), &["-e", "[abc"]);
    assert!(success, "malformed pattern must not error: {}", stderr);
    assert!(!stdout.contains("[abc"));
    assert!(stdout.contains("└── a\n"));
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();
    dir.add_dir("empty");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, format!("{}\n└── empty/\n", root_line(dir.path())));
}
