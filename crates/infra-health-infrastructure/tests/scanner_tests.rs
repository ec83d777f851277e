//! Integration tests for the log directory scanner

use infra_health_infrastructure::scanner::LogScanner;
use std::fs;
use std::path::Path;

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[test]
fn test_scan_counts_matching_lines_per_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    fs::write(dir.path().join("a.log"), "ERROR: disk full\n").expect("write should succeed");
    fs::write(dir.path().join("b.log"), "ok ok ok\n").expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.total_matches, 1);
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.results[0].match_count, 1);
    assert_eq!(summary.results[1].match_count, 0);
}

#[test]
fn test_scan_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    fs::write(
        dir.path().join("mixed.log"),
        "Error: one\nERROR: two\nerror: three\nfine\n",
    )
    .expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["ERROR"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.total_matches, 3);
}

#[test]
fn test_line_with_multiple_keywords_counts_once() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    fs::write(
        dir.path().join("app.log"),
        "ERROR: request FAILED with TIMEOUT\n",
    )
    .expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error", "failed", "timeout"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.total_matches, 1);
}

#[test]
fn test_scan_missing_directory_is_not_an_error() {
    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(Path::new("/nonexistent/surely/not/here")));

    assert_eq!(summary.total_matches, 0);
    assert!(summary.results.is_empty());
    assert!(summary.directory.is_some());
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.total_matches, 0);
    assert_eq!(summary.files_scanned, 0);
    assert!(summary.results.is_empty());
}

#[test]
fn test_scan_skipped_when_no_directory_configured() {
    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(None);

    assert_eq!(summary.total_matches, 0);
    assert!(summary.directory.is_none());
}

#[test]
fn test_results_are_sorted_by_file_name() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    for name in ["c.log", "a.log", "b.log"] {
        fs::write(dir.path().join(name), "error\n").expect("write should succeed");
    }

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    let names: Vec<_> = summary
        .results
        .iter()
        .map(|r| {
            Path::new(&r.file_path)
                .file_name()
                .expect("result should have a file name")
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(names, vec!["a.log", "b.log", "c.log"]);
    assert_eq!(summary.total_matches, 3);
}

#[test]
fn test_subdirectories_are_not_scanned() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    fs::write(dir.path().join("top.log"), "error\n").expect("write should succeed");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("mkdir should succeed");
    fs::write(nested.join("deep.log"), "error\nerror\n").expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.total_matches, 1);
}

#[test]
fn test_examples_are_capped() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let lines = "error one\nerror two\nerror three\nerror four\nerror five\n";
    fs::write(dir.path().join("busy.log"), lines).expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.results[0].match_count, 5);
    assert_eq!(summary.results[0].examples.len(), 3);
    assert_eq!(summary.results[0].examples[0], "error one");
}

#[test]
fn test_invalid_utf8_does_not_fail_the_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let mut bytes = b"ERROR: broken ".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"\nclean line\n");
    fs::write(dir.path().join("binary.log"), bytes).expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    assert_eq!(summary.total_matches, 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_contributes_zero_matches() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let locked = dir.path().join("locked.log");
    fs::write(&locked, "error\n").expect("write should succeed");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("chmod should succeed");
    if fs::read(&locked).is_ok() {
        // Privileged user can read regardless of mode bits; nothing to test
        return;
    }
    fs::write(dir.path().join("open.log"), "error\n").expect("write should succeed");

    let scanner = LogScanner::new(&keywords(&["error"]), 3);
    let summary = scanner.scan(Some(dir.path()));

    // Restore permissions so tempdir cleanup works everywhere
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))
        .expect("chmod should succeed");

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.total_matches, 1);
    let locked_result = summary
        .results
        .iter()
        .find(|r| r.file_path.ends_with("locked.log"))
        .expect("locked file should appear in results");
    assert_eq!(locked_result.match_count, 0);
}
