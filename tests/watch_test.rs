//! End-to-end tests for the directory watcher.
//!
//! These drive `scan_once` directly against temp directories; the
//! blocking poll loop itself is only a sleep around the same scan.

use sales_report_engine::{DirectoryWatcher, Separators, WatchConfig};
use std::collections::HashSet;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn watcher_over(input: &TempDir, output: &TempDir) -> DirectoryWatcher {
    DirectoryWatcher::new(
        WatchConfig {
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            extension: ".dat".to_string(),
            poll_interval: Duration::from_millis(10),
        },
        Separators::default(),
    )
}

#[test]
fn test_each_file_gets_its_own_report() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(
        input.path().join("first.dat"),
        "002çB1çBob Corpçretail\n003çS1ç[a-1-5.0]çAlice\n",
    )
    .unwrap();
    fs::write(input.path().join("second.dat"), "001çA1çAliceç50000\n").unwrap();

    let watcher = watcher_over(&input, &output);
    let mut processed = HashSet::new();
    assert_eq!(watcher.scan_once(&mut processed).unwrap(), 2);

    let first = fs::read_to_string(output.path().join("first.done.dat")).unwrap();
    assert!(first.contains("Amount of clients found: 1"));
    assert!(first.contains("Most expensive sale with price 5.0 has ID a"));

    // The second file's report must not see the first file's records.
    let second = fs::read_to_string(output.path().join("second.done.dat")).unwrap();
    let lines: Vec<&str> = second.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Amount of clients found: 0",
            "Amount of salesmen found: 1",
            "No sales have been found",
            "No sales have been found",
        ]
    );
}

#[test]
fn test_second_scan_picks_up_only_new_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("first.dat"), "002çB1çBob Corpçretail\n").unwrap();

    let watcher = watcher_over(&input, &output);
    let mut processed = HashSet::new();
    assert_eq!(watcher.scan_once(&mut processed).unwrap(), 1);

    fs::write(input.path().join("late.dat"), "001çA1çAliceç50000\n").unwrap();
    assert_eq!(watcher.scan_once(&mut processed).unwrap(), 1);
    assert!(output.path().join("late.done.dat").exists());
}
