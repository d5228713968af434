//! Directory polling and per-file cycle orchestration.

use crate::config::{Separators, WatchConfig};
use crate::engine::ReportEngine;
use crate::error::Result;
use log::{info, warn};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::thread;

/// Polls an input directory and runs one report cycle per new file.
pub struct DirectoryWatcher {
    config: WatchConfig,
    separators: Separators,
}

impl DirectoryWatcher {
    /// Creates a watcher over the configured directories.
    pub fn new(config: WatchConfig, separators: Separators) -> Self {
        DirectoryWatcher { config, separators }
    }

    /// Scans forever at the configured interval.
    ///
    /// Runs until the process is interrupted. State is file-scoped, so an
    /// interrupt leaves nothing to clean up.
    pub fn run(&self) -> Result<()> {
        info!(
            "watching {} for *{} files",
            self.config.input_dir.display(),
            self.config.extension
        );
        fs::create_dir_all(&self.config.output_dir)?;

        let mut processed = HashSet::new();
        loop {
            self.scan_once(&mut processed)?;
            thread::sleep(self.config.poll_interval);
        }
    }

    /// One pass over the input directory.
    ///
    /// Each unseen file with the configured extension gets a full cycle:
    /// a fresh engine, a report, an output file. Returns how many files
    /// were picked up. A file that fails mid-cycle is logged and still
    /// remembered as processed; retrying it every poll would fail the
    /// same way.
    pub fn scan_once(&self, processed: &mut HashSet<OsString>) -> Result<usize> {
        let mut handled = 0;
        for entry in fs::read_dir(&self.config.input_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if !name.to_string_lossy().ends_with(&self.config.extension)
                || processed.contains(&name)
            {
                continue;
            }

            let path = entry.path();
            match self.process_file(&path) {
                Ok(out_path) => info!("{} -> {}", path.display(), out_path.display()),
                Err(e) => warn!("{}: {}", path.display(), e),
            }
            processed.insert(name);
            handled += 1;
        }
        Ok(handled)
    }

    /// Runs one file's aggregation cycle and writes its report.
    ///
    /// The report is rendered in memory before the output file is
    /// created, so a failed cycle writes nothing.
    fn process_file(&self, path: &Path) -> Result<PathBuf> {
        let file = File::open(path)?;
        let mut engine = ReportEngine::new(self.separators);
        engine.process_lines(BufReader::new(file))?;

        let mut rendered = Vec::new();
        engine.write_report(&mut rendered)?;

        let out_path = self.output_path_for(path);
        let mut out = File::create(&out_path)?;
        out.write_all(&rendered)?;
        Ok(out_path)
    }

    /// Derives the output location: `name.ext` becomes `name.done.ext`
    /// in the output directory.
    fn output_path_for(&self, input: &Path) -> PathBuf {
        let name = match (input.file_stem(), input.extension()) {
            (Some(stem), Some(ext)) => {
                format!("{}.done.{}", stem.to_string_lossy(), ext.to_string_lossy())
            }
            _ => format!(
                "{}.done",
                input.file_name().unwrap_or_default().to_string_lossy()
            ),
        };
        self.config.output_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn watcher(input: &TempDir, output: &TempDir) -> DirectoryWatcher {
        DirectoryWatcher::new(
            WatchConfig {
                input_dir: input.path().to_path_buf(),
                output_dir: output.path().to_path_buf(),
                extension: ".dat".to_string(),
                poll_interval: Duration::from_secs(1),
            },
            Separators::default(),
        )
    }

    #[test]
    fn test_scan_processes_new_file_and_writes_report() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            input.path().join("sample.dat"),
            "002çB456çBob Corpçretail\n003çS1ç[it1-2-10.5]çAlice\n",
        )
        .unwrap();

        let watcher = watcher(&input, &output);
        let mut processed = HashSet::new();
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 1);

        let report = fs::read_to_string(output.path().join("sample.done.dat")).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Amount of clients found: 1");
        assert_eq!(lines[2], "Most expensive sale with price 10.5 has ID it1");
    }

    #[test]
    fn test_scan_skips_other_extensions() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("notes.txt"), "002çB456çBobçretail\n").unwrap();

        let watcher = watcher(&input, &output);
        let mut processed = HashSet::new();
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 0);
        assert!(fs::read_dir(output.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_scan_does_not_reprocess_seen_files() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("sample.dat"), "002çB456çBobçretail\n").unwrap();

        let watcher = watcher(&input, &output);
        let mut processed = HashSet::new();
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 1);
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 0);
    }

    #[test]
    fn test_failed_file_writes_nothing_and_is_not_retried() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            input.path().join("broken.dat"),
            "003çS1ç[it1-2-not-a-price]çAlice\n",
        )
        .unwrap();

        let watcher = watcher(&input, &output);
        let mut processed = HashSet::new();
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 1);

        assert!(!output.path().join("broken.done.dat").exists());
        assert_eq!(watcher.scan_once(&mut processed).unwrap(), 0);
    }

    #[test]
    fn test_output_name_inserts_done_before_extension() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let watcher = watcher(&input, &output);

        let out = watcher.output_path_for(Path::new("in/report.dat"));
        assert_eq!(out, output.path().join("report.done.dat"));
    }
}
