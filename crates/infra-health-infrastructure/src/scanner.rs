//! Log directory keyword scanner
//!
//! Scans regular files directly under a directory (no recursion) for lines
//! containing configured keywords as case-insensitive substrings. A line
//! with several keyword occurrences counts once. Unreadable files degrade
//! to zero-match results; a missing or empty directory is not an error.

use infra_health_domain::value_objects::logs::{LogMatchResult, LogScanSummary};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Keyword scanner over a directory of log files
pub struct LogScanner {
    /// Keywords, pre-lowercased for case-insensitive matching
    keywords: Vec<String>,

    /// Example matching lines retained per file
    max_examples: usize,
}

impl LogScanner {
    /// Create a scanner for the given keyword set
    pub fn new(keywords: &[String], max_examples: usize) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            max_examples,
        }
    }

    /// Scan a directory and aggregate per-file match counts
    ///
    /// `None` means no directory was configured and scanning is skipped.
    /// Results are ordered lexically by file name so reports are
    /// reproducible regardless of directory enumeration order.
    pub fn scan(&self, directory: Option<&Path>) -> LogScanSummary {
        let Some(directory) = directory else {
            debug!("No log directory configured, skipping scan");
            return LogScanSummary::skipped();
        };

        if !directory.is_dir() {
            debug!("Log directory {} does not exist", directory.display());
            return LogScanSummary::from_results(directory.display().to_string(), Vec::new());
        }

        let mut results = Vec::new();
        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable directory entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            results.push(self.scan_file(entry.path()));
        }

        LogScanSummary::from_results(directory.display().to_string(), results)
    }

    fn scan_file(&self, path: &Path) -> LogMatchResult {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Could not read log file {}: {err}", path.display());
                return LogMatchResult::new(path.display().to_string(), 0);
            }
        };

        // Log files are not guaranteed to be valid UTF-8; replace bad bytes
        // instead of failing the file.
        let content = String::from_utf8_lossy(&bytes);

        let mut match_count = 0u64;
        let mut examples = Vec::new();
        for line in content.lines() {
            let lowered = line.to_lowercase();
            if self.keywords.iter().any(|k| lowered.contains(k)) {
                match_count += 1;
                if examples.len() < self.max_examples {
                    examples.push(line.trim().to_string());
                }
            }
        }

        LogMatchResult::new(path.display().to_string(), match_count).with_examples(examples)
    }
}
