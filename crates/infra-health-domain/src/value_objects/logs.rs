//! Log scan value objects
//!
//! Results of scanning a directory of log files for keyword matches. A line
//! matches when it contains at least one configured keyword as a
//! case-insensitive substring; a line with several keywords still counts
//! once.

use serde::{Deserialize, Serialize};

/// Keyword match count for one scanned log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMatchResult {
    /// Path of the scanned file
    pub file_path: String,

    /// Number of lines containing at least one keyword
    pub match_count: u64,

    /// First few matching lines, retained so the report feels concrete
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl LogMatchResult {
    /// Create a new match result
    pub fn new(file_path: impl Into<String>, match_count: u64) -> Self {
        Self {
            file_path: file_path.into(),
            match_count,
            examples: Vec::new(),
        }
    }

    /// Attach example matching lines
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }
}

/// Aggregated result of a log directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogScanSummary {
    /// Directory that was scanned, `None` when scanning was skipped
    pub directory: Option<String>,

    /// Number of regular files visited (unreadable files included)
    pub files_scanned: usize,

    /// Per-file results, ordered lexically by file name
    pub results: Vec<LogMatchResult>,

    /// Sum of all per-file match counts
    pub total_matches: u64,
}

impl LogScanSummary {
    /// Summary for a run where no log directory was configured
    pub fn skipped() -> Self {
        Self {
            directory: None,
            files_scanned: 0,
            results: Vec::new(),
            total_matches: 0,
        }
    }

    /// Build a summary from per-file results, computing the aggregates
    pub fn from_results(directory: impl Into<String>, results: Vec<LogMatchResult>) -> Self {
        let total_matches = results.iter().map(|r| r.match_count).sum();

        Self {
            directory: Some(directory.into()),
            files_scanned: results.len(),
            results,
            total_matches,
        }
    }
}
