//! Configuration types and validation

use crate::constants::DEFAULT_LOG_LEVEL;
use infra_health_domain::constants::{
    DEFAULT_CPU_WARN_PERCENT, DEFAULT_DISK_WARN_PERCENT, DEFAULT_LOG_KEYWORDS,
    DEFAULT_MAX_EXAMPLE_LINES, DEFAULT_MEM_WARN_PERCENT, DEFAULT_REPORTS_DIR,
};
use infra_health_domain::error::{Error, Result};
use infra_health_domain::value_objects::metric::MetricKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-metric warning thresholds in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// CPU warning threshold
    pub cpu_warn: f64,

    /// Memory warning threshold
    pub mem_warn: f64,

    /// Disk warning threshold
    pub disk_warn: f64,
}

impl ThresholdConfig {
    /// Threshold for a given metric kind
    pub fn warn_threshold(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Cpu => self.cpu_warn,
            MetricKind::Memory => self.mem_warn,
            MetricKind::Disk => self.disk_warn,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu_warn: DEFAULT_CPU_WARN_PERCENT,
            mem_warn: DEFAULT_MEM_WARN_PERCENT,
            disk_warn: DEFAULT_DISK_WARN_PERCENT,
        }
    }
}

/// Log scanning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogScanConfig {
    /// Directory to scan; `None` skips scanning entirely
    pub directory: Option<PathBuf>,

    /// Keywords matched as case-insensitive substrings
    pub keywords: Vec<String>,

    /// Example matching lines retained per file
    pub max_examples: usize,
}

impl Default for LogScanConfig {
    fn default() -> Self {
        Self {
            directory: None,
            keywords: DEFAULT_LOG_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            max_examples: DEFAULT_MAX_EXAMPLE_LINES,
        }
    }
}

/// Report persistence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory reports are written to (created on demand)
    pub output_dir: PathBuf,

    /// Also export a human-readable Markdown report
    pub export_markdown: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            export_markdown: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Warning thresholds
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Log scanning
    #[serde(default)]
    pub logs: LogScanConfig,

    /// Report persistence
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate invariants that figment extraction cannot express
    ///
    /// Thresholds must be finite percentages in `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("thresholds.cpu_warn", self.thresholds.cpu_warn),
            ("thresholds.mem_warn", self.thresholds.mem_warn),
            ("thresholds.disk_warn", self.thresholds.disk_warn),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(Error::config(format!(
                    "{name} must be a percentage in [0, 100], got {value}"
                )));
            }
        }

        Ok(())
    }
}
