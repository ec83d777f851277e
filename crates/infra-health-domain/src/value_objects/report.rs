//! Health report assembly and overall-status derivation
//!
//! A [`HealthReport`] is built exactly once per invocation and written to a
//! new timestamped file, never merged with prior reports. The overall status
//! aggregates all metric verdicts with a fixed precedence: ERROR dominates
//! WARN, WARN dominates OK.

use crate::constants::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::value_objects::logs::LogScanSummary;
use crate::value_objects::metric::{MetricStatus, MetricVerdict};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Host metadata captured alongside the metrics (OS, kernel, hostname, ...)
///
/// Ordered map so report serialization is stable across runs.
pub type HostMetadata = BTreeMap<String, String>;

/// Run-level aggregate status driving the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    /// All metrics below their thresholds
    Ok,
    /// At least one metric at or above its threshold
    Warn,
    /// At least one metric could not be sampled
    Error,
}

impl OverallStatus {
    /// Aggregate per-metric verdicts with fixed precedence
    ///
    /// Any [`MetricStatus::Unknown`] verdict forces `Error`; otherwise any
    /// [`MetricStatus::Warn`] verdict forces `Warn`. Verdict order never
    /// affects the result.
    pub fn from_verdicts(verdicts: &[MetricVerdict]) -> Self {
        let mut status = Self::Ok;
        for verdict in verdicts {
            match verdict.status {
                MetricStatus::Unknown => return Self::Error,
                MetricStatus::Warn => status = Self::Warn,
                MetricStatus::Ok => {}
            }
        }
        status
    }

    /// Process exit code for this status (0 OK, 1 WARN, 2 ERROR)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{label}")
    }
}

/// The full structured record persisted for one health-check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// When the run happened (serialized as RFC 3339)
    pub timestamp: DateTime<Local>,

    /// Host metadata (OS name and version, kernel, architecture, hostname)
    pub host_metadata: HostMetadata,

    /// Per-metric verdicts, in CPU / Memory / Disk order
    pub verdicts: Vec<MetricVerdict>,

    /// Log scan outcome for this run
    pub logs: LogScanSummary,

    /// Total keyword matches across all scanned log files
    pub log_total: u64,

    /// Run-level aggregate status
    pub overall_status: OverallStatus,
}

impl HealthReport {
    /// Assemble a report from the run's collected pieces
    ///
    /// Pure assembly plus the overall-status derivation; identical inputs
    /// produce structurally identical reports.
    pub fn build(
        host_metadata: HostMetadata,
        verdicts: Vec<MetricVerdict>,
        logs: LogScanSummary,
        timestamp: DateTime<Local>,
    ) -> Self {
        let overall_status = OverallStatus::from_verdicts(&verdicts);
        let log_total = logs.total_matches;

        Self {
            timestamp,
            host_metadata,
            verdicts,
            logs,
            log_total,
            overall_status,
        }
    }

    /// File name stem for this report, e.g. `health_report_2026-08-29_14-03-07`
    ///
    /// Second-level granularity; two runs starting within the same second
    /// would collide, which is an accepted limitation.
    pub fn file_stem(&self) -> String {
        format!(
            "{REPORT_FILE_PREFIX}{}",
            self.timestamp.format(REPORT_TIMESTAMP_FORMAT)
        )
    }
}
