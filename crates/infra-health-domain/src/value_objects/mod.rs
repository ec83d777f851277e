//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the health-check
//! domain without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`MetricSample`] | A single sampled utilization percentage (or its absence) |
//! | [`MetricVerdict`] | A sample classified against its warning threshold |
//! | [`LogMatchResult`] | Keyword match count for one scanned log file |
//! | [`LogScanSummary`] | Aggregated result of a log directory scan |
//! | [`HealthReport`] | The full per-run report written to disk |

/// Log scan value objects
pub mod logs;
/// Metric sample and verdict value objects
pub mod metric;
/// Health report assembly and overall-status derivation
pub mod report;

// Re-export commonly used value objects
pub use logs::{LogMatchResult, LogScanSummary};
pub use metric::{MetricKind, MetricSample, MetricStatus, MetricVerdict};
pub use report::{HealthReport, HostMetadata, OverallStatus};
