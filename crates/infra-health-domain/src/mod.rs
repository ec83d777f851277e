//! Domain layer for infra-health
//!
//! Core types and logic for the host health-check tool: metric samples and
//! their threshold verdicts, log scan results, the health report with its
//! overall-status derivation, the error taxonomy, and the sampler port.
//!
//! This crate is pure: no I/O, no clock access. Timestamps and samples are
//! supplied by callers, which keeps every operation in here independently
//! testable.

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Boundary contracts implemented by external layers
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

// Re-export the most commonly used types at the crate root
pub use error::{Error, Result};
pub use ports::{HostSnapshot, MetricSampler};
pub use value_objects::{
    HealthReport, HostMetadata, LogMatchResult, LogScanSummary, MetricKind, MetricSample,
    MetricStatus, MetricVerdict, OverallStatus,
};
