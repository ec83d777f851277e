//! Metric sample and verdict value objects
//!
//! A [`MetricSample`] carries one utilization percentage as sampled from the
//! host (or `None` when the sampler could not obtain it). A [`MetricVerdict`]
//! is the sample classified against its warning threshold. Both are built
//! once per run and never mutated.

use crate::constants::PERCENT_UNIT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The metric being sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Global CPU utilization
    Cpu,
    /// Physical memory utilization
    Memory,
    /// Disk utilization of the root filesystem
    Disk,
}

impl MetricKind {
    /// Human-readable name used in console summaries and Markdown reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Disk => "Disk",
        }
    }
}

/// Classification of a single metric against its warning threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricStatus {
    /// Value is below the warning threshold
    Ok,
    /// Value is at or above the warning threshold
    Warn,
    /// The sampler could not obtain a value
    Unknown,
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{label}")
    }
}

/// One sampled utilization percentage
///
/// The missing-value case is modeled as an explicit `Option` rather than a
/// sentinel number, so a legitimate 0% reading is never ambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Which metric this sample measures
    pub kind: MetricKind,

    /// Sampled value in `[0, 100]`, or `None` when unavailable
    pub value: Option<f64>,

    /// Unit of the value (always `%`)
    pub unit: String,

    /// Logical core count (CPU samples only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores_logical: Option<usize>,

    /// Total capacity in GiB (memory and disk samples only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gb: Option<f64>,
}

impl MetricSample {
    /// Create a sample with an available value
    pub fn available(kind: MetricKind, value: f64) -> Self {
        Self {
            kind,
            value: Some(value),
            unit: PERCENT_UNIT.to_string(),
            cores_logical: None,
            total_gb: None,
        }
    }

    /// Create a sample for a metric the sampler could not obtain
    pub fn unavailable(kind: MetricKind) -> Self {
        Self {
            kind,
            value: None,
            unit: PERCENT_UNIT.to_string(),
            cores_logical: None,
            total_gb: None,
        }
    }

    /// Attach the logical core count (CPU samples)
    pub fn with_cores_logical(mut self, cores: usize) -> Self {
        self.cores_logical = Some(cores);
        self
    }

    /// Attach the total capacity in GiB (memory and disk samples)
    pub fn with_total_gb(mut self, total_gb: f64) -> Self {
        self.total_gb = Some(total_gb);
        self
    }
}

/// A metric sample classified against its warning threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricVerdict {
    /// The sample being classified
    pub sample: MetricSample,

    /// Warning threshold in percent the sample was compared against
    pub threshold: f64,

    /// Resulting classification
    pub status: MetricStatus,
}

impl MetricVerdict {
    /// Classify a sample against a warning threshold
    ///
    /// Total over its domain: a missing value yields [`MetricStatus::Unknown`],
    /// a value at or above the threshold yields [`MetricStatus::Warn`]
    /// (boundary inclusive), anything else yields [`MetricStatus::Ok`].
    pub fn evaluate(sample: MetricSample, threshold: f64) -> Self {
        let status = match sample.value {
            None => MetricStatus::Unknown,
            Some(value) if value >= threshold => MetricStatus::Warn,
            Some(_) => MetricStatus::Ok,
        };

        Self {
            sample,
            threshold,
            status,
        }
    }
}
