//! Metric sampling port
//!
//! Implemented by the infrastructure layer (sysinfo-backed sampler,
//! simulated sampler) and by fixed samplers in tests.

use crate::value_objects::metric::MetricSample;
use crate::value_objects::report::HostMetadata;

/// Everything sampled from the host in one pass
#[derive(Debug, Clone, PartialEq)]
pub struct HostSnapshot {
    /// OS and hardware metadata
    pub metadata: HostMetadata,

    /// Global CPU utilization sample
    pub cpu: MetricSample,

    /// Physical memory utilization sample
    pub memory: MetricSample,

    /// Root filesystem utilization sample
    pub disk: MetricSample,
}

/// Source of host metrics
///
/// Sampling never fails the run: a metric the implementation cannot obtain
/// is returned as an unavailable [`MetricSample`], which the evaluator turns
/// into an UNKNOWN verdict.
pub trait MetricSampler {
    /// Take one snapshot of the host
    fn sample(&mut self) -> HostSnapshot;
}
