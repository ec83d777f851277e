//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. The domain
//! defines the interfaces; infrastructure implements them. This keeps the
//! evaluation and report logic testable with fixed samplers.

/// Metric sampling port
pub mod sampler;

// Re-export commonly used port types for convenience
pub use sampler::{HostSnapshot, MetricSampler};
