//! Infrastructure layer for infra-health
//!
//! Cross-cutting technical concerns behind the domain ports: layered
//! configuration (defaults, TOML file, environment), structured logging,
//! the sysinfo-backed metric sampler, the log directory scanner, and
//! atomic report persistence.

/// Layered configuration loading and types
pub mod config;
/// Infrastructure layer constants
pub mod constants;
/// Error context extension utilities
pub mod error_ext;
/// Structured logging with tracing
pub mod logging;
/// Report persistence (JSON and Markdown)
pub mod reporter;
/// Host metric samplers (real and simulated)
pub mod sampler;
/// Log directory keyword scanner
pub mod scanner;

// Re-export the pieces the facade wires together
pub use config::{AppConfig, ConfigLoader};
pub use reporter::ReportWriter;
pub use sampler::{SimulatedSampler, SimulationMode, SysinfoSampler};
pub use scanner::LogScanner;
