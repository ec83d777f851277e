//! Layered configuration
//!
//! Configuration is merged from defaults, an optional TOML file, and
//! prefixed environment variables, in that order. CLI flags are applied by
//! the facade as explicit overrides after extraction.

/// Figment-based configuration loader
pub mod loader;
/// Configuration types and validation
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LogScanConfig, LoggingConfig, ReportConfig, ThresholdConfig};
