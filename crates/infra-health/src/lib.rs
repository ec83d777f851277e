//! # infra-health
//!
//! A local host health-check utility. One invocation samples CPU, memory,
//! and disk utilization, optionally scans a directory of log files for
//! keyword matches, evaluates everything against configurable warning
//! thresholds, prints a console summary, and persists a timestamped JSON
//! report. The exit code is deterministic (0 OK, 1 WARN, 2 ERROR), which
//! makes the tool usable as a CI/CD gate.
//!
//! ## Architecture
//!
//! - `domain` - metric verdicts, log scan results, report assembly, ports
//! - `infrastructure` - config, logging, samplers, scanner, report writer
//! - [`run`] - CLI definition and run orchestration
//!
//! ## Example
//!
//! ```no_run
//! use clap::Parser;
//! use infra_health::run::{Cli, run};
//!
//! let cli = Cli::parse_from(["infra-health", "--simulate", "ok", "--no-save"]);
//! let status = run(&cli).expect("health check should run");
//! assert_eq!(status.exit_code(), 0);
//! ```

/// Domain layer - core types and evaluation logic
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use infra_health_domain::*;
}

/// Infrastructure layer - config, logging, sampling, scanning, persistence
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use infra_health_infrastructure::*;
}

/// CLI definition and run orchestration
pub mod run;

// Re-export the types most callers need
pub use infra_health_domain::value_objects::report::{HealthReport, OverallStatus};
pub use run::{Cli, run};
