//! Domain layer constants
//!
//! Contains constants that are part of the health-check domain logic.
//! Infrastructure-specific constants (config file names, env prefixes)
//! live in `infra_health_infrastructure::constants`.

// ============================================================================
// THRESHOLD CONSTANTS
// ============================================================================

/// Default CPU warning threshold in percent
pub const DEFAULT_CPU_WARN_PERCENT: f64 = 80.0;

/// Default memory warning threshold in percent
pub const DEFAULT_MEM_WARN_PERCENT: f64 = 80.0;

/// Default disk warning threshold in percent
pub const DEFAULT_DISK_WARN_PERCENT: f64 = 80.0;

// ============================================================================
// LOG SCAN CONSTANTS
// ============================================================================

/// Default keyword set for log scanning (matched case-insensitively)
pub const DEFAULT_LOG_KEYWORDS: &[&str] =
    &["error", "warning", "warn", "failed", "timeout", "exception"];

/// Maximum number of example matching lines retained per scanned file
pub const DEFAULT_MAX_EXAMPLE_LINES: usize = 3;

// ============================================================================
// REPORT CONSTANTS
// ============================================================================

/// File name prefix for persisted reports
pub const REPORT_FILE_PREFIX: &str = "health_report_";

/// strftime format for the timestamp embedded in report file names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Default directory for persisted reports
pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Unit string for percentage metrics
pub const PERCENT_UNIT: &str = "%";
