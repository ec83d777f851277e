//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `infra_health_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "infra-health.toml";

/// Environment variable prefix for configuration
///
/// Nested keys use a double underscore, e.g.
/// `INFRA_HEALTH_THRESHOLDS__CPU_WARN=90`.
pub const CONFIG_ENV_PREFIX: &str = "INFRA_HEALTH";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for an EnvFilter directive override
pub const LOG_FILTER_ENV: &str = "INFRA_HEALTH_LOG";

// ============================================================================
// PERSISTENCE CONSTANTS
// ============================================================================

/// Suffix for the temporary file used during atomic report writes
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
