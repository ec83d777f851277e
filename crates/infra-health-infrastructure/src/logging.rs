//! Structured logging with tracing
//!
//! Configures structured logging for the tool: level filtering via
//! `EnvFilter`, optional JSON output, and an optional daily-rolling log
//! file. Diagnostics go to stderr so they never mix with the console
//! summary on stdout.

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use infra_health_domain::error::{Error, Result};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// The `INFRA_HEALTH_LOG` environment variable overrides the configured
/// level with a full EnvFilter directive. Repeated initialization is a
/// no-op (the first subscriber wins), which keeps this safe to call from
/// tests.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Configure file appender if file output is specified
    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new("infra-health")),
        )
    });

    // Initialize based on json_format (layer types differ, so separate branches)
    if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            let _ = registry.with(stderr).with(file).try_init();
        } else {
            let _ = registry.with(stderr).try_init();
        }
    } else {
        let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            let _ = registry.with(stderr).with(file).try_init();
        } else {
            let _ = registry.with(stderr).try_init();
        }
    }

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
