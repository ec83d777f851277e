//! Report persistence
//!
//! Writes one JSON report per run to `<output_dir>/health_report_<ts>.json`,
//! optionally alongside a human-readable Markdown rendering. Writes are
//! atomic: content goes to a temporary file in the target directory first
//! and is renamed into place, so a failed run never leaves a truncated
//! report behind.

use crate::constants::TEMP_FILE_SUFFIX;
use crate::error_ext::ErrorContext;
use infra_health_domain::error::Result;
use infra_health_domain::value_objects::metric::MetricVerdict;
use infra_health_domain::value_objects::report::HealthReport;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes health reports to the configured output directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting the given directory
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Persist the report as JSON, returning the final file path
    ///
    /// Creates the output directory if absent. Failure here is fatal to the
    /// run and maps to exit code 2.
    pub fn persist(&self, report: &HealthReport) -> Result<PathBuf> {
        let path = self.prepare_target(report, "json")?;
        let json = serde_json::to_string_pretty(report)?;
        self.write_atomic(&path, json.as_bytes())?;
        info!("Report written to {}", path.display());
        Ok(path)
    }

    /// Export the report as Markdown, returning the final file path
    pub fn export_markdown(&self, report: &HealthReport) -> Result<PathBuf> {
        let path = self.prepare_target(report, "md")?;
        let markdown = render_markdown(report);
        self.write_atomic(&path, markdown.as_bytes())?;
        info!("Markdown report written to {}", path.display());
        Ok(path)
    }

    fn prepare_target(&self, report: &HealthReport, extension: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).report_context(format!(
            "Failed to create output directory {}",
            self.output_dir.display()
        ))?;

        Ok(self
            .output_dir
            .join(format!("{}.{extension}", report.file_stem())))
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut temp_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        temp_name.push_str(TEMP_FILE_SUFFIX);
        let temp_path = self.output_dir.join(temp_name);

        std::fs::write(&temp_path, bytes)
            .report_context(format!("Failed to write {}", temp_path.display()))?;

        if let Err(err) = std::fs::rename(&temp_path, path) {
            // Leave nothing half-written behind
            let _ = std::fs::remove_file(&temp_path);
            return Err(err).report_context(format!("Failed to move report to {}", path.display()));
        }

        Ok(())
    }
}

/// Render a human-readable Markdown version of the report
pub fn render_markdown(report: &HealthReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Infrastructure Health Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated:** {}", report.timestamp.to_rfc3339());
    let _ = writeln!(out, "**Overall status:** {}", report.overall_status);
    let _ = writeln!(out);

    let _ = writeln!(out, "## System");
    for (key, value) in &report.host_metadata {
        let _ = writeln!(out, "- {key}: **{value}**");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Metrics");
    for verdict in &report.verdicts {
        let _ = writeln!(out, "- {}", render_metric_line(verdict));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Log Analysis");
    match &report.logs.directory {
        Some(directory) => {
            let _ = writeln!(out, "- Directory: **{directory}**");
            let _ = writeln!(out, "- Files scanned: **{}**", report.logs.files_scanned);
            let _ = writeln!(out, "- Total matches: **{}**", report.log_total);
            if !report.logs.results.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "### Per-file matches");
                for result in &report.logs.results {
                    let _ = writeln!(out, "- `{}`: **{}**", result.file_path, result.match_count);
                    for example in &result.examples {
                        let _ = writeln!(out, "  - `{example}`");
                    }
                }
            }
        }
        None => {
            let _ = writeln!(out, "- Log scanning was skipped (no directory configured)");
        }
    }

    out
}

fn render_metric_line(verdict: &MetricVerdict) -> String {
    let name = verdict.sample.kind.display_name();
    match verdict.sample.value {
        Some(value) => format!(
            "{name} Usage: **{value:.1}%** [{}] (warn at {}%)",
            verdict.status, verdict.threshold
        ),
        None => format!("{name} Usage: **unavailable** [{}]", verdict.status),
    }
}
