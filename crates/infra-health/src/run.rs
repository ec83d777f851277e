//! CLI definition and run orchestration
//!
//! One run is strictly sequential: load config, initialize logging, sample
//! metrics, evaluate verdicts, scan logs, build the report, print the
//! summary, persist. Per-metric and per-file failures are absorbed into the
//! report (UNKNOWN verdicts, zero-match results); only configuration and
//! report-write failures abort the run.

use chrono::Local;
use clap::Parser;
use infra_health_domain::error::Result;
use infra_health_domain::ports::MetricSampler;
use infra_health_domain::value_objects::metric::MetricVerdict;
use infra_health_domain::value_objects::report::{HealthReport, OverallStatus};
use infra_health_infrastructure::config::{AppConfig, ConfigLoader};
use infra_health_infrastructure::logging::init_logging;
use infra_health_infrastructure::reporter::ReportWriter;
use infra_health_infrastructure::sampler::{SimulatedSampler, SimulationMode, SysinfoSampler};
use infra_health_infrastructure::scanner::LogScanner;
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for infra-health
#[derive(Parser, Debug, Clone)]
#[command(name = "infra-health")]
#[command(about = "Local host health check - metrics, log scan, report")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (default: ./infra-health.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CPU warning threshold percent
    #[arg(long)]
    pub cpu_warn: Option<f64>,

    /// Memory warning threshold percent
    #[arg(long)]
    pub mem_warn: Option<f64>,

    /// Disk warning threshold percent
    #[arg(long)]
    pub disk_warn: Option<f64>,

    /// Directory of log files to scan; omit to skip scanning
    #[arg(long)]
    pub logs_dir: Option<PathBuf>,

    /// Keyword to scan for (repeatable, replaces the default set)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Directory reports are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not print the console summary (only save and print paths)
    #[arg(long)]
    pub json_only: bool,

    /// Suppress the completion lines
    #[arg(long)]
    pub quiet: bool,

    /// Also export a Markdown report
    #[arg(long)]
    pub export_md: bool,

    /// Do not save a report file (quick check)
    #[arg(long)]
    pub no_save: bool,

    /// Substitute fixed preset metrics for demo purposes
    #[arg(long, value_enum)]
    pub simulate: Option<SimulationMode>,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Load layered configuration and apply CLI overrides on top
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;

    if let Some(value) = cli.cpu_warn {
        config.thresholds.cpu_warn = value;
    }
    if let Some(value) = cli.mem_warn {
        config.thresholds.mem_warn = value;
    }
    if let Some(value) = cli.disk_warn {
        config.thresholds.disk_warn = value;
    }
    if let Some(dir) = &cli.logs_dir {
        config.logs.directory = Some(dir.clone());
    }
    if !cli.keywords.is_empty() {
        config.logs.keywords = cli.keywords.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.report.output_dir = dir.clone();
    }
    if cli.export_md {
        config.report.export_markdown = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    // CLI overrides can violate the same invariants as file values
    config.validate()?;

    Ok(config)
}

/// Sample, evaluate, scan, and assemble the report for one run
///
/// Never fails: sampling and scanning degrade into the data model rather
/// than raising.
pub fn collect_report(config: &AppConfig, sampler: &mut dyn MetricSampler) -> HealthReport {
    let snapshot = sampler.sample();

    let verdicts = vec![
        MetricVerdict::evaluate(snapshot.cpu, config.thresholds.cpu_warn),
        MetricVerdict::evaluate(snapshot.memory, config.thresholds.mem_warn),
        MetricVerdict::evaluate(snapshot.disk, config.thresholds.disk_warn),
    ];

    let scanner = LogScanner::new(&config.logs.keywords, config.logs.max_examples);
    let logs = scanner.scan(config.logs.directory.as_deref());

    HealthReport::build(snapshot.metadata, verdicts, logs, Local::now())
}

/// Execute a full health-check run
///
/// Returns the overall status so the binary can derive the exit code.
/// Configuration and persistence failures surface as errors (exit 2).
pub fn run(cli: &Cli) -> Result<OverallStatus> {
    let config = load_config(cli)?;
    init_logging(&config.logging)?;

    let mut sampler: Box<dyn MetricSampler> = match cli.simulate {
        Some(mode) => {
            debug!("Using simulated metrics ({mode:?})");
            Box::new(SimulatedSampler::new(mode))
        }
        None => Box::new(SysinfoSampler::new()),
    };

    let report = collect_report(&config, sampler.as_mut());

    if !cli.json_only {
        print_summary(&report);
    }

    let mut json_path = None;
    let mut md_path = None;
    if !cli.no_save {
        let writer = ReportWriter::new(&config.report.output_dir);
        json_path = Some(writer.persist(&report)?);
        if config.report.export_markdown {
            md_path = Some(writer.export_markdown(&report)?);
        }
    }

    if !cli.quiet {
        println!("Health check complete.");
        if cli.no_save {
            println!("No files saved (--no-save).");
        } else {
            if let Some(path) = &json_path {
                println!("JSON report saved to: {}", path.display());
            }
            if let Some(path) = &md_path {
                println!("Markdown report saved to: {}", path.display());
            }
        }
    }

    Ok(report.overall_status)
}

/// Print the human-readable summary block to stdout
fn print_summary(report: &HealthReport) {
    println!("\n--- Infrastructure Health Summary ---");
    for verdict in &report.verdicts {
        let name = verdict.sample.kind.display_name();
        match verdict.sample.value {
            Some(value) => println!("{name} Usage: {value:.1}% [{}]", verdict.status),
            None => println!("{name} Usage: unavailable [{}]", verdict.status),
        }
    }
    println!("Log Issues: {} total matches", report.log_total);
    println!("------------------------------------\n");
}
