//! Integration tests for report persistence

use chrono::{Local, TimeZone};
use infra_health_domain::error::Error;
use infra_health_domain::value_objects::logs::{LogMatchResult, LogScanSummary};
use infra_health_domain::value_objects::metric::{MetricKind, MetricSample, MetricVerdict};
use infra_health_domain::value_objects::report::{HealthReport, HostMetadata};
use infra_health_infrastructure::reporter::{ReportWriter, render_markdown};
use std::fs;

fn sample_report() -> HealthReport {
    let timestamp = Local
        .with_ymd_and_hms(2026, 8, 29, 14, 3, 7)
        .single()
        .expect("timestamp should be unambiguous");
    let mut metadata = HostMetadata::new();
    metadata.insert("os".to_string(), "Linux".to_string());
    metadata.insert("hostname".to_string(), "buildbox".to_string());

    HealthReport::build(
        metadata,
        vec![
            MetricVerdict::evaluate(MetricSample::available(MetricKind::Cpu, 81.8), 70.0),
            MetricVerdict::evaluate(MetricSample::available(MetricKind::Memory, 62.1), 75.0),
            MetricVerdict::evaluate(MetricSample::available(MetricKind::Disk, 3.3), 85.0),
        ],
        LogScanSummary::from_results(
            "logs",
            vec![LogMatchResult::new("logs/a.log", 1).with_examples(vec!["ERROR: x".to_string()])],
        ),
        timestamp,
    )
}

#[test]
fn test_persist_writes_timestamped_json() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let writer = ReportWriter::new(dir.path());
    let report = sample_report();

    let path = writer.persist(&report).expect("persist should succeed");

    assert_eq!(
        path.file_name().expect("path should have a file name"),
        "health_report_2026-08-29_14-03-07.json"
    );
    let content = fs::read_to_string(&path).expect("report should be readable");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("report should be valid JSON");
    assert_eq!(parsed["overall_status"], "WARN");
    assert_eq!(parsed["log_total"], 1);
}

#[test]
fn test_persist_creates_output_directory() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let nested = dir.path().join("deeply").join("nested").join("reports");
    let writer = ReportWriter::new(&nested);

    let path = writer
        .persist(&sample_report())
        .expect("persist should succeed");

    assert!(nested.is_dir());
    assert!(path.exists());
}

#[test]
fn test_persist_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let writer = ReportWriter::new(dir.path());
    writer
        .persist(&sample_report())
        .expect("persist should succeed");

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read_dir should succeed")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_persist_fails_when_directory_cannot_be_created() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    // A regular file where a directory component is needed
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write should succeed");

    let writer = ReportWriter::new(blocker.join("reports"));
    let err = writer
        .persist(&sample_report())
        .expect_err("persist should fail");

    assert!(matches!(err, Error::ReportWrite { .. }));
}

#[test]
fn test_markdown_export_contains_summary_sections() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let writer = ReportWriter::new(dir.path());

    let path = writer
        .export_markdown(&sample_report())
        .expect("markdown export should succeed");

    assert_eq!(
        path.file_name().expect("path should have a file name"),
        "health_report_2026-08-29_14-03-07.md"
    );
    let content = fs::read_to_string(&path).expect("markdown should be readable");
    assert!(content.contains("# Infrastructure Health Report"));
    assert!(content.contains("CPU Usage: **81.8%** [WARN]"));
    assert!(content.contains("Memory Usage: **62.1%** [OK]"));
    assert!(content.contains("- `logs/a.log`: **1**"));
}

#[test]
fn test_render_markdown_handles_missing_metric() {
    let report = HealthReport::build(
        HostMetadata::new(),
        vec![MetricVerdict::evaluate(
            MetricSample::unavailable(MetricKind::Cpu),
            80.0,
        )],
        LogScanSummary::skipped(),
        Local::now(),
    );

    let markdown = render_markdown(&report);
    assert!(markdown.contains("CPU Usage: **unavailable** [UNKNOWN]"));
    assert!(markdown.contains("Log scanning was skipped"));
    assert!(markdown.contains("**Overall status:** ERROR"));
}
