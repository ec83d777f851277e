//! Unit tests for metric samples and threshold evaluation

use infra_health_domain::value_objects::metric::{
    MetricKind, MetricSample, MetricStatus, MetricVerdict,
};

#[test]
fn test_evaluate_below_threshold_is_ok() {
    let sample = MetricSample::available(MetricKind::Cpu, 42.5);
    let verdict = MetricVerdict::evaluate(sample, 80.0);

    assert_eq!(verdict.status, MetricStatus::Ok);
    assert_eq!(verdict.threshold, 80.0);
    assert_eq!(verdict.sample.value, Some(42.5));
}

#[test]
fn test_evaluate_above_threshold_is_warn() {
    let sample = MetricSample::available(MetricKind::Memory, 91.2);
    let verdict = MetricVerdict::evaluate(sample, 80.0);

    assert_eq!(verdict.status, MetricStatus::Warn);
}

#[test]
fn test_evaluate_boundary_is_inclusive() {
    // value == threshold must classify as WARN
    let sample = MetricSample::available(MetricKind::Disk, 80.0);
    let verdict = MetricVerdict::evaluate(sample, 80.0);

    assert_eq!(verdict.status, MetricStatus::Warn);
}

#[test]
fn test_evaluate_missing_value_is_unknown() {
    let sample = MetricSample::unavailable(MetricKind::Cpu);
    let verdict = MetricVerdict::evaluate(sample, 80.0);

    assert_eq!(verdict.status, MetricStatus::Unknown);
    assert_eq!(verdict.sample.value, None);
}

#[test]
fn test_evaluate_zero_threshold_warns_on_zero_usage() {
    let sample = MetricSample::available(MetricKind::Cpu, 0.0);
    let verdict = MetricVerdict::evaluate(sample, 0.0);

    assert_eq!(verdict.status, MetricStatus::Warn);
}

#[test]
fn test_evaluate_full_usage_below_max_threshold() {
    let sample = MetricSample::available(MetricKind::Disk, 99.9);
    let verdict = MetricVerdict::evaluate(sample, 100.0);

    assert_eq!(verdict.status, MetricStatus::Ok);
}

#[test]
fn test_sample_builders_attach_details() {
    let cpu = MetricSample::available(MetricKind::Cpu, 12.3).with_cores_logical(8);
    let disk = MetricSample::available(MetricKind::Disk, 60.0).with_total_gb(512.0);

    assert_eq!(cpu.cores_logical, Some(8));
    assert_eq!(cpu.total_gb, None);
    assert_eq!(disk.total_gb, Some(512.0));
    assert_eq!(disk.unit, "%");
}

#[test]
fn test_metric_status_serializes_uppercase() {
    let json = serde_json::to_string(&MetricStatus::Warn).expect("serialization should succeed");
    assert_eq!(json, "\"WARN\"");

    let json = serde_json::to_string(&MetricStatus::Unknown).expect("serialization should succeed");
    assert_eq!(json, "\"UNKNOWN\"");
}

#[test]
fn test_verdict_serialization_round_trip() {
    let verdict = MetricVerdict::evaluate(MetricSample::available(MetricKind::Memory, 62.1), 75.0);
    let json = serde_json::to_string(&verdict).expect("serialization should succeed");
    let deserialized: MetricVerdict =
        serde_json::from_str(&json).expect("deserialization should succeed");

    assert_eq!(verdict, deserialized);
}

#[test]
fn test_metric_kind_display_names() {
    assert_eq!(MetricKind::Cpu.display_name(), "CPU");
    assert_eq!(MetricKind::Memory.display_name(), "Memory");
    assert_eq!(MetricKind::Disk.display_name(), "Disk");
}
