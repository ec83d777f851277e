//! Host metric samplers
//!
//! [`SysinfoSampler`] reads real CPU, memory, and disk utilization through
//! the sysinfo crate. [`SimulatedSampler`] substitutes fixed preset values
//! while keeping real host metadata, so the rest of the run behaves
//! identically; useful for demos and deterministic tests.
//!
//! Sampling never fails the run: a metric that cannot be obtained is
//! returned as an unavailable sample and surfaces as an UNKNOWN verdict.

use clap::ValueEnum;
use infra_health_domain::ports::{HostSnapshot, MetricSampler};
use infra_health_domain::value_objects::metric::{MetricKind, MetricSample};
use infra_health_domain::value_objects::report::HostMetadata;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tracing::{debug, warn};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Metric sampler backed by the sysinfo crate
pub struct SysinfoSampler {
    system: System,
}

impl SysinfoSampler {
    /// Create a sampler and take the initial CPU reading
    ///
    /// CPU usage needs two spaced refreshes; the constructor performs the
    /// first so [`MetricSampler::sample`] only has to wait the minimum
    /// interval.
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self { system }
    }

    fn cpu_sample(&self) -> MetricSample {
        let cpus = self.system.cpus();
        if cpus.is_empty() {
            warn!("No CPU information available");
            return MetricSample::unavailable(MetricKind::Cpu);
        }

        MetricSample::available(MetricKind::Cpu, f64::from(self.system.global_cpu_usage()))
            .with_cores_logical(cpus.len())
    }

    fn memory_sample(&self) -> MetricSample {
        let total = self.system.total_memory();
        if total == 0 {
            warn!("No memory information available");
            return MetricSample::unavailable(MetricKind::Memory);
        }

        let used = self.system.used_memory();
        let percent = (used as f64 / total as f64) * 100.0;
        MetricSample::available(MetricKind::Memory, percent).with_total_gb(to_gib(total))
    }

    fn disk_sample(&self) -> MetricSample {
        let disks = Disks::new_with_refreshed_list();

        // Prefer the disk mounted at the filesystem root; fall back to the
        // largest listed disk (containers often do not list `/`).
        let disk = disks
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new("/"))
            .or_else(|| disks.iter().max_by_key(|d| d.total_space()));

        let Some(disk) = disk else {
            debug!("No disks found when sampling");
            return MetricSample::unavailable(MetricKind::Disk);
        };

        let total = disk.total_space();
        if total == 0 {
            return MetricSample::unavailable(MetricKind::Disk);
        }

        let used = total.saturating_sub(disk.available_space());
        let percent = (used as f64 / total as f64) * 100.0;
        MetricSample::available(MetricKind::Disk, percent).with_total_gb(to_gib(total))
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSampler for SysinfoSampler {
    fn sample(&mut self) -> HostSnapshot {
        // Second CPU refresh; usage is computed from the delta since the
        // refresh done at construction.
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        HostSnapshot {
            metadata: host_metadata(),
            cpu: self.cpu_sample(),
            memory: self.memory_sample(),
            disk: self.disk_sample(),
        }
    }
}

/// Collect OS and hardware metadata for the report
///
/// Entries the platform cannot provide are omitted rather than filled with
/// placeholders.
pub fn host_metadata() -> HostMetadata {
    let mut metadata = HostMetadata::new();

    if let Some(name) = System::name() {
        metadata.insert("os".to_string(), name);
    }
    if let Some(version) = System::os_version() {
        metadata.insert("os_version".to_string(), version);
    }
    if let Some(kernel) = System::kernel_version() {
        metadata.insert("kernel".to_string(), kernel);
    }
    metadata.insert("architecture".to_string(), System::cpu_arch());
    if let Ok(name) = hostname::get() {
        metadata.insert("hostname".to_string(), name.to_string_lossy().into_owned());
    }

    metadata
}

/// Preset metric profiles for simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SimulationMode {
    /// Everything comfortably below default thresholds
    Ok,
    /// Values hovering around default thresholds
    Warn,
    /// Severely loaded host
    Critical,
}

impl SimulationMode {
    /// Preset (cpu, memory, disk) percentages for this mode
    fn presets(self) -> (f64, f64, f64) {
        match self {
            Self::Ok => (10.0, 45.0, 30.0),
            Self::Warn => (75.0, 78.0, 85.0),
            Self::Critical => (95.0, 94.0, 98.0),
        }
    }
}

/// Sampler that returns fixed preset values with real host metadata
pub struct SimulatedSampler {
    mode: SimulationMode,
}

impl SimulatedSampler {
    /// Create a sampler for the given simulation mode
    pub fn new(mode: SimulationMode) -> Self {
        Self { mode }
    }
}

impl MetricSampler for SimulatedSampler {
    fn sample(&mut self) -> HostSnapshot {
        let (cpu, memory, disk) = self.mode.presets();

        HostSnapshot {
            metadata: host_metadata(),
            cpu: MetricSample::available(MetricKind::Cpu, cpu),
            memory: MetricSample::available(MetricKind::Memory, memory),
            disk: MetricSample::available(MetricKind::Disk, disk),
        }
    }
}

fn to_gib(bytes: u64) -> f64 {
    let gib = bytes as f64 / BYTES_PER_GIB;
    (gib * 100.0).round() / 100.0
}
