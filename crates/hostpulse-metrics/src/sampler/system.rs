//! `sysinfo`-backed sampler.
//!
//! CPU usage is a delta between two refreshes, so a sample costs one
//! `interval` of wall time. The wait is a tokio timer; the worker thread is
//! free meanwhile.

use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{CpuRefreshKind, System};

use hostpulse_core::{
    error::{HostPulseError, Result},
    protocol::HostSample,
};

use super::HostSampler;

#[derive(Debug, Clone)]
pub struct SysinfoSampler {
    interval: Duration,
}

impl SysinfoSampler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl HostSampler for SysinfoSampler {
    async fn sample(&self) -> Result<HostSample> {
        let cpu_kind = CpuRefreshKind::new().with_cpu_usage();

        let mut sys = System::new();
        sys.refresh_cpu_specifics(cpu_kind);
        tokio::time::sleep(self.interval).await;
        sys.refresh_cpu_specifics(cpu_kind);
        sys.refresh_memory();

        read_sample(&sys)
    }
}

fn read_sample(sys: &System) -> Result<HostSample> {
    sample_from_readings(RawReadings {
        cpu_count: sys.cpus().len(),
        cpu_usage: sys.global_cpu_info().cpu_usage(),
        total_memory: sys.total_memory(),
        available_memory: sys.available_memory(),
        used_memory: sys.used_memory(),
    })
}

/// Figures as reported by the OS, before any checks.
#[derive(Debug, Clone, Copy)]
struct RawReadings {
    cpu_count: usize,
    cpu_usage: f32,
    total_memory: u64,
    available_memory: u64,
    used_memory: u64,
}

fn sample_from_readings(r: RawReadings) -> Result<HostSample> {
    if r.cpu_count == 0 {
        return Err(HostPulseError::Sampling("no cpus reported".into()));
    }
    let cpu = f64::from(r.cpu_usage);
    if !cpu.is_finite() {
        return Err(HostPulseError::Sampling(format!("non-finite cpu reading: {cpu}")));
    }

    let total = r.total_memory;
    if total == 0 {
        return Err(HostPulseError::Sampling("total memory reported as zero".into()));
    }
    let available = r.available_memory.min(total);
    let used = r.used_memory.min(total);
    let memory_percent = (total - available) as f64 / total as f64 * 100.0;

    Ok(HostSample {
        cpu_percent: cpu,
        memory_percent,
        total_memory_bytes: total,
        used_memory_bytes: used,
    })
}
