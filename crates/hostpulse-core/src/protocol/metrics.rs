//! Host utilization payloads.
//!
//! `HostSample` is what a sampler reads from the OS. `MetricsBody` is what the
//! `/metrics` route returns: percentages clamped to `[0, 100]`, memory in
//! binary gigabytes, everything rounded to two decimals, and
//! `used_memory_gb <= total_memory_gb`.

use serde::{Deserialize, Serialize};

use crate::units::{bytes_to_gib, clamp_percent, round2};

/// Raw host reading taken at one sampling instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSample {
    /// Global CPU utilization averaged over the sampling interval.
    pub cpu_percent: f64,
    /// Share of memory in use.
    pub memory_percent: f64,
    pub total_memory_bytes: u64,
    pub used_memory_bytes: u64,
}

/// Body of `GET /metrics`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsBody {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub total_memory_gb: f64,
    pub used_memory_gb: f64,
}

impl MetricsBody {
    pub fn from_sample(s: &HostSample) -> Self {
        let used = s.used_memory_bytes.min(s.total_memory_bytes);
        Self {
            cpu_percent: round2(clamp_percent(s.cpu_percent)),
            memory_percent: round2(clamp_percent(s.memory_percent)),
            total_memory_gb: round2(bytes_to_gib(s.total_memory_bytes)),
            used_memory_gb: round2(bytes_to_gib(used)),
        }
    }

    /// Check the bounds every response must satisfy.
    pub fn within_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.cpu_percent)
            && (0.0..=100.0).contains(&self.memory_percent)
            && self.used_memory_gb >= 0.0
            && self.total_memory_gb >= self.used_memory_gb
    }
}

impl From<HostSample> for MetricsBody {
    fn from(s: HostSample) -> Self {
        Self::from_sample(&s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GIB: u64 = 1 << 30;

    #[test]
    fn converts_and_rounds() {
        let body = MetricsBody::from_sample(&HostSample {
            cpu_percent: 12.345,
            memory_percent: 47.891,
            total_memory_bytes: 16 * GIB,
            used_memory_bytes: 7 * GIB + GIB / 3,
        });
        assert_eq!(body.cpu_percent, 12.35);
        assert_eq!(body.memory_percent, 47.89);
        assert_eq!(body.total_memory_gb, 16.0);
        assert_eq!(body.used_memory_gb, 7.33);
        assert!(body.within_bounds());
    }

    #[test]
    fn out_of_range_readings_are_clamped() {
        let body = MetricsBody::from_sample(&HostSample {
            cpu_percent: 100.7,
            memory_percent: -1.0,
            total_memory_bytes: 2 * GIB,
            used_memory_bytes: 3 * GIB,
        });
        assert_eq!(body.cpu_percent, 100.0);
        assert_eq!(body.memory_percent, 0.0);
        assert_eq!(body.used_memory_gb, body.total_memory_gb);
        assert!(body.within_bounds());
    }

    #[test]
    fn wire_field_names() {
        let v = serde_json::to_value(MetricsBody {
            cpu_percent: 1.0,
            memory_percent: 2.0,
            total_memory_gb: 3.0,
            used_memory_gb: 1.5,
        })
        .unwrap();
        let obj = v.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            ["cpu_percent", "memory_percent", "total_memory_gb", "used_memory_gb"]
        );
    }
}
