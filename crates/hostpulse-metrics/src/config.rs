//! `metrics.yaml` schema.

use std::time::Duration;

use serde::Deserialize;

use hostpulse_core::error::{HostPulseError, Result};
use hostpulse_server::config::{check_version, ServerSection, Validate, CONFIG_VERSION};

pub const CONFIG_FILE: &str = "metrics.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    pub version: u32,

    #[serde(default = "default_server")]
    pub server: ServerSection,

    #[serde(default)]
    pub sampling: SamplingSection,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: default_server(),
            sampling: SamplingSection::default(),
        }
    }
}

impl Validate for MetricsConfig {
    fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()?;
        self.sampling.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSection {
    /// Window over which CPU usage is averaged.
    #[serde(default = "default_cpu_interval_ms")]
    pub cpu_interval_ms: u64,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            cpu_interval_ms: default_cpu_interval_ms(),
        }
    }
}

impl SamplingSection {
    pub fn cpu_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_interval_ms)
    }
}

impl Validate for SamplingSection {
    // below ~200ms the OS counters have not moved and usage reads as 0
    fn validate(&self) -> Result<()> {
        if !(200..=10000).contains(&self.cpu_interval_ms) {
            return Err(HostPulseError::BadRequest(
                "sampling.cpu_interval_ms must be between 200 and 10000".into(),
            ));
        }
        Ok(())
    }
}

fn default_server() -> ServerSection {
    ServerSection::with_listen("0.0.0.0:8001")
}
fn default_cpu_interval_ms() -> u64 {
    1000
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hostpulse_server::config::load_from_str;

    #[test]
    fn defaults() {
        let cfg: MetricsConfig = load_from_str("version: 1\n").unwrap();
        assert_eq!(cfg.server.listen, "0.0.0.0:8001");
        assert_eq!(cfg.sampling.cpu_interval(), Duration::from_secs(1));
    }

    #[test]
    fn interval_out_of_range() {
        let bad = "version: 1\nsampling:\n  cpu_interval_ms: 50\n";
        let err = load_from_str::<MetricsConfig>(bad).unwrap_err();
        assert!(err.to_string().contains("cpu_interval_ms"));
    }

    fn interval(ms: u64) -> Result<MetricsConfig> {
        load_from_str(&format!("version: 1\nsampling:\n  cpu_interval_ms: {ms}\n"))
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        assert!(interval(199).is_err());
        assert_eq!(interval(200).unwrap().sampling.cpu_interval_ms, 200);
        assert_eq!(interval(10000).unwrap().sampling.cpu_interval_ms, 10000);
        assert!(interval(10001).is_err());
    }

    #[test]
    fn unknown_sampling_key() {
        let bad = "version: 1\nsampling:\n  cpu_interval: 500\n";
        assert_eq!(
            load_from_str::<MetricsConfig>(bad).unwrap_err().client_code().as_str(),
            "BAD_REQUEST"
        );
    }
}
