//! Host sampling seam.
//!
//! The `/metrics` handler only sees [`HostSampler`]; production wires in
//! [`SysinfoSampler`], tests wire in canned readings.

mod system;

use async_trait::async_trait;

use hostpulse_core::{error::Result, protocol::HostSample};

pub use system::SysinfoSampler;

/// One fresh host reading per call.
#[async_trait]
pub trait HostSampler: Send + Sync {
    /// Take a sample. May suspend for the CPU averaging interval.
    async fn sample(&self) -> Result<HostSample>;
}
