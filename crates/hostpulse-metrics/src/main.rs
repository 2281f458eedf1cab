//! Metrics service binary.
//!
//! Reads `metrics.yaml` from the working directory when present.

use std::sync::Arc;

use hostpulse_core::error::Result;
use hostpulse_metrics::{app_state::AppState, config, router, sampler::SysinfoSampler, SERVICE_NAME};
use hostpulse_server::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let cfg: config::MetricsConfig = hostpulse_server::config::load_or_default(config::CONFIG_FILE)
        .inspect_err(|e| tracing::error!(error = %e, "config load failed"))?;
    let listen = cfg.server.listen_addr()?;

    let sampler = SysinfoSampler::new(cfg.sampling.cpu_interval());
    tracing::info!(interval = ?sampler.interval(), "cpu sampling configured");

    let state = AppState::new(Arc::new(sampler));
    hostpulse_server::serve(SERVICE_NAME, listen, router::build_router(state)).await
}
