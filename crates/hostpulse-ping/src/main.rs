//! Ping service binary.
//!
//! Reads `ping.yaml` from the working directory when present.

use hostpulse_core::error::Result;
use hostpulse_ping::{config, router, SERVICE_NAME};
use hostpulse_server::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let cfg: config::PingConfig = hostpulse_server::config::load_or_default(config::CONFIG_FILE)
        .inspect_err(|e| tracing::error!(error = %e, "config load failed"))?;
    let listen = cfg.server.listen_addr()?;

    hostpulse_server::serve(SERVICE_NAME, listen, router::build_router()).await
}
