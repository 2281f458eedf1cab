//! Logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init() {
    if let Err(e) = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
