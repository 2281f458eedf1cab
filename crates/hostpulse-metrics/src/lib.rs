//! Metrics service: host CPU/memory utilization on demand.
//!
//! - `GET /`        : `{"status":"ok","service":"metrics-service"}`
//! - `GET /metrics` : fresh CPU/memory sample, see [`MetricsBody`]
//!
//! Every `/metrics` call samples the host anew; nothing is cached between
//! requests.
//!
//! [`MetricsBody`]: hostpulse_core::protocol::MetricsBody

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
pub mod sampler;

pub const SERVICE_NAME: &str = "metrics-service";
