//! Response payloads (JSON).
//!
//! - Status lane: the root health object, the ping reply and the error body.
//! - Metrics lane: the raw host sample and the rounded `/metrics` body.
//!
//! Field names are the wire contract; renaming a field is a breaking change.

pub mod metrics;
pub mod status;

pub use metrics::{HostSample, MetricsBody};
pub use status::{ErrorBody, PongBody, StatusBody};
