//! Top-level facade crate for hostpulse.
//!
//! Re-exports the core types, the shared server plumbing and both services so
//! users can depend on a single crate.

pub mod core {
    pub use hostpulse_core::*;
}

pub mod server {
    pub use hostpulse_server::*;
}

pub mod ping {
    pub use hostpulse_ping::*;
}

pub mod metrics {
    pub use hostpulse_metrics::*;
}
