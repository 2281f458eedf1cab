//! Shared HTTP plumbing for the hostpulse services.
//!
//! Both service binaries are thin: they load their config through [`config`],
//! install logging through [`telemetry`], build an axum router out of the
//! helpers in [`http`], and hand it to [`serve`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod http;
pub mod serve;
pub mod telemetry;

pub use serve::serve;
