//! hostpulse core: error surface, response payloads and unit helpers.
//!
//! Shared by the ping and metrics services. It carries no transport or runtime
//! dependencies so the payload contracts can be reused by clients and tests.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `HostPulseError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod units;

/// Shared result type.
pub use error::{Result, HostPulseError};
