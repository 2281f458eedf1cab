//! Static payloads served by the root and `/ping` routes, plus the error body.

use serde::{Deserialize, Serialize};

use crate::error::HostPulseError;

/// Root health-check object: `{"status":"ok","service":"<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
    pub service: String,
}

impl StatusBody {
    /// Healthy status for the named service.
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".into(),
            service: service.into(),
        }
    }
}

/// Reply of the `/ping` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongBody {
    pub response: String,
}

impl PongBody {
    pub const PONG: &'static str = "pong";

    pub fn pong() -> Self {
        Self {
            response: Self::PONG.into(),
        }
    }
}

/// Error body for every non-2xx response the services produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable client code (e.g. `INTERNAL`).
    pub error: String,
    /// Human readable detail.
    pub message: String,
}

impl From<&HostPulseError> for ErrorBody {
    fn from(e: &HostPulseError) -> Self {
        Self {
            error: e.client_code().as_str().to_string(),
            message: e.to_string(),
        }
    }
}
