//! Shared error type across hostpulse crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostPulseError>;

/// Unified error type used by core, server plumbing and both services.
#[derive(Debug, Error)]
pub enum HostPulseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("host sampling failed: {0}")]
    Sampling(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HostPulseError {
    /// Map internal error to a stable client-facing code.
    ///
    /// Sampling failures are reported as `INTERNAL`; the detail stays in the
    /// message and the server log.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HostPulseError::BadRequest(_) => ClientCode::BadRequest,
            HostPulseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HostPulseError::Sampling(_) | HostPulseError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True when the error is the server's fault rather than the caller's.
    pub fn is_server_side(&self) -> bool {
        self.client_code() == ClientCode::Internal
    }
}
