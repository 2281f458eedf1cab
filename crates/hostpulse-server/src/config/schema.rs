use std::net::SocketAddr;

use serde::Deserialize;
use hostpulse_core::error::{HostPulseError, Result};

/// Only supported config file version.
pub const CONFIG_VERSION: u32 = 1;

/// Post-parse validation for a config document.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn check_version(version: u32) -> Result<()> {
    if version != CONFIG_VERSION {
        return Err(HostPulseError::UnsupportedVersion);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub listen: String,
}

impl ServerSection {
    pub fn with_listen(listen: &str) -> Self {
        Self { listen: listen.into() }
    }

    /// Parsed listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            HostPulseError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

impl Validate for ServerSection {
    fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }
}
