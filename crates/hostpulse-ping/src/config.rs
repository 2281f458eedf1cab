//! `ping.yaml` schema.

use serde::Deserialize;

use hostpulse_core::error::Result;
use hostpulse_server::config::{check_version, ServerSection, Validate, CONFIG_VERSION};

pub const CONFIG_FILE: &str = "ping.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PingConfig {
    pub version: u32,

    #[serde(default = "default_server")]
    pub server: ServerSection,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: default_server(),
        }
    }
}

impl Validate for PingConfig {
    fn validate(&self) -> Result<()> {
        check_version(self.version)?;
        self.server.validate()
    }
}

fn default_server() -> ServerSection {
    ServerSection::with_listen("0.0.0.0:8000")
}
