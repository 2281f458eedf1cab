//! Service config loader (strict parsing).
//!
//! Each service owns its document type; this module only knows how to read,
//! parse and validate one. Unknown keys are rejected at every level.

pub mod schema;

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;

use hostpulse_core::error::{HostPulseError, Result};

pub use schema::{check_version, ServerSection, Validate, CONFIG_VERSION};

pub fn load_from_file<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        HostPulseError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let cfg: T = serde_yaml::from_str(s)
        .map_err(|e| HostPulseError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields `T::default()`.
///
/// A file that exists and fails to parse or validate is still an error.
pub fn load_or_default<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned + Validate + Default,
{
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => load_from_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            let cfg = T::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(HostPulseError::Internal(format!(
            "stat config {} failed: {e}",
            path.display()
        ))),
    }
}
