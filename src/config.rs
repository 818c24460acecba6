//! Custom attribute definitions
//!
//! Attributes missing from the built-in catalogue can be described in a JSON
//! file and added to a [`Registry`] at startup:
//!
//! ```json
//! {
//!   "attributes": [
//!     { "id": 5367, "name": "SolarTemp", "doc": "Kollektor", "access": "read-only", "type": "double" },
//!     { "id": 7900, "name": "Mode", "access": "read/write", "type": { "enum": ["off", "eco"] } }
//!   ]
//! }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::{AttrId, AttrRef, Registry};
use crate::constants::envvars;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse custom attributes JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomAttrsConfig {
    #[serde(default)]
    pub attributes: Vec<CustomAttr>,
}

#[derive(Debug, Deserialize)]
pub struct CustomAttr {
    pub id: AttrId,
    #[serde(flatten)]
    pub attr: AttrRef,
}

pub fn from_str(config_raw: &str) -> Result<CustomAttrsConfig, ConfigError> {
    serde_json::from_str::<CustomAttrsConfig>(config_raw).map_err(Into::into)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<CustomAttrsConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_str(&raw)?;
    log::debug!(
        "Loaded {} custom attributes from {}",
        config.attributes.len(),
        path.display()
    );
    Ok(config)
}

/// Custom attribute file named by `$VITO_CUSTOM_ATTRS`, if set
pub fn path_from_env() -> Option<PathBuf> {
    env::var_os(envvars::CUSTOM_ATTRS).map(PathBuf::from)
}

impl CustomAttrsConfig {
    /// Add every definition to `registry`, in file order
    pub fn apply(self, registry: &Registry) {
        registry.extend(self.attributes.into_iter().map(|c| (c.id, c.attr)));
    }
}
