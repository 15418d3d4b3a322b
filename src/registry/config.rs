//! Helper configuration file parsing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ds::error::RegistryError;

/// Declarative helper-registry setup.
///
/// Expected format:
/// ```toml
/// packs = ["string", "list"]
///
/// [aliases]
/// upper = "toUpperCase"
/// lower = "toLowerCase"
/// ```
///
/// `packs` names the helper packs to enable; `aliases` maps additional names
/// onto already-registered helpers. Build the registry with
/// [`HelperRegistry::from_config`](crate::registry::HelperRegistry::from_config).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelperConfig {
    /// Helper packs to enable, in registration order.
    #[serde(default)]
    pub packs: Vec<String>,

    /// Extra names for registered helpers (alias → target).
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl HelperConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("failed to read config file: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, RegistryError> {
        toml::from_str(content)
            .map_err(|e| RegistryError::Config(format!("failed to parse config: {}", e)))
    }
}
