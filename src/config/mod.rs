use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::platform::Platform;


/// User defaults layered between the command line and the built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository to resolve images from, e.g. `unityci`
    pub repository: Option<String>,

    /// Image name within the repository
    pub name: Option<String>,

    /// Editor version to use when none is requested
    pub version: Option<String>,

    /// Build target used when none is requested
    pub default_platform: Option<Platform>,
}

impl Config {
    /// Path of the user configuration file, if a config directory exists
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("imagetag").join("config.toml"))
    }

    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_path) = Self::path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}
