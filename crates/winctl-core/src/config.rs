use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::{Error, Result};

/// Top-level configuration for winctl.
///
/// Loaded from `~/.config/winctl/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging.
    pub log: LogConfig,
    /// Snapshot cache.
    pub registry: RegistryConfig,
    /// Ancestor walks.
    pub ancestry: AncestryConfig,
}

/// Snapshot cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Whether snapshots are memoized between calls.
    pub enabled: bool,
}

/// Ancestor walk settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AncestryConfig {
    /// Maximum number of parent/owner hops before a walk gives up.
    pub max_depth: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AncestryConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.ancestry.max_depth = self.ancestry.max_depth.clamp(1, 1024);
        self.log.max_file_mb = self.log.max_file_mb.clamp(1, 1024);
    }
}

/// Returns the config directory: `~/.config/winctl/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("winctl"))
}

/// Returns the config file path: `~/.config/winctl/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Reads and validates a config file.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(path, &content)
}

/// Tries to load `~/.config/winctl/config.toml`.
pub fn try_load() -> Result<Config> {
    let path = config_path().ok_or_else(|| Error::Config {
        path: PathBuf::from("~/.config/winctl/config.toml"),
        message: "could not determine home directory".into(),
    })?;
    load_from(&path)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
pub fn load() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => Config::default(),
    }
}

/// Loads `path`, falling back to defaults on any error.
pub fn load_or_default(path: &Path) -> Config {
    match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(event = "core.config.load_failed", error = %e);
            Config::default()
        }
    }
}

fn parse(path: &Path, content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate();
    Ok(config)
}
