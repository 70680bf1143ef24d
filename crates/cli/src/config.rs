// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration resolution: flags, then environment, then `cellar.toml`

use cellar_core::OwnerId;
use cellar_storage::StoreConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "cellar.toml";
pub const LOCK_FILE: &str = "cellar.lock";
pub const DEFAULT_OWNER: &str = "default";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const ENV_CONFIG: &str = "CELLAR_CONFIG";
pub const ENV_DATA_DIR: &str = "CELLAR_DATA_DIR";
pub const ENV_OWNER: &str = "CELLAR_OWNER";
pub const ENV_LOG: &str = "CELLAR_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine data directory; pass --data-dir")]
    NoDataDir,

    #[error("Config file not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Invalid config in {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

/// Contents of `cellar.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub owner: Option<String>,
    pub store: StoreConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
    /// Log to this file instead of stderr
    pub file: Option<PathBuf>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub owner: Option<String>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub owner: OwnerId,
    pub store: StoreConfig,
    pub log: LogConfig,
    /// The file the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Settings {
    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join(LOCK_FILE)
    }

    /// Filter directive: `CELLAR_LOG` wins over the configured level
    pub fn log_filter(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env(ENV_LOG)
            .or_else(|| self.log.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}

/// Resolve settings against the process environment
pub fn resolve(overrides: &Overrides) -> Result<Settings, ConfigError> {
    resolve_with(overrides, |key| std::env::var(key).ok(), dirs::data_dir)
}

/// Resolve settings with an injected environment and platform data dir.
///
/// The config file is the `--config` flag, else `CELLAR_CONFIG`, else
/// `cellar.toml` inside the data dir named by flag or env. Only an explicitly
/// named file must exist.
pub fn resolve_with(
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
    platform_data_dir: impl Fn() -> Option<PathBuf>,
) -> Result<Settings, ConfigError> {
    let env_data_dir = env(ENV_DATA_DIR).map(PathBuf::from);
    let early_data_dir = overrides.data_dir.clone().or(env_data_dir);

    let explicit = overrides.config.clone().or_else(|| env(ENV_CONFIG).map(PathBuf::from));
    let (file, source) = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::Missing(path));
            }
            (load(&path)?, Some(path))
        }
        None => match &early_data_dir {
            Some(dir) if dir.join(CONFIG_FILE).exists() => {
                let path = dir.join(CONFIG_FILE);
                (load(&path)?, Some(path))
            }
            _ => (FileConfig::default(), None),
        },
    };

    let data_dir = match early_data_dir.or(file.data_dir) {
        Some(dir) => dir,
        None => platform_data_dir().ok_or(ConfigError::NoDataDir)?.join("cellar"),
    };
    let owner = overrides
        .owner
        .clone()
        .or_else(|| env(ENV_OWNER))
        .or(file.owner)
        .unwrap_or_else(|| DEFAULT_OWNER.to_string());

    Ok(Settings {
        data_dir,
        owner: OwnerId::new(owner),
        store: file.store,
        log: file.log,
        source,
    })
}

/// Parse one config file
pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
