//! Settings struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.blogapi.toml` in repo root
//! 4. `~/.config/blogapi/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::resolver::{ConfigError, ConfigRecord, resolve};
use crate::constants::{self, DEFAULT_ENVIRONMENT, DEFAULT_LOG_FILTER};
use crate::env::Env;

/// Errors during settings loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level settings.
///
/// `environment` stays a raw name until [`Config::record`] resolves it,
/// so an unknown name surfaces as [`ConfigError::UnknownEnvironment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub environment: String,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, e.g. `blogapi=debug`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// One settings file. Only keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    environment: Option<String>,
    log: LogLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct LogLayer {
    filter: Option<String>,
}

impl Config {
    /// Load settings with proper layering.
    ///
    /// Reads from global config, repo-local config, then applies
    /// environment variable overrides.
    pub fn load(repo_root: Option<&Path>, env: &Env) -> Result<Self, LoadError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), repo_root, env)
    }

    fn load_layers(
        global_path: Option<&Path>,
        repo_root: Option<&Path>,
        env: &Env,
    ) -> Result<Self, LoadError> {
        let mut config = Config::default();

        if let Some(path) = global_path.filter(|p| p.exists()) {
            config.merge(Self::load_file(path)?);
        }

        if let Some(root) = repo_root {
            let local_path = root.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
            }
        }

        for warning in config.apply_env_vars(env) {
            eprintln!("Warning: {warning}");
        }

        Ok(config)
    }

    /// Resolve the configured environment to its record.
    pub fn record(&self) -> Result<ConfigRecord, ConfigError> {
        resolve(&self.environment)
    }

    /// Load one settings layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| LoadError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this one; every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(environment) = layer.environment {
            self.environment = environment;
        }
        if let Some(filter) = layer.log.filter {
            self.log.filter = filter;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Returns warnings for ignored values. These are printed directly
    /// because no tracing subscriber exists while settings load.
    fn apply_env_vars(&mut self, env: &Env) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Ok(val) = env.var(constants::ENV_ENVIRONMENT) {
            self.environment = val;
        }
        if let Ok(val) = env.var(constants::ENV_LOG) {
            if val.trim().is_empty() {
                warnings.push(format!("ignoring empty {} value", constants::ENV_LOG));
            } else {
                self.log.filter = val;
            }
        }
        warnings
    }
}
