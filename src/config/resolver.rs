//! Deployment environments and their API configuration records.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_ENVIRONMENT, ENV_ENVIRONMENT};
use crate::env::Env;

/// Errors from environment resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment: '{0}'. Supported: test, devel, stage")]
    UnknownEnvironment(String),
}

/// A deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Test,
    #[default]
    Devel,
    Stage,
}

impl Environment {
    /// Every known environment, in table order.
    pub const ALL: [Environment; 3] = [Environment::Test, Environment::Devel, Environment::Stage];

    /// The configuration record for this environment.
    pub fn config(self) -> ConfigRecord {
        let api_url = match self {
            Environment::Test | Environment::Devel => "http://dev.blog.local/api",
            Environment::Stage => "https://stage.blog.local/api",
        };
        ConfigRecord {
            api_url: api_url.to_string(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Devel => "devel",
            Environment::Stage => "stage",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the known names.
impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Environment::Test),
            "devel" => Ok(Environment::Devel),
            "stage" => Ok(Environment::Stage),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Options active for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Base URL of the blog API.
    #[serde(rename = "API_URL")]
    pub api_url: String,
}

/// Resolve an environment name to its configuration record.
///
/// Names outside the known set are an error rather than an empty record.
pub fn resolve(environment_name: &str) -> Result<ConfigRecord, ConfigError> {
    environment_name.parse::<Environment>().map(Environment::config)
}

/// Resolve the environment named by `BLOG_ENV`, defaulting to `devel`.
pub fn resolve_from_env(env: &Env) -> Result<ConfigRecord, ConfigError> {
    resolve(&env.var_or(ENV_ENVIRONMENT, DEFAULT_ENVIRONMENT))
}
