//! Environment resolution and settings loading.
//!
//! `resolver` maps a deployment environment name to its API record.
//! `loader` layers settings files and environment variables to decide
//! which environment a run uses.

pub mod loader;
pub mod resolver;

pub use loader::{Config, LoadError, LogConfig};
pub use resolver::{ConfigError, ConfigRecord, Environment, resolve, resolve_from_env};
