//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and URLs so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "blogapi";

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent with outbound requests.
pub const USER_AGENT: &str = concat!("blogapi/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.blogapi.toml` in repo root).
pub const CONFIG_FILENAME: &str = ".blogapi.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "blogapi";

/// Environment name used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "devel";

/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Users collection of the user service.
///
/// Not derived from any environment's `API_URL`; the user service is a
/// separate host.
pub const USERS_URL: &str = "https://example.dev/api/v1/users";

/// Identifier of the user resource fetched by the client.
pub const USER_ID: u64 = 1;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_ENVIRONMENT: &str = "BLOG_ENV";
pub const ENV_LOG: &str = "BLOG_LOG";
