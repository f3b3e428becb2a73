//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Blog API configuration and user service client.
#[derive(Parser, Debug)]
#[command(
    name = "blogapi",
    version = blogapi::constants::VERSION,
    about = "Resolve blog API configuration and fetch users",
)]
pub struct Cli {
    /// Deployment environment (test, devel, stage). Overrides config files.
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Directory to search for `.blogapi.toml` (default: current directory).
    #[arg(long, global = true, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the API_URL of the active environment.
    Config(ConfigArgs),

    /// Fetch the user resource and print the response.
    User,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print the full record as JSON instead of the bare URL.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
