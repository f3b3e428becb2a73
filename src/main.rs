//! blogapi — environment-keyed API configuration and user fetch client.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use blogapi::client::UserClient;
use blogapi::config::Config;
use blogapi::env::Env;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, ConfigArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::real();
    let mut config = Config::load(Some(&cli.path), &env).context("failed to load settings")?;
    if let Some(name) = cli.env {
        config.environment = name;
    }

    init_tracing(&config.log.filter);

    match cli.command {
        Command::Config(args) => run_config(&config, args),
        Command::User => run_user().await,
    }
}

/// Install the fmt subscriber on stderr, falling back to the default filter
/// when the configured directive does not parse.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter '{filter}': {e}");
        EnvFilter::new(blogapi::constants::DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the API_URL for the active environment.
fn run_config(config: &Config, args: ConfigArgs) -> Result<()> {
    let record = config.record()?;
    tracing::debug!(environment = %config.environment, "resolved configuration");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.api_url);
    }
    Ok(())
}

/// Fetch the user resource and print the raw response.
async fn run_user() -> Result<()> {
    let client = UserClient::new()?;
    let url = client.user_url();
    let response = client
        .fetch_user()
        .await
        .with_context(|| format!("failed to fetch {url}"))?;

    let status = response.status().to_string();
    let status = if response.is_success() {
        status.green().bold()
    } else {
        status.red().bold()
    };
    eprintln!("{} {}", status, url.dimmed());
    println!("{}", response.text());
    Ok(())
}
