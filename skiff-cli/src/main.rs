//! Skiff CLI
//!
//! Command-line interface for deploying lifecycle jobs and clusters.

mod api;
mod commands;
mod config;
mod credentials;
mod deploy;
mod error;
mod resolver;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::Config;
use error::DeployError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skiff")]
#[command(about = "Deploy lifecycle jobs and clusters", long_about = None)]
struct Cli {
    /// Platform API URL
    #[arg(
        long,
        env = "SKIFF_API_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    api_url: String,

    /// JSON token file (`access_token`, `token_type`), read instead of SKIFF_ACCESS_TOKEN
    #[arg(long, env = "SKIFF_TOKEN_FILE", global = true)]
    token_file: Option<PathBuf>,

    /// Seconds between two status polls with --watch
    #[arg(
        long,
        env = "SKIFF_WATCH_INTERVAL",
        default_value_t = deploy::watch::DEFAULT_POLL_INTERVAL.as_secs(),
        global = true
    )]
    watch_interval: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skiff_cli=warn,skiff_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        token_file: cli.token_file,
        watch_interval: Duration::from_secs(cli.watch_interval),
    };

    let result = match config.validate() {
        Ok(()) => handle_command(cli.command, &config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print a failure and pick the exit status
fn report(err: &anyhow::Error) -> ExitCode {
    let deploy_err = err.downcast_ref::<DeployError>();

    match deploy_err {
        Some(DeployError::Cancelled(message)) => eprintln!("{} {}", "⚠".yellow(), message),
        _ => eprintln!("{} {:#}", "error:".red().bold(), err),
    }
    if let Some(hint) = deploy_err.and_then(DeployError::hint) {
        eprintln!("{}", hint);
    }

    ExitCode::from(deploy_err.map_or(1, DeployError::exit_code))
}
