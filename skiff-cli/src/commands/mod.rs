//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod cluster;
mod lifecycle;

pub use cluster::ClusterCommands;
pub use lifecycle::LifecycleCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Lifecycle job management
    Lifecycle {
        #[command(subcommand)]
        command: LifecycleCommands,
    },
    /// Cluster management through the admin API
    Cluster {
        #[command(subcommand)]
        command: ClusterCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lifecycle { command } => {
            lifecycle::handle_lifecycle_command(command, config).await
        }
        Commands::Cluster { command } => cluster::handle_cluster_command(command, config).await,
    }
}

/// Resolves when the user presses Ctrl-C
///
/// If the signal handler cannot be installed the watch simply cannot be
/// interrupted, so this never resolves.
pub(crate) async fn interrupt_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
