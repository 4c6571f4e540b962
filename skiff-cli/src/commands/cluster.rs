//! Cluster command handlers
//!
//! Handles cluster deploys through the admin API.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use colored::*;
use skiff_client::AdminClient;
use uuid::Uuid;

use crate::api::AdminApi;
use crate::config::{self, ADMIN_URL_VAR, Config};
use crate::credentials::provider_for;
use crate::deploy::dry_run::{AssumeYes, Confirm, PromptConfirm};
use crate::deploy::{ClusterOutcome, ClusterSelection, deploy_clusters};

/// Cluster subcommands
#[derive(Subcommand)]
pub enum ClusterCommands {
    /// Deploy one or more clusters (dry run unless --disable-dry-run)
    Deploy(ClusterDeployArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ClusterDeployArgs {
    /// Cluster id, repeatable
    #[arg(long = "cluster-id", required_unless_present = "all")]
    pub cluster_ids: Vec<Uuid>,

    /// Deploy every cluster
    #[arg(long, conflicts_with = "cluster_ids")]
    pub all: bool,

    /// Really deploy instead of simulating
    #[arg(long)]
    pub disable_dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ClusterDeployArgs {
    fn selection(&self) -> ClusterSelection {
        if self.all {
            ClusterSelection::All
        } else {
            ClusterSelection::Ids(self.cluster_ids.clone())
        }
    }
}

/// Handle cluster commands
pub async fn handle_cluster_command(command: ClusterCommands, config: &Config) -> Result<()> {
    let admin_url = std::env::var(ADMIN_URL_VAR).ok();

    match command {
        ClusterCommands::Deploy(args) => {
            let mut confirm: Box<dyn Confirm> = if args.yes {
                Box::new(AssumeYes)
            } else {
                Box::new(PromptConfirm)
            };

            deploy(&args, config, admin_url.as_deref(), confirm.as_mut()).await
        }
    }
}

/// Check the admin URL, load credentials, then gate and submit
///
/// A missing or malformed admin URL fails before the token is read, the user
/// is prompted or anything is sent.
async fn deploy(
    args: &ClusterDeployArgs,
    config: &Config,
    admin_url: Option<&str>,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    let admin_url = config::parse_admin_url(admin_url)?;
    let token = provider_for(config).access_token()?;
    let client = AdminClient::new(&admin_url, &token).context("Failed to create admin client")?;

    submit(&client, &args.selection(), args.disable_dry_run, confirm).await
}

/// Submit the cluster deploys and print one line per target
async fn submit(
    admin: &dyn AdminApi,
    selection: &ClusterSelection,
    dry_run_disabled: bool,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    let outcome = deploy_clusters(admin, selection, dry_run_disabled, confirm).await?;
    let failures = outcome.failures();

    let ClusterOutcome::Submitted { request, results } = outcome else {
        println!("{}", "Deployment cancelled, nothing was sent.".yellow());
        return Ok(());
    };

    let mode = if request.dry_run { " (dry run)" } else { "" };
    for result in &results {
        match &result.result {
            Ok(()) => println!("{} {} deploying{}.", "✓".green(), result.target, mode),
            Err(err) => println!("{} {}: {}", "✗".red(), result.target, err),
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} cluster deploy(s) failed",
            failures,
            results.len()
        );
    }

    Ok(())
}
